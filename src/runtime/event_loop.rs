use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::Rng;

use super::terminal::Tui;
use crate::app::App;
use crate::config;
use crate::ui;

/// What a key press asks the loop to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Reveal,
    Next,
    Quit,
    None,
}

/// Map a key press to an [`Action`].
pub fn action_for(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Char('a') => Action::Reveal,
        KeyCode::Char(' ') | KeyCode::Char('n') => Action::Next,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

/// Apply `action` to `app`. Returns `Ok(true)` when shutdown is requested.
pub fn apply<R: Rng + ?Sized>(
    action: Action,
    app: &mut App,
    rng: &mut R,
) -> Result<bool, Box<dyn std::error::Error>> {
    match action {
        Action::Reveal => app.reveal_answer(),
        Action::Next => app.next_question(rng)?,
        Action::Quit => return Ok(true),
        Action::None => {}
    }
    Ok(false)
}

/// Main terminal event loop: draws the quiz and handles input.
/// Returns `Ok(())` when shutdown is requested.
pub fn run<R: Rng + ?Sized>(
    terminal: &mut Tui,
    settings: &config::Settings,
    app: &mut App,
    rng: &mut R,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let now = Instant::now();
        terminal.draw(|f| ui::draw(f, app, &settings.ui, now))?;

        // Redraw often while characters are still appearing.
        let timeout = if app.is_animating(now) {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(250)
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if apply(action_for(key), app, rng)? {
                    break;
                }
            }
        }
    }

    Ok(())
}
