//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock, time::Instant};

use crate::app::App;
use crate::config::UiSettings;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("enter/a", "show answer");
    map.insert("space/n", "next question");
    map.insert("q/esc", "quit");
    map
});

/// Render the controls help text.
fn controls_text() -> String {
    let order = ["enter/a", "space/n", "q/esc"];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Split `excerpt` into the part shown so far, padding hidden characters
/// with ideographic spaces so the line does not jump as it fills in.
fn excerpt_line(excerpt: &str, visible: usize) -> String {
    excerpt
        .chars()
        .enumerate()
        .map(|(i, c)| if i < visible { c } else { '\u{3000}' })
        .collect()
}

fn status_text(app: &App) -> String {
    let mut parts: Vec<String> = vec![format!(" SONGS: {}", app.songs.len())];
    parts.push(format!("QUESTION: {}", app.asked));
    if let Some(src) = &app.source_name {
        parts.push(format!("Source: {}", src));
    }
    parts.join(" • ")
}

fn side_padding() -> Padding {
    Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" kanjiquiz ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let status = Paragraph::new(status_text(app))
        .block(Block::bordered().padding(side_padding()).title(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[1]);

    // Question
    let question_lines = match app.question() {
        Some(q) => {
            let shown = excerpt_line(&q.excerpt, app.visible_chars(now));
            vec![
                Line::from(ui_settings.question_text.as_str()),
                Line::from(""),
                Line::from(Span::styled(
                    shown,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
            ]
        }
        None => vec![Line::from("Loading...")],
    };
    let question = Paragraph::new(question_lines)
        .alignment(Alignment::Center)
        .block(Block::bordered().title(" question "))
        .wrap(Wrap { trim: false });
    frame.render_widget(question, chunks[2]);

    // Answer, only once revealed
    let answer_lines = match app.question() {
        Some(q) if app.is_revealed() => vec![
            Line::from(q.target.answer_text()).bold(),
            Line::from(q.target.source_url.as_str()).italic(),
        ],
        Some(_) => vec![Line::from("?")],
        None => Vec::new(),
    };
    let answer = Paragraph::new(answer_lines)
        .alignment(Alignment::Center)
        .block(Block::bordered().title(" answer "))
        .wrap(Wrap { trim: true });
    frame.render_widget(answer, chunks[3]);

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(side_padding()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);
}
