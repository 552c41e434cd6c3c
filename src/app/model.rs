//! Application model types: `App` and `QuizState`.
//!
//! The `App` struct owns the parsed song list and the current question. The
//! question is replaced wholesale on every "next"; the only in-place change is
//! flipping the answer to revealed.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::error::Result;
use crate::quiz::{Question, select_question};
use crate::song::Song;

/// Where the quiz currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizState {
    /// No question drawn yet.
    Loading,
    /// A question is on screen.
    Shown {
        question: Question,
        revealed: bool,
        shown_at: Instant,
    },
}

impl Default for QuizState {
    fn default() -> Self {
        Self::Loading
    }
}

/// Timing of the staggered excerpt reveal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RevealTiming {
    /// Time until the first character appears.
    pub delay: Duration,
    /// Time between characters.
    pub interval: Duration,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(1),
            interval: Duration::from_secs(1),
        }
    }
}

/// The main application model.
pub struct App {
    pub songs: Vec<Song>,
    pub state: QuizState,
    pub excerpt_len: usize,
    pub timing: RevealTiming,
    pub source_name: Option<String>,
    /// Number of questions drawn so far (shown in the status line).
    pub asked: usize,
}

impl App {
    /// Create a new `App` over `songs`; no question is drawn yet.
    pub fn new(songs: Vec<Song>, excerpt_len: usize) -> Self {
        Self {
            songs,
            state: QuizState::Loading,
            excerpt_len,
            timing: RevealTiming::default(),
            source_name: None,
            asked: 0,
        }
    }

    /// Record where the songs were loaded from.
    pub fn set_source_name(&mut self, name: String) {
        self.source_name = Some(name);
    }

    /// Return true if the song list contains any songs.
    pub fn has_songs(&self) -> bool {
        !self.songs.is_empty()
    }

    /// Draw a fresh question and restart the reveal clock.
    pub fn next_question<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.next_question_at(rng, Instant::now())
    }

    /// Like [`App::next_question`] with an explicit "shown at" time.
    pub fn next_question_at<R: Rng + ?Sized>(&mut self, rng: &mut R, now: Instant) -> Result<()> {
        let question = select_question(&self.songs, self.excerpt_len, rng)?;
        log::trace!(
            "question {}: {} chars from \"{}\"",
            self.asked + 1,
            question.excerpt.chars().count(),
            question.target.title
        );
        self.state = QuizState::Shown {
            question,
            revealed: false,
            shown_at: now,
        };
        self.asked += 1;
        Ok(())
    }

    /// Reveal the answer. One-way: there is no way back to hidden for the
    /// same question. Does nothing before the first question.
    pub fn reveal_answer(&mut self) {
        if let QuizState::Shown { revealed, .. } = &mut self.state {
            *revealed = true;
        }
    }

    /// The question currently on screen, if any.
    pub fn question(&self) -> Option<&Question> {
        match &self.state {
            QuizState::Shown { question, .. } => Some(question),
            QuizState::Loading => None,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.state, QuizState::Shown { revealed: true, .. })
    }

    /// How many excerpt characters are visible at `now`.
    ///
    /// Character `i` appears at `delay + i * interval` after the question was shown.
    pub fn visible_chars(&self, now: Instant) -> usize {
        let QuizState::Shown {
            question, shown_at, ..
        } = &self.state
        else {
            return 0;
        };

        let total = question.excerpt.chars().count();
        let elapsed = now.saturating_duration_since(*shown_at);
        if elapsed < self.timing.delay {
            return 0;
        }
        if self.timing.interval.is_zero() {
            return total;
        }

        let since_first = elapsed - self.timing.delay;
        let steps = since_first.as_millis() / self.timing.interval.as_millis().max(1);
        (steps as usize).saturating_add(1).min(total)
    }

    /// True while characters are still appearing.
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.question() {
            Some(q) => self.visible_chars(now) < q.excerpt.chars().count(),
            None => false,
        }
    }
}
