use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{Error, Result};
use crate::song::Song;

/// Number of characters shown per question unless configured otherwise.
pub const DEFAULT_EXCERPT_LEN: usize = 8;

/// A quiz prompt: the song to guess and the excerpt shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub target: Song,
    pub excerpt: String,
}

impl Question {
    /// Build the question for `song` with the window starting at `offset`.
    ///
    /// Offsets and lengths count characters. The window is clamped to the
    /// body, so a body no longer than `excerpt_len` yields the whole body.
    pub fn at(song: &Song, offset: usize, excerpt_len: usize) -> Self {
        let len = song.body_len();
        let offset = offset.min(len.saturating_sub(excerpt_len));
        let excerpt = song.text_body.chars().skip(offset).take(excerpt_len).collect();

        Self {
            target: song.clone(),
            excerpt,
        }
    }
}

/// Draw an independent question from `songs`.
///
/// The song is chosen uniformly. The start offset is drawn from
/// `0..len - excerpt_len`, so the final window position is never chosen.
/// Bodies of `excerpt_len` characters or fewer are shown whole.
///
/// Lengths count `char`s, so a character outside the BMP (emoji, rare
/// CJK extension kanji) counts as one, not as a surrogate pair.
pub fn select_question<R: Rng + ?Sized>(
    songs: &[Song],
    excerpt_len: usize,
    rng: &mut R,
) -> Result<Question> {
    if excerpt_len == 0 {
        return Err(Error::InvalidExcerptLength);
    }
    let target = songs.choose(rng).ok_or(Error::NoSongs)?;

    let len = target.body_len();
    let offset = if len > excerpt_len {
        rng.gen_range(0..len - excerpt_len)
    } else {
        log::trace!(
            "\"{}\" has only {len} characters, showing the whole body",
            target.title
        );
        0
    };

    Ok(Question::at(target, offset, excerpt_len))
}
