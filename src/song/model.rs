/// One song from the song list.
///
/// `text_body` holds the characters the quiz draws excerpts from (the kanji
/// found in the song's lyrics).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub source_url: String,
    pub text_body: String,
}

impl Song {
    /// Length of the text body in characters.
    pub fn body_len(&self) -> usize {
        self.text_body.chars().count()
    }

    /// "Title / Artist", the way the answer is shown.
    pub fn answer_text(&self) -> String {
        format!("{} / {}", self.title, self.artist)
    }
}
