use super::model::Song;

/// Rows with fewer tab-separated fields than this are ignored.
pub const MIN_FIELDS: usize = 5;

const TITLE: usize = 0;
const ARTIST: usize = 1;
const SOURCE_URL: usize = 2;
// Field 3 is present in the data but unused.
const TEXT_BODY: usize = 4;

/// Parse the raw song list into records, in source row order.
///
/// Row 0 is always treated as the header and skipped. Rows with fewer than
/// [`MIN_FIELDS`] fields are dropped silently; there is no validation of the
/// remaining fields.
pub fn parse(raw: &str) -> Vec<Song> {
    let mut songs = Vec::new();
    let mut dropped = 0usize;

    for (i, line) in raw.split('\n').enumerate().skip(1) {
        let line = line.strip_suffix('\r').unwrap_or(line);
        match parse_row(line) {
            Some(song) => songs.push(song),
            None => {
                log::trace!("dropping row {i}: fewer than {MIN_FIELDS} fields");
                dropped += 1;
            }
        }
    }

    log::debug!("parsed {} songs, dropped {} rows", songs.len(), dropped);
    songs
}

fn parse_row(line: &str) -> Option<Song> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    Some(Song {
        title: fields[TITLE].to_string(),
        artist: fields[ARTIST].to_string(),
        source_url: fields[SOURCE_URL].to_string(),
        text_body: fields[TEXT_BODY].to_string(),
    })
}
