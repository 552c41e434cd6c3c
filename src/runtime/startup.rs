use crate::app::{App, RevealTiming};
use crate::config;
use crate::error::{Error, Result};
use crate::source;

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the quiz, optionally against a location given on the command line.
    Quiz { location: Option<String> },
    /// Print the effective configuration as TOML and exit.
    PrintConfig,
    Help,
}

pub const USAGE: &str = "usage: kanjiquiz [SOURCE]\n       kanjiquiz --print-config\n\nSOURCE is a TSV file path or an http(s):// URL (default: source.location from config)";

/// Interpret the arguments after the program name.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Command {
    let mut location = None;
    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Command::Help,
            "--print-config" => return Command::PrintConfig,
            _ if location.is_none() => location = Some(arg),
            _ => {}
        }
    }
    Command::Quiz { location }
}

/// Load the song list once and build the app around it.
///
/// Fails when the source cannot be read or yields no songs, so the quiz
/// never starts with nothing to ask.
pub fn build_app(location: Option<&str>, settings: &config::Settings) -> Result<App> {
    let location = location.unwrap_or(settings.source.location.as_str());
    let source = source::from_location(location, &settings.source);
    let name = source.describe();

    log::info!("loading songs from {name}");
    let songs = source.load_songs()?;

    let mut app = App::new(songs, settings.quiz.excerpt_length);
    if !app.has_songs() {
        log::error!("no songs found in {name}");
        return Err(Error::NoSongs);
    }
    log::info!("loaded {} songs", app.songs.len());

    app.timing = RevealTiming {
        delay: settings.ui.reveal_delay(),
        interval: settings.ui.reveal_interval(),
    };
    app.set_source_name(name);
    Ok(app)
}
