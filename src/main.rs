mod app;
mod config;
mod error;
mod quiz;
mod runtime;
mod song;
mod source;
mod ui;

fn main() {
    pretty_env_logger::init();

    if let Err(e) = runtime::run() {
        eprintln!("kanjiquiz: {e}");
        std::process::exit(1);
    }
}
