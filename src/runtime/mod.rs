use std::env;

mod event_loop;
mod settings;
mod startup;
mod terminal;

use startup::Command;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    let location = match startup::parse_args(env::args().skip(1)) {
        Command::Help => {
            println!("{}", startup::USAGE);
            return Ok(());
        }
        Command::PrintConfig => {
            print!("{}", settings.to_toml()?);
            return Ok(());
        }
        Command::Quiz { location } => location,
    };

    // Load before touching the terminal so errors print normally.
    let mut app = startup::build_app(location.as_deref(), &settings)?;
    let mut rng = rand::thread_rng();
    app.next_question(&mut rng)?;

    let run_result = {
        let (mut tui, _restore) = terminal::enter()?;
        event_loop::run(&mut tui, &settings, &mut app, &mut rng)
    };

    log::info!("asked {} questions", app.asked);
    run_result
}
