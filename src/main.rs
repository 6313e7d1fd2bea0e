use hangman::cli::{CliInterface, parse_cli};
use hangman::error::GameError;
use hangman::game_state::{Notice, SessionSummary, game_loop};
use hangman::logging::init_logging;
use hangman::signals::exit_on_interrupt;
use hangman::tui::TuiInterface;
use hangman::wordbank::WordSource;
use log::{error, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};

fn run() -> Result<SessionSummary, GameError> {
    let cli = parse_cli();
    if let Err(e) = init_logging(cli.log_file.as_deref()) {
        let _ = writeln!(io::stderr(), "Failed to open log file: {e}");
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let source = WordSource::with_default_dirs(cli.words_dir);

    if cli.tui {
        let summary = {
            let mut interface = TuiInterface::new()?;
            game_loop(&mut interface, &source, &mut rng)?
        };
        // The alternate screen is gone by now; repeat the goodbye on the real one.
        let farewell = if summary.interrupted {
            Notice::Interrupted
        } else {
            Notice::Farewell
        };
        let _ = writeln!(io::stdout(), "{}", farewell.text(summary.language));
        Ok(summary)
    } else {
        if let Err(e) = exit_on_interrupt() {
            warn!("Could not install the interrupt handler: {e}");
        }
        let mut interface = CliInterface::stdio();
        game_loop(&mut interface, &source, &mut rng)
    }
}

fn main() {
    match run() {
        Ok(summary) => log::info!(
            "Session ended after {} rounds (interrupted: {})",
            summary.rounds_played,
            summary.interrupted
        ),
        Err(e) => {
            error!("session aborted: {e}");
            // Stdout may be the thing that broke
            let _ = writeln!(io::stderr(), "An error occurred: {e}");
        }
    }
}
