// Logging setup and debug-only logging macros.
//
// The macros compile to nothing observable in release builds, but the
// arguments stay type-checked so values used only in log lines don't trip
// unused warnings.

use chrono::Local;
use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            log::debug!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            log::info!($($arg)*);
        }
    };
}

/// Install the env_logger backend.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`. With a log file
/// the output is appended there instead of stderr, which the full-screen
/// interface needs to keep its screen clean.
pub fn init_logging(log_file: Option<&Path>) -> io::Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} [{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(path) = log_file {
        let file = File::options().create(true).append(true).open(path)?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    // A second init (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
    Ok(())
}
