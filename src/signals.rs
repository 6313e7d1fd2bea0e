//! SIGINT / SIGTERM on the line console.
//!
//! The line console blocks in a plain `read_line`, so without a handler a
//! Ctrl-C kills the process before it can say goodbye. A watcher thread
//! prints the interrupted notice and exits with status 0 instead. The TUI
//! reads Ctrl-C as a key event and does not install this.

use std::io;

#[cfg(unix)]
pub fn exit_on_interrupt() -> io::Result<()> {
    use crate::game_state::Notice;
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::io::Write;
    use std::thread;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    thread::Builder::new()
        .name("hangman-signals".to_string())
        .spawn(move || {
            if let Some(signal) = signals.forever().next() {
                log::info!("Received signal {signal}, ending session");
                // The language may not be chosen yet
                let mut stdout = io::stdout().lock();
                let _ = writeln!(stdout, "{}", Notice::Interrupted.text(None));
                let _ = stdout.flush();
                std::process::exit(0);
            }
        })?;
    Ok(())
}

#[cfg(not(unix))]
pub fn exit_on_interrupt() -> io::Result<()> {
    Ok(())
}
