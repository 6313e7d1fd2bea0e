// Library interface for hangman
// The binary and the integration tests both drive the game through it

pub mod cli;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod render;
pub mod round;
pub mod signals;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::{GameError, GuessError};
pub use game_state::{GameInterface, Notice, Prompt, SessionSummary, game_loop, play_round};
pub use round::{Guess, GuessOutcome, MAX_ATTEMPTS, PLACEHOLDER, Round, RoundStatus};
pub use wordbank::{
    Language, WordList, WordSource, load_wordbank_from_file, load_wordbank_from_str,
};
