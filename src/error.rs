//! Error types for the game.
//!
//! `GuessError` is the recoverable kind: it is shown to the player and the
//! prompt is repeated. `GameError` ends the session (or, for `Interrupted`,
//! ends it politely).

use thiserror::Error;

/// Why a guess was not accepted. The message is the corrective text shown to
/// the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Please enter a letter or a word!")]
    Empty,

    #[error("Please use letters only!")]
    NonAlphabetic,

    #[error("Enter either a single letter or a {expected}-letter word! (got {actual} letters)")]
    WrongLength { expected: usize, actual: usize },

    #[error("You already guessed the letter '{0}'. Try another one!")]
    AlreadyGuessed(char),

    #[error("The round is already over.")]
    RoundOver,
}

/// Session-level failures.
#[derive(Debug, Error)]
pub enum GameError {
    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The player asked to stop (Ctrl-C, Esc, or end of input)
    #[error("interrupted by the player")]
    Interrupted,

    /// A round cannot start without candidate words
    #[error("cannot start a round: the word list is empty")]
    EmptyWordList,

    /// Gallows stages exist only for 0..=7 attempts left
    #[error("no gallows stage for {0} remaining attempts")]
    StageOutOfRange(u8),
}

pub type Result<T> = std::result::Result<T, GameError>;
