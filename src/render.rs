use crate::error::GameError;
use crate::round::{MAX_ATTEMPTS, Round};
use crate::wordbank::Language;

pub const SEPARATOR_WIDTH: usize = 50;

// Indexed by attempts left: 0 is the finished figure, 7 the bare post.
const GALLOWS_STAGES: [&str; MAX_ATTEMPTS as usize + 1] = [
    "______
|    |
|    O
|   /|\\
|   / \\
|",
    "______
|    |
|    O
|   /|\\
|   /
|",
    "______
|    |
|    O
|   /|\\
|
|",
    "______
|    |
|    O
|   /|
|
|",
    "______
|    |
|    O
|    |
|
|",
    "______
|    |
|    O
|
|
|",
    "______
|    |
|
|
|
|",
    "
|
|
|
|
|",
];

pub fn gallows_stage(attempts_left: u8) -> Result<&'static str, GameError> {
    GALLOWS_STAGES
        .get(usize::from(attempts_left))
        .copied()
        .ok_or(GameError::StageOutOfRange(attempts_left))
}

/// Captions of the board rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLabels {
    pub word: &'static str,
    pub attempts: &'static str,
    pub wrong_letters: &'static str,
}

impl BoardLabels {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Russian => Self {
                word: "Слово",
                attempts: "Осталось попыток",
                wrong_letters: "Неверные буквы",
            },
            Language::English => Self {
                word: "Word",
                attempts: "Attempts left",
                wrong_letters: "Wrong letters",
            },
        }
    }
}

/// `t _ s t`
pub fn format_display_word(round: &Round) -> String {
    round
        .display_word()
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sorted, comma separated. Empty when there are none.
pub fn format_wrong_letters(round: &Round) -> String {
    round
        .wrong_letters()
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The full text board used by the line console.
pub fn render_board(round: &Round, language: Language) -> Result<String, GameError> {
    let labels = BoardLabels::for_language(language);
    let separator = "=".repeat(SEPARATOR_WIDTH);
    let mut lines = vec![
        separator.clone(),
        gallows_stage(round.attempts_left())?.to_string(),
        format!("{}: {}", labels.word, format_display_word(round)),
        format!("{}: {}", labels.attempts, round.attempts_left()),
    ];
    if !round.wrong_letters().is_empty() {
        lines.push(format!(
            "{}: {}",
            labels.wrong_letters,
            format_wrong_letters(round)
        ));
    }
    lines.push(separator);
    Ok(lines.join("\n"))
}
