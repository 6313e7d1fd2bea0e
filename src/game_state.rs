use crate::error::{GameError, GuessError};
use crate::round::{Guess, GuessOutcome, Round, RoundStatus};
use crate::wordbank::{Fallback, Language, WordSource};
use crate::{debug_log, info_log};
use rand::Rng;

const YES_ANSWERS: [&str; 4] = ["да", "д", "yes", "y"];
const NO_ANSWERS: [&str; 4] = ["нет", "н", "no", "n"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Language,
    Guess,
    PlayAgain,
}

impl Prompt {
    /// Without a language the prompt carries both.
    pub fn text(self, language: Option<Language>) -> &'static str {
        match (self, language) {
            (Self::Language, _) => "Введите номер (1 или 2) / Enter a number (1 or 2):",
            (Self::Guess, Some(Language::Russian)) => "Введите букву или целое слово:",
            (Self::Guess, Some(Language::English)) => "Enter a letter or the whole word:",
            (Self::Guess, None) => {
                "Введите букву или целое слово / Enter a letter or the whole word:"
            }
            (Self::PlayAgain, Some(Language::Russian)) => "Хотите сыграть еще раз? (да/нет):",
            (Self::PlayAgain, Some(Language::English)) => "Play again? (yes/no):",
            (Self::PlayAgain, None) => "Сыграть еще раз? / Play again? (да/нет, yes/no):",
        }
    }
}

/// Everything the game tells the player besides the board itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Welcome,
    LanguageMenu,
    InvalidLanguageChoice,
    Playing(Language),
    WordListFallback(Fallback),
    RoundStarted { letters: usize, hints: usize },
    GuessRejected(GuessError),
    Outcome(GuessOutcome),
    Won { secret: String },
    Lost { secret: String },
    InvalidAnswer,
    Farewell,
    Interrupted,
}

impl Notice {
    /// The text shown for `language`. Before a language is chosen the Russian
    /// text comes first, then the English one.
    pub fn text(&self, language: Option<Language>) -> String {
        match language {
            Some(Language::Russian) => self.russian(),
            Some(Language::English) => self.english(),
            None => {
                let (russian, english) = (self.russian(), self.english());
                if russian == english {
                    english
                } else {
                    format!("{russian}\n{}", english.trim_start_matches('\n'))
                }
            }
        }
    }

    fn english(&self) -> String {
        match self {
            Self::Welcome => {
                "Welcome to Hangman!\nGuess the secret word one letter at a time.".to_string()
            }
            Self::LanguageMenu => language_menu(),
            Self::InvalidLanguageChoice => {
                "Please enter 1 for Russian or 2 for English.".to_string()
            }
            Self::Playing(lang) => lang.playing_banner().to_string(),
            Self::WordListFallback(reason) => reason.to_string(),
            Self::RoundStarted { letters, hints } => format!(
                "\nNew game! The secret word has {letters} letters.\n\
                 To help you out, {hints} of its letters are already revealed!"
            ),
            Self::GuessRejected(err) => err.to_string(),
            Self::Outcome(GuessOutcome::LetterFound { letter, .. }) => {
                format!("Nice! The letter '{letter}' is in the word!")
            }
            Self::Outcome(GuessOutcome::LetterMissed(letter)) => {
                format!("Sorry, there is no letter '{letter}' in the word.")
            }
            Self::Outcome(GuessOutcome::WordSolved(word)) => {
                format!("Excellent! You guessed the whole word '{word}'!")
            }
            Self::Outcome(GuessOutcome::WordMissed(word)) => {
                format!("Wrong! The word is not '{word}'.")
            }
            Self::Won { secret } => {
                format!("Congratulations! You guessed the word!\nThe secret word: {secret}")
            }
            Self::Lost { secret } => {
                format!("Game over! You lost.\nThe secret word was: {secret}")
            }
            Self::InvalidAnswer => "Please answer 'yes' or 'no'.".to_string(),
            Self::Farewell => "Thanks for playing! Goodbye!".to_string(),
            Self::Interrupted => "\nGame interrupted. Goodbye!".to_string(),
        }
    }

    fn russian(&self) -> String {
        match self {
            Self::Welcome => "Добро пожаловать в игру 'Виселица'!\n\
                              Попробуйте угадать загаданное слово, называя буквы по одной."
                .to_string(),
            Self::LanguageMenu => language_menu(),
            Self::InvalidLanguageChoice => {
                "Пожалуйста, введите 1 для русского или 2 для английского языка.".to_string()
            }
            Self::Playing(lang) => lang.playing_banner().to_string(),
            Self::WordListFallback(reason) => russian_fallback(reason),
            Self::RoundStarted { letters, hints } => format!(
                "\nНовая игра! Загадано слово из {letters} букв.\n\
                 Для облегчения игры уже раскрыто случайных букв: {hints}."
            ),
            Self::GuessRejected(err) => russian_rejection(err),
            Self::Outcome(GuessOutcome::LetterFound { letter, .. }) => {
                format!("Отлично! Буква '{letter}' есть в слове!")
            }
            Self::Outcome(GuessOutcome::LetterMissed(letter)) => {
                format!("К сожалению, буквы '{letter}' нет в слове.")
            }
            Self::Outcome(GuessOutcome::WordSolved(word)) => {
                format!("ПРЕВОСХОДНО! Вы угадали слово '{word}' целиком!")
            }
            Self::Outcome(GuessOutcome::WordMissed(word)) => {
                format!("Неверно! Это не слово '{word}'.")
            }
            Self::Won { secret } => {
                format!("ПОЗДРАВЛЯЕМ! Вы угадали слово!\nЗагаданное слово: {secret}")
            }
            Self::Lost { secret } => {
                format!("Игра окончена! Вы проиграли.\nЗагаданное слово было: {secret}")
            }
            Self::InvalidAnswer => "Пожалуйста, введите 'да' или 'нет'.".to_string(),
            Self::Farewell => "Спасибо за игру! До свидания!".to_string(),
            Self::Interrupted => "\nИгра прервана. До свидания!".to_string(),
        }
    }
}

fn language_menu() -> String {
    let mut menu = String::from("\nВыберите язык / Choose a language:");
    for lang in Language::ALL {
        menu.push_str(&format!("\n{}. {lang}", lang.menu_number()));
    }
    menu
}

fn russian_fallback(reason: &Fallback) -> String {
    match reason {
        Fallback::Missing { file_name } => {
            format!("Файл {file_name} не найден. Используется встроенный список слов.")
        }
        Fallback::Unreadable { path, reason } => format!(
            "Не удалось прочитать {} ({reason}). Используется встроенный список слов.",
            path.display()
        ),
        Fallback::NoEligibleWords { path } => format!(
            "В файле {} нет подходящих слов. Используется встроенный список слов.",
            path.display()
        ),
    }
}

fn russian_rejection(err: &GuessError) -> String {
    match err {
        GuessError::Empty => "Пожалуйста, введите букву или слово!".to_string(),
        GuessError::NonAlphabetic => "Пожалуйста, используйте только буквы!".to_string(),
        GuessError::WrongLength { expected, .. } => {
            format!("Введите либо одну букву, либо слово из {expected} букв!")
        }
        GuessError::AlreadyGuessed(letter) => {
            format!("Вы уже называли букву '{letter}'. Попробуйте другую!")
        }
        GuessError::RoundOver => "Раунд уже окончен.".to_string(),
    }
}

/// The seam between the game and whatever the player is typing into.
///
/// `read_line` returns `GameError::Interrupted` when the player wants out;
/// the session loop turns that into a polite goodbye. Until `set_language`
/// is called, text is shown in both languages.
pub trait GameInterface {
    fn read_line(&mut self, prompt: Prompt) -> Result<String, GameError>;
    fn display_notice(&mut self, notice: &Notice) -> Result<(), GameError>;
    fn display_round(&mut self, round: &Round) -> Result<(), GameError>;
    fn set_language(&mut self, language: Language);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub language: Option<Language>,
    pub rounds_played: usize,
    pub interrupted: bool,
}

pub fn parse_yes_no(answer: &str) -> Option<bool> {
    let answer = answer.trim().to_lowercase();
    if YES_ANSWERS.contains(&answer.as_str()) {
        Some(true)
    } else if NO_ANSWERS.contains(&answer.as_str()) {
        Some(false)
    } else {
        None
    }
}

pub fn choose_language<I: GameInterface>(interface: &mut I) -> Result<Language, GameError> {
    interface.display_notice(&Notice::LanguageMenu)?;
    loop {
        let choice = interface.read_line(Prompt::Language)?;
        match Language::from_menu_choice(&choice) {
            Some(lang) => return Ok(lang),
            None => interface.display_notice(&Notice::InvalidLanguageChoice)?,
        }
    }
}

/// Prompt until the player enters something the round accepts.
pub fn read_guess<I: GameInterface>(interface: &mut I, round: &Round) -> Result<Guess, GameError> {
    loop {
        let input = interface.read_line(Prompt::Guess)?;
        match round.parse_guess(&input) {
            Ok(guess) => return Ok(guess),
            Err(e) => {
                debug_log!("Rejected guess {:?}: {:?}", input.trim(), e);
                interface.display_notice(&Notice::GuessRejected(e))?;
            }
        }
    }
}

/// Drive one round to `Won` or `Lost`.
pub fn play_round<I: GameInterface>(
    interface: &mut I,
    round: &mut Round,
) -> Result<RoundStatus, GameError> {
    loop {
        let status = round.status();
        if status.is_over() {
            interface.display_round(round)?;
            let secret = round.secret_word();
            let notice = match status {
                RoundStatus::Won => Notice::Won { secret },
                _ => Notice::Lost { secret },
            };
            interface.display_notice(&notice)?;
            info_log!("Round over: {:?}", status);
            return Ok(status);
        }

        interface.display_round(round)?;
        let guess = read_guess(interface, round)?;
        match round.apply(guess) {
            Ok(outcome) => interface.display_notice(&Notice::Outcome(outcome))?,
            Err(e) => interface.display_notice(&Notice::GuessRejected(e))?,
        }
    }
}

pub fn ask_play_again<I: GameInterface>(interface: &mut I) -> Result<bool, GameError> {
    loop {
        let answer = interface.read_line(Prompt::PlayAgain)?;
        match parse_yes_no(&answer) {
            Some(again) => return Ok(again),
            None => interface.display_notice(&Notice::InvalidAnswer)?,
        }
    }
}

/// Run a whole session: pick a language, then play rounds until the player
/// declines or interrupts.
pub fn game_loop<I: GameInterface, R: Rng + ?Sized>(
    interface: &mut I,
    source: &WordSource,
    rng: &mut R,
) -> Result<SessionSummary, GameError> {
    let mut summary = SessionSummary::default();
    match run_rounds(interface, source, rng, &mut summary) {
        Ok(()) => interface.display_notice(&Notice::Farewell)?,
        Err(GameError::Interrupted) => {
            info_log!("Session interrupted after {} rounds", summary.rounds_played);
            summary.interrupted = true;
            interface.display_notice(&Notice::Interrupted)?;
        }
        Err(e) => return Err(e),
    }
    Ok(summary)
}

fn run_rounds<I: GameInterface, R: Rng + ?Sized>(
    interface: &mut I,
    source: &WordSource,
    rng: &mut R,
    summary: &mut SessionSummary,
) -> Result<(), GameError> {
    interface.display_notice(&Notice::Welcome)?;
    let language = choose_language(interface)?;
    interface.set_language(language);
    summary.language = Some(language);

    let word_list = source.load_words(language);
    if let Some(reason) = word_list.fallback() {
        interface.display_notice(&Notice::WordListFallback(reason.clone()))?;
    }
    interface.display_notice(&Notice::Playing(word_list.language))?;

    loop {
        let mut round = Round::initialize(&word_list.words, rng)?;
        interface.display_notice(&Notice::RoundStarted {
            letters: round.word_len(),
            hints: round.guessed_letters().len(),
        })?;
        summary.rounds_played += 1;
        play_round(interface, &mut round)?;

        if !ask_play_again(interface)? {
            return Ok(());
        }
    }
}
