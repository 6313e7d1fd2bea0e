use log::info;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const MIN_WORD_LENGTH: usize = 4;
pub const MIN_DISTINCT_LETTERS: usize = 2;

const RUSSIAN_DEFAULTS: &[&str] = &[
    "программирование",
    "компьютер",
    "разработка",
    "алгоритм",
    "функция",
];
const ENGLISH_DEFAULTS: &[&str] = &[
    "programming",
    "computer",
    "development",
    "algorithm",
    "function",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Russian,
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Russian, Language::English];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Russian => "words_rus.txt",
            Self::English => "words_eng.txt",
        }
    }

    pub fn default_words(self) -> &'static [&'static str] {
        match self {
            Self::Russian => RUSSIAN_DEFAULTS,
            Self::English => ENGLISH_DEFAULTS,
        }
    }

    pub fn menu_number(self) -> &'static str {
        match self {
            Self::Russian => "1",
            Self::English => "2",
        }
    }

    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        let choice = choice.trim();
        Self::ALL.into_iter().find(|lang| lang.menu_number() == choice)
    }

    /// Banner shown once the language is chosen, in that language.
    pub fn playing_banner(self) -> &'static str {
        match self {
            Self::Russian => "Играем на русском языке!",
            Self::English => "Playing in English!",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Russian => write!(f, "Русский"),
            Self::English => write!(f, "English"),
        }
    }
}

/// Why the built-in list was used instead of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    Missing { file_name: &'static str },
    Unreadable { path: PathBuf, reason: String },
    NoEligibleWords { path: PathBuf },
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { file_name } => {
                write!(f, "File {file_name} not found. Using the built-in word list.")
            }
            Self::Unreadable { path, reason } => write!(
                f,
                "Could not read {} ({reason}). Using the built-in word list.",
                path.display()
            ),
            Self::NoEligibleWords { path } => write!(
                f,
                "File {} has no suitable words. Using the built-in word list.",
                path.display()
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListSource {
    File(PathBuf),
    BuiltIn(Fallback),
}

/// The candidate words for one session. Never empty.
#[derive(Debug, Clone)]
pub struct WordList {
    pub language: Language,
    pub words: Vec<String>,
    pub source: WordListSource,
}

impl WordList {
    pub fn built_in(language: Language, reason: Fallback) -> Self {
        Self {
            language,
            words: language
                .default_words()
                .iter()
                .map(|w| (*w).to_string())
                .collect(),
            source: WordListSource::BuiltIn(reason),
        }
    }

    pub fn fallback(&self) -> Option<&Fallback> {
        match &self.source {
            WordListSource::BuiltIn(reason) => Some(reason),
            WordListSource::File(_) => None,
        }
    }
}

/// A word can be played if it is long enough, is made only of letters, and
/// has at least two different letters.
pub fn is_eligible(word: &str) -> bool {
    let distinct: HashSet<char> = word.chars().collect();
    word.chars().count() >= MIN_WORD_LENGTH
        && distinct.len() >= MIN_DISTINCT_LETTERS
        && word.chars().all(char::is_alphabetic)
}

fn normalize(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    is_eligible(&word).then_some(word)
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Pick the secret word for a round.
pub fn choose_secret<'a, R: Rng + ?Sized>(words: &'a [String], rng: &mut R) -> Option<&'a str> {
    words.choose(rng).map(String::as_str)
}

/// Where word list files are looked up, in priority order.
#[derive(Debug, Clone)]
pub struct WordSource {
    search_dirs: Vec<PathBuf>,
}

impl WordSource {
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    /// The explicit directory (if any), then the working directory, then
    /// `<data dir>/hangman`.
    pub fn with_default_dirs(words_dir: Option<PathBuf>) -> Self {
        let mut search_dirs: Vec<PathBuf> = words_dir.into_iter().collect();
        search_dirs.push(PathBuf::from("."));
        if let Some(data_dir) = dirs::data_dir() {
            search_dirs.push(data_dir.join("hangman"));
        }
        Self { search_dirs }
    }

    pub fn find_file(&self, language: Language) -> Option<PathBuf> {
        self.search_dirs
            .iter()
            .map(|dir| dir.join(language.file_name()))
            .find(|path| path.is_file())
    }

    /// Load the words for `language`, falling back to the built-in list when
    /// no usable file exists. Never fails. The caller tells the player about
    /// a fallback, so it is only logged at info.
    pub fn load_words(&self, language: Language) -> WordList {
        let Some(path) = self.find_file(language) else {
            info!(
                "{} not found in {:?}, using built-in words",
                language.file_name(),
                self.search_dirs
            );
            return WordList::built_in(
                language,
                Fallback::Missing {
                    file_name: language.file_name(),
                },
            );
        };

        match load_wordbank_from_file(&path) {
            Ok(words) if words.is_empty() => {
                info!("{} has no eligible words, using built-in words", path.display());
                WordList::built_in(language, Fallback::NoEligibleWords { path })
            }
            Ok(words) => {
                crate::info_log!("Loaded {} words from {}", words.len(), path.display());
                WordList {
                    language,
                    words,
                    source: WordListSource::File(path),
                }
            }
            Err(e) => {
                info!("failed to read {}: {e}, using built-in words", path.display());
                WordList::built_in(
                    language,
                    Fallback::Unreadable {
                        path,
                        reason: e.to_string(),
                    },
                )
            }
        }
    }
}
