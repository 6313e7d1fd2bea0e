//! Round state and guess evaluation.
//!
//! A `Round` owns the secret word and everything the player has learned
//! about it. It is the only place game state changes: `parse_guess` filters
//! raw input, `apply` mutates, `status` reports whether the round is over.

use crate::debug_log;
use crate::error::{GameError, GuessError};
use crate::wordbank::choose_secret;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;

pub const MAX_ATTEMPTS: u8 = 7;
pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    Letter(char),
    Word(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    LetterFound { letter: char, positions: usize },
    LetterMissed(char),
    WordSolved(String),
    WordMissed(String),
}

impl GuessOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::LetterFound { .. } | Self::WordSolved(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    AwaitingGuess,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, Self::AwaitingGuess)
    }
}

/// How many distinct letters are revealed before the first guess.
pub fn pre_reveal_count(distinct_letters: usize) -> usize {
    match distinct_letters {
        0 | 1 => 0,
        2 => 1,
        _ => 2,
    }
}

#[derive(Debug, Clone)]
pub struct Round {
    secret: Vec<char>,
    revealed: Vec<bool>,
    attempts_left: u8,
    guessed_letters: BTreeSet<char>,
    wrong_letters: BTreeSet<char>,
    wrong_words: usize,
}

impl Round {
    /// Start a round with a random word from `words` and random hints.
    pub fn initialize<R: Rng + ?Sized>(words: &[String], rng: &mut R) -> Result<Self, GameError> {
        let secret = choose_secret(words, rng).ok_or(GameError::EmptyWordList)?;
        // Ordered so that a seeded rng always picks the same hints.
        let distinct: Vec<char> = secret
            .chars()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let hints: Vec<char> = distinct
            .choose_multiple(rng, pre_reveal_count(distinct.len()))
            .copied()
            .collect();

        let round = Self::with_hints(secret, &hints);
        debug_log!(
            "New round: {} letters, hints {:?}",
            round.word_len(),
            round.guessed_letters
        );
        Ok(round)
    }

    /// Build a round for a known secret with the given letters already
    /// revealed. Hints that do not occur in the word are ignored.
    pub fn with_hints(secret: &str, hints: &[char]) -> Self {
        let secret: Vec<char> = secret.to_lowercase().chars().collect();
        let mut round = Self {
            revealed: vec![false; secret.len()],
            secret,
            attempts_left: MAX_ATTEMPTS,
            guessed_letters: BTreeSet::new(),
            wrong_letters: BTreeSet::new(),
            wrong_words: 0,
        };
        for &hint in hints {
            if round.reveal(hint) > 0 {
                round.guessed_letters.insert(hint);
            }
        }
        round
    }

    pub fn secret_word(&self) -> String {
        self.secret.iter().collect()
    }

    pub fn word_len(&self) -> usize {
        self.secret.len()
    }

    pub fn attempts_left(&self) -> u8 {
        self.attempts_left
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    pub fn wrong_letters(&self) -> &BTreeSet<char> {
        &self.wrong_letters
    }

    /// Wrong letters plus wrong whole-word guesses.
    pub fn wrong_guesses(&self) -> usize {
        self.wrong_letters.len() + self.wrong_words
    }

    /// The word as the player sees it, with `PLACEHOLDER` for hidden letters.
    pub fn display_word(&self) -> Vec<char> {
        self.secret
            .iter()
            .zip(&self.revealed)
            .map(|(&c, &shown)| if shown { c } else { PLACEHOLDER })
            .collect()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|&&shown| shown).count()
    }

    pub fn status(&self) -> RoundStatus {
        if self.revealed.iter().all(|&shown| shown) {
            RoundStatus::Won
        } else if self.attempts_left == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::AwaitingGuess
        }
    }

    /// Classify raw player input without touching the round.
    pub fn parse_guess(&self, raw: &str) -> Result<Guess, GuessError> {
        let input = raw.trim().to_lowercase();
        if input.is_empty() {
            return Err(GuessError::Empty);
        }
        if !input.chars().all(char::is_alphabetic) {
            return Err(GuessError::NonAlphabetic);
        }

        let len = input.chars().count();
        if len == self.word_len() {
            return Ok(Guess::Word(input));
        }
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) if self.guessed_letters.contains(&letter) => {
                Err(GuessError::AlreadyGuessed(letter))
            }
            (Some(letter), None) => Ok(Guess::Letter(letter)),
            _ => Err(GuessError::WrongLength {
                expected: self.word_len(),
                actual: len,
            }),
        }
    }

    /// Apply a guess. Rejected guesses leave the round untouched.
    pub fn apply(&mut self, guess: Guess) -> Result<GuessOutcome, GuessError> {
        if self.status().is_over() {
            return Err(GuessError::RoundOver);
        }

        let outcome = match guess {
            Guess::Letter(letter) => {
                if !self.guessed_letters.insert(letter) {
                    return Err(GuessError::AlreadyGuessed(letter));
                }
                match self.reveal(letter) {
                    0 => {
                        self.wrong_letters.insert(letter);
                        self.lose_attempt();
                        GuessOutcome::LetterMissed(letter)
                    }
                    positions => GuessOutcome::LetterFound { letter, positions },
                }
            }
            Guess::Word(word) => {
                let candidate: Vec<char> = word.chars().collect();
                if candidate.len() != self.word_len() {
                    return Err(GuessError::WrongLength {
                        expected: self.word_len(),
                        actual: candidate.len(),
                    });
                }
                if candidate == self.secret {
                    self.revealed.fill(true);
                    GuessOutcome::WordSolved(word)
                } else {
                    self.wrong_words += 1;
                    self.lose_attempt();
                    GuessOutcome::WordMissed(word)
                }
            }
        };
        debug_log!("{:?}, {} attempts left", outcome, self.attempts_left);
        Ok(outcome)
    }

    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        let guess = self.parse_guess(raw)?;
        self.apply(guess)
    }

    fn reveal(&mut self, letter: char) -> usize {
        let mut positions = 0;
        for (c, shown) in self.secret.iter().zip(self.revealed.iter_mut()) {
            if *c == letter {
                *shown = true;
                positions += 1;
            }
        }
        positions
    }

    fn lose_attempt(&mut self) {
        self.attempts_left = self.attempts_left.saturating_sub(1);
    }
}
