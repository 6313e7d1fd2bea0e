use crate::error::GameError;
use crate::game_state::{GameInterface, Notice, Prompt};
use crate::render::render_board;
use crate::round::Round;
use crate::wordbank::Language;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Hangman: guess the secret word before the figure is complete
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory searched first for words_rus.txt / words_eng.txt
    #[arg(short = 'd', long = "words-dir")]
    pub words_dir: Option<PathBuf>,

    /// Seed for word and hint selection (reproducible rounds)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Append diagnostic logs to this file instead of stderr
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Line-based console interface over any reader and writer.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    language: Option<Language>,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            language: None,
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl CliInterface<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn read_line(&mut self, prompt: Prompt) -> Result<String, GameError> {
        write!(self.writer, "{} ", prompt.text(self.language))?;
        self.writer.flush()?;

        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            // End of input (Ctrl-D, closed pipe) ends the session like Ctrl-C.
            // SIGINT itself is handled in `signals`.
            Ok(0) => Err(GameError::Interrupted),
            Ok(_) => Ok(input.trim().to_string()),
            Err(e) => Err(e.into()),
        }
    }

    fn display_notice(&mut self, notice: &Notice) -> Result<(), GameError> {
        writeln!(self.writer, "{}", notice.text(self.language))?;
        Ok(())
    }

    fn display_round(&mut self, round: &Round) -> Result<(), GameError> {
        let language = self.language.unwrap_or(Language::English);
        writeln!(self.writer, "\n{}", render_board(round, language)?)?;
        Ok(())
    }

    fn set_language(&mut self, language: Language) {
        self.language = Some(language);
    }
}
