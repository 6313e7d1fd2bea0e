//! Full-screen terminal interface for Hangman.
//!
//! Same `GameInterface` as the line console, drawn with Ratatui:
//! - gallows panel and word/attempts panel at the top,
//! - a short log of the latest messages,
//! - an input line titled with the current prompt.
//!
//! The terminal runs in raw mode, so Ctrl-C arrives as a key event and is
//! reported as `GameError::Interrupted` instead of killing the process.

use crate::error::GameError;
use crate::game_state::{GameInterface, Notice, Prompt};
use crate::render::{BoardLabels, format_display_word, format_wrong_letters, gallows_stage};
use crate::round::Round;
use crate::wordbank::Language;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const MAX_MESSAGES: usize = 8;
const MIN_INPUT_CHARS: usize = 16;
const GALLOWS_PANEL_WIDTH: u16 = 18;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const WORD_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const HELP_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Result of feeding one key into the input line.
#[derive(Debug, PartialEq, Eq)]
enum LineEdit {
    Pending,
    Submit,
    Interrupt,
}

/// Room for any guess in the current round, and never less than
/// `MIN_INPUT_CHARS`.
fn input_limit(word_len: usize) -> usize {
    word_len.max(MIN_INPUT_CHARS)
}

fn edit_line(input: &mut String, key: KeyEvent, limit: usize) -> LineEdit {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => LineEdit::Interrupt,
        KeyCode::Esc => LineEdit::Interrupt,
        KeyCode::Enter => LineEdit::Submit,
        KeyCode::Backspace => {
            input.pop();
            LineEdit::Pending
        }
        KeyCode::Char(c)
            if !ctrl
                && !key.modifiers.contains(KeyModifiers::ALT)
                && !c.is_control()
                && c != '\u{FFFD}'
                && input.chars().count() < limit =>
        {
            input.push(c);
            LineEdit::Pending
        }
        _ => LineEdit::Pending,
    }
}

fn attempts_style(attempts_left: u8) -> Style {
    let color = match attempts_left {
        0..=1 => Color::Red,
        2..=4 => Color::Yellow,
        _ => Color::Green,
    };
    Style::new().fg(color).add_modifier(Modifier::BOLD)
}

fn is_error_notice(notice: &Notice) -> bool {
    match notice {
        Notice::GuessRejected(_)
        | Notice::InvalidAnswer
        | Notice::InvalidLanguageChoice
        | Notice::Lost { .. } => true,
        Notice::Outcome(outcome) => !outcome.is_hit(),
        _ => false,
    }
}

/// What the board panels show; copied out of the round on every update.
#[derive(Debug)]
struct Board {
    labels: BoardLabels,
    stage: &'static str,
    word: String,
    attempts_left: u8,
    wrong_letters: String,
}

impl Board {
    fn from_round(round: &Round, language: Language) -> Result<Self, GameError> {
        Ok(Self {
            labels: BoardLabels::for_language(language),
            stage: gallows_stage(round.attempts_left())?,
            word: format_display_word(round),
            attempts_left: round.attempts_left(),
            wrong_letters: format_wrong_letters(round),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Message {
    text: String,
    is_error: bool,
}

struct RenderContext<'a> {
    board: Option<&'a Board>,
    messages: &'a [Message],
    input: &'a str,
    prompt: Option<Prompt>,
    language: Option<Language>,
}

pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    board: Option<Board>,
    messages: Vec<Message>,
    input: String,
    input_limit: usize,
    prompt: Option<Prompt>,
    language: Option<Language>,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            board: None,
            messages: Vec::new(),
            input: String::new(),
            input_limit: MIN_INPUT_CHARS,
            prompt: None,
            language: None,
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn push_message(&mut self, notice: &Notice) {
        let is_error = is_error_notice(notice);
        let text = notice.text(self.language);
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            self.messages.push(Message {
                text: line.to_string(),
                is_error,
            });
        }
        let overflow = self.messages.len().saturating_sub(MAX_MESSAGES);
        self.messages.drain(..overflow);
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            board: self.board.as_ref(),
            messages: &self.messages,
            input: &self.input,
            prompt: self.prompt,
            language: self.language,
        };
        self.terminal.draw(|f| Self::render_static(f, &ctx))?;
        Ok(())
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                       // Title
                Constraint::Length(9),                       // Gallows + word
                Constraint::Min(MAX_MESSAGES as u16 + 2),    // Messages
                Constraint::Length(3),                       // Input
                Constraint::Length(1),                       // Key help
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx.board);
        Self::render_messages(f, chunks[2], ctx.messages);
        Self::render_input(f, chunks[3], ctx.input, ctx.prompt, ctx.language);
        Self::render_help(f, chunks[4]);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, board: Option<&Board>) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GALLOWS_PANEL_WIDTH), Constraint::Min(20)])
            .split(area);

        let Some(board) = board else {
            let waiting = Paragraph::new("Выберите язык / Choose a language")
                .block(Block::default().borders(Borders::ALL).title("Round"));
            f.render_widget(waiting, area);
            return;
        };

        let gallows = Paragraph::new(board.stage)
            .block(Block::default().borders(Borders::ALL).title("Gallows"));
        f.render_widget(gallows, columns[0]);

        let mut lines = vec![
            Line::from(vec![Span::raw(format!("{}: ", board.labels.word)), Span::styled(board.word.clone(), WORD_STYLE)]),
            Line::from(""),
            Line::from(vec![
                Span::raw(format!("{}: ", board.labels.attempts)),
                Span::styled(
                    board.attempts_left.to_string(),
                    attempts_style(board.attempts_left),
                ),
            ]),
        ];
        if !board.wrong_letters.is_empty() {
            lines.push(Line::from(vec![
                Span::raw(format!("{}: ", board.labels.wrong_letters)),
                Span::styled(board.wrong_letters.clone(), ERROR_STYLE),
            ]));
        }
        let info = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Round"))
            .wrap(Wrap { trim: false });
        f.render_widget(info, columns[1]);
    }

    fn render_messages(f: &mut Frame, area: Rect, messages: &[Message]) {
        let lines: Vec<Line> = messages
            .iter()
            .map(|m| {
                let style = if m.is_error { ERROR_STYLE } else { MESSAGE_STYLE };
                Line::from(Span::styled(m.text.clone(), style))
            })
            .collect();
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Messages"))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn render_input(
        f: &mut Frame,
        area: Rect,
        input: &str,
        prompt: Option<Prompt>,
        language: Option<Language>,
    ) {
        let title = prompt.map_or("", |p| p.text(language));
        let paragraph = Paragraph::new(format!("> {input}_"))
            .style(WORD_STYLE)
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(paragraph, area);
    }

    fn render_help(f: &mut Frame, area: Rect) {
        let help = Paragraph::new("ENTER: submit | BACKSPACE: delete | ESC / Ctrl-C: quit")
            .style(HELP_STYLE);
        f.render_widget(help, area);
    }
}

impl GameInterface for TuiInterface {
    fn read_line(&mut self, prompt: Prompt) -> Result<String, GameError> {
        self.prompt = Some(prompt);
        self.input.clear();
        loop {
            self.draw()?;
            let Event::Key(key) = event::read()? else {
                // Resize and focus events only need a redraw
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match edit_line(&mut self.input, key, self.input_limit) {
                LineEdit::Pending => {}
                LineEdit::Submit => {
                    debug_log!("read_line({:?}) - submitted {:?}", prompt, self.input);
                    self.prompt = None;
                    return Ok(std::mem::take(&mut self.input));
                }
                LineEdit::Interrupt => {
                    info_log!("read_line({:?}) - interrupted", prompt);
                    return Err(GameError::Interrupted);
                }
            }
        }
    }

    fn display_notice(&mut self, notice: &Notice) -> Result<(), GameError> {
        if matches!(notice, Notice::RoundStarted { .. }) {
            self.messages.clear();
        }
        self.push_message(notice);
        self.draw()?;
        Ok(())
    }

    fn display_round(&mut self, round: &Round) -> Result<(), GameError> {
        let language = self.language.unwrap_or(Language::English);
        self.board = Some(Board::from_round(round, language)?);
        self.input_limit = input_limit(round.word_len());
        self.draw()?;
        Ok(())
    }

    fn set_language(&mut self, language: Language) {
        self.language = Some(language);
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
