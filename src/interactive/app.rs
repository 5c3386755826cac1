//! TUI application state and logic

use crate::commands::{choose_target, parse_length};
use crate::config::GameConfig;
use crate::game::{Command, Game, GameStatus, RulesValidator};
use crate::history::{HistoryStore, Summary};
use crate::wordlists::Vocabulary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub config: &'a GameConfig,
    pub vocabulary: &'a Vocabulary,
    pub store: Option<&'a HistoryStore>,
    pub game: Option<Game<RulesValidator<'a>>>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub summary: Summary,
    pub show_debug: bool,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    LengthSelect,
    Guess,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app, starting a game right away when `length` is given
    #[must_use]
    pub fn new(
        config: &'a GameConfig,
        vocabulary: &'a Vocabulary,
        store: Option<&'a HistoryStore>,
        length: Option<usize>,
        rng: StdRng,
    ) -> Self {
        let summary = store
            .and_then(|store| store.summarize().ok())
            .unwrap_or_default();

        let mut app = Self {
            config,
            vocabulary,
            store,
            game: None,
            input_mode: InputMode::LengthSelect,
            input_buffer: String::new(),
            messages: Vec::new(),
            summary,
            show_debug: false,
            should_quit: false,
            rng,
        };

        app.add_message(
            &format!(
                "Welcome! Type {} for help, {} to reveal a letter.",
                Command::HELP,
                Command::HINT
            ),
            MessageStyle::Info,
        );
        match length {
            Some(length) if config.allows_length(length) => app.start_game(length),
            Some(length) => {
                app.add_message(
                    &format!("Word length {length} is not allowed"),
                    MessageStyle::Error,
                );
                app.prompt_length();
            }
            None => app.prompt_length(),
        }
        app
    }

    fn prompt_length(&mut self) {
        self.add_message(
            &format!(
                "Choose word length ({} to {})",
                self.config.min_word_length, self.config.max_word_length
            ),
            MessageStyle::Info,
        );
    }

    /// Pick a target and begin guessing
    pub fn start_game(&mut self, length: usize) {
        match choose_target(self.vocabulary, length, &mut self.rng) {
            Ok(target) => {
                self.game = Some(Game::new(
                    target,
                    RulesValidator::new(length, self.vocabulary),
                    self.config.guess_limit,
                ));
                self.input_mode = InputMode::Guess;
                self.add_message(
                    &format!(
                        "Guess the {length}-letter word in {} tries",
                        self.config.guess_limit
                    ),
                    MessageStyle::Info,
                );
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.input_mode = InputMode::LengthSelect;
            }
        }
    }

    /// Handle the typed line according to the current mode
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.input_mode {
            InputMode::LengthSelect => {
                if Command::parse(&input) == Some(Command::Quit) {
                    self.should_quit = true;
                } else if let Some(length) = parse_length(&input, self.config) {
                    self.start_game(length);
                } else {
                    self.add_message(
                        "Invalid word length. Please try again.",
                        MessageStyle::Error,
                    );
                }
            }
            InputMode::Guess => match Command::parse(&input) {
                Some(command) => self.run_command(command),
                None => self.submit_guess(&input),
            },
            InputMode::Finished => {}
        }
    }

    fn run_command(&mut self, command: Command) {
        match command {
            Command::Help => {
                self.add_message(
                    "Green: right place. Yellow: wrong place. Gray: not in word.",
                    MessageStyle::Info,
                );
                self.add_message(
                    "Guesses must be known words that keep the letters you found.",
                    MessageStyle::Info,
                );
            }
            Command::Quit => self.should_quit = true,
            Command::Debug => self.show_debug = !self.show_debug,
            Command::Hint => {
                let Some(game) = self.game.as_mut() else {
                    return;
                };
                let result = game.hint(&mut self.rng);
                match result {
                    Ok(hint) => self.add_message(
                        &format!(
                            "Letter {} is {}",
                            hint.position + 1,
                            char::from(hint.letter)
                        ),
                        MessageStyle::Success,
                    ),
                    Err(e) => self.add_message(&capitalize(&e.to_string()), MessageStyle::Error),
                }
                self.check_finished();
            }
        }
    }

    fn submit_guess(&mut self, input: &str) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        if let Err(e) = game.submit(input) {
            self.add_message(&capitalize(&e.to_string()), MessageStyle::Error);
            return;
        }
        self.check_finished();
    }

    fn check_finished(&mut self) {
        let Some(game) = self.game.as_ref() else {
            return;
        };
        let status = game.status();
        let Some(record) = game.record() else {
            return;
        };

        match status {
            GameStatus::Won => {
                let celebration = match record.guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟".to_string(),
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥".to_string(),
                    3 => "✨ SPLENDID! Three guesses! ✨".to_string(),
                    n => format!("🎉 SOLVED in {n} guesses! 🎉"),
                };
                self.add_message(&celebration, MessageStyle::Success);
            }
            _ => self.add_message(
                &format!("You are out of guesses! The word was: {}", record.word),
                MessageStyle::Error,
            ),
        }

        if let Some(store) = self.store {
            match store.append(&record).and_then(|()| store.summarize()) {
                Ok(summary) => self.summary = summary,
                Err(e) => {
                    warn!("could not update history: {e}");
                    self.add_message(&e.to_string(), MessageStyle::Error);
                }
            }
        }

        self.input_mode = InputMode::Finished;
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.game = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.show_debug = false;
        self.input_mode = InputMode::LengthSelect;
        self.prompt_length();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match (app.input_mode, key.code) {
                (_, KeyCode::Char('c')) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                (_, KeyCode::Esc) | (InputMode::Finished, KeyCode::Char('q')) => {
                    app.should_quit = true;
                }
                (InputMode::Finished, KeyCode::Char('n')) => app.new_game(),
                (InputMode::Finished, _) => {}
                (_, KeyCode::Char(c)) if c.is_ascii_alphanumeric() || c == ':' => {
                    app.input_buffer.push(c.to_ascii_uppercase());
                }
                (_, KeyCode::Backspace) => {
                    app.input_buffer.pop();
                }
                (_, KeyCode::Enter) => app.submit_input(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
