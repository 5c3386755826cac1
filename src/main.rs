//! Wordle - CLI
//!
//! Terminal word-guessing game with TUI and line modes, plus a solver that
//! lists words matching what you have found so far.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{check_length, run_simple, run_stats, solve_pattern},
    config::{
        DEFAULT_GUESS_LIMIT, DEFAULT_MAX_DISPLAYED_CANDIDATES, DEFAULT_MAX_WORD_LENGTH,
        DEFAULT_MIN_WORD_LENGTH, GameConfig,
    },
    history::HistoryStore,
    interactive::{App, run_tui},
    output::write_solve_result,
    wordlists::{Vocabulary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden word, or ask the solver for candidates",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_GUESS_LIMIT)]
    guesses: usize,

    /// Shortest word length allowed
    #[arg(long, global = true, default_value_t = DEFAULT_MIN_WORD_LENGTH)]
    min_length: usize,

    /// Longest word length allowed
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_WORD_LENGTH)]
    max_length: usize,

    /// Most solver candidates to list
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DISPLAYED_CANDIDATES)]
    max_candidates: usize,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(long, global = true, default_value = "embedded")]
    wordlist: String,

    /// History file (default: ~/.cache/wordle/history.txt)
    #[arg(long, global = true)]
    history: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play {
        /// Word length; asked for when omitted
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Simple line-based game without the TUI
    Simple {
        /// Word length; asked for when omitted
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// List words matching a pattern
    ///
    /// Uppercase letters are confirmed in place, lowercase letters are in the
    /// word but not at that position, and '*' is unknown. After guessing PLACE
    /// for PILOT: wordle solve -w "Pl***" -e ACE
    Solve {
        /// Pattern of confirmed, partial and unknown letters, e.g. "Pl***"
        #[arg(short, long)]
        word: String,

        /// Eliminated letters, any order, no separators
        #[arg(short, long, default_value = "")]
        eliminated: String,
    },

    /// Show game statistics
    Stats {
        /// Delete the recorded history
        #[arg(long)]
        reset: bool,
    },
}

impl Cli {
    fn config(&self) -> Result<GameConfig> {
        let config = GameConfig {
            guess_limit: self.guesses,
            min_word_length: self.min_length,
            max_word_length: self.max_length,
            max_displayed_candidates: self.max_candidates,
        };
        Ok(config.validate()?)
    }

    fn history_store(&self) -> Option<HistoryStore> {
        self.history
            .clone()
            .or_else(HistoryStore::default_path)
            .map(HistoryStore::new)
    }
}

/// Load the vocabulary based on the --wordlist flag
fn load_vocabulary(source: &str) -> Result<Vocabulary> {
    let vocabulary = match source {
        "embedded" => Vocabulary::embedded(),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list {path}"))?;
            Vocabulary::new(words)
        }
    };

    if vocabulary.is_empty() {
        anyhow::bail!("word list {source} has no usable words");
    }
    debug!("vocabulary from {source}: {} words", vocabulary.len());
    Ok(vocabulary)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.config()?;
    let vocabulary = load_vocabulary(&cli.wordlist)?;
    let store = cli.history_store();

    match &cli.command {
        None => run_play_command(&config, &vocabulary, store.as_ref(), None),
        Some(Commands::Play { length }) => {
            run_play_command(&config, &vocabulary, store.as_ref(), *length)
        }
        Some(Commands::Simple { length }) => {
            run_simple(&config, &vocabulary, store.as_ref(), *length)?;
            Ok(())
        }
        Some(Commands::Solve { word, eliminated }) => {
            let result = solve_pattern(word, eliminated, &config, &vocabulary)?;
            write_solve_result(&mut io::stdout().lock(), &result)?;
            Ok(())
        }
        Some(Commands::Stats { reset }) => {
            let store = store.context("no history file: set --history or HOME")?;
            run_stats(&mut io::stdout().lock(), &store, *reset)?;
            Ok(())
        }
    }
}

fn run_play_command(
    config: &GameConfig,
    vocabulary: &Vocabulary,
    store: Option<&HistoryStore>,
    length: Option<usize>,
) -> Result<()> {
    if let Some(length) = length {
        check_length(length, config)?;
    }

    let app = App::new(config, vocabulary, store, length, StdRng::from_os_rng());
    run_tui(app)
}
