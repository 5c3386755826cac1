//! Game history and statistics
//!
//! Finished games are appended to a plain text file, one
//! `WORD,won,guesses` record per line, and summarized as win rate and
//! average guess count.

use log::{debug, warn};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Outcome of one finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub word: String,
    pub won: bool,
    pub guesses: usize,
}

/// Error type for history file access
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("cannot access history file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Aggregate statistics over a set of records
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub games: usize,
    pub wins: usize,
    /// Percentage of games won, 0-100
    pub win_rate: f64,
    pub average_guesses: f64,
}

/// Append-only store of game records
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.word, self.won, self.guesses)
    }
}

impl FromStr for GameRecord {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.trim().split(',');
        let (Some(word), Some(won), Some(guesses), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(format!("expected 3 fields in {s:?}"));
        };

        let won = won
            .trim()
            .parse::<bool>()
            .map_err(|e| format!("invalid victory flag {won:?}: {e}"))?;
        let guesses = guesses
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid guess count {guesses:?}: {e}"))?;

        Ok(Self {
            word: word.trim().to_string(),
            won,
            guesses,
        })
    }
}

impl Summary {
    /// Summarize records; an empty history gives all zeros
    #[must_use]
    pub fn from_records(records: &[GameRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let games = records.len();
        let wins = records.iter().filter(|r| r.won).count();
        let total_guesses: usize = records.iter().map(|r| r.guesses).sum();

        Self {
            games,
            wins,
            win_rate: 100.0 * wins as f64 / games as f64,
            average_guesses: total_guesses as f64 / games as f64,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games with {:.2}% win rate and {:.2} average guesses",
            self.games, self.win_rate, self.average_guesses
        )
    }
}

impl HistoryStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.cache/wordle/history.txt`, if a home directory is known
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(|home| Path::new(&home).join(".cache").join("wordle").join("history.txt"))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Append one record, creating the file and its directories if needed
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Io` if the file cannot be created or written.
    pub fn append(&self, record: &GameRecord) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        writeln!(file, "{record}").map_err(|e| self.io_error(e))?;

        debug!("appended record to {}", self.path.display());
        Ok(())
    }

    /// Read all records; a missing file is an empty history
    ///
    /// Malformed lines are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Io` if the file exists but cannot be read.
    pub fn read(&self) -> Result<Vec<GameRecord>, HistoryError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        let records = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(number, line)| match line.parse::<GameRecord>() {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("skipping history line {}: {e}", number + 1);
                    None
                }
            })
            .collect();

        Ok(records)
    }

    /// Read and summarize the whole history
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Io` if the file exists but cannot be read.
    pub fn summarize(&self) -> Result<Summary, HistoryError> {
        Ok(Summary::from_records(&self.read()?))
    }

    /// Delete the history file; clearing a missing file is not an error
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Io` if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), HistoryError> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(self.io_error(e)),
            _ => Ok(()),
        }
    }
}
