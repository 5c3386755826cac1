//! Command implementations

pub mod simple;
pub mod solve;
pub mod stats;

pub use simple::{play_game, play_session, run_simple};
pub use solve::{SolveResult, solve_pattern};
pub use stats::run_stats;

use crate::config::GameConfig;
use crate::core::Word;
use crate::history::HistoryError;
use crate::solver::SolverError;
use crate::wordlists::Vocabulary;
use log::debug;
use rand::Rng;
use std::io;
use thiserror::Error;

/// Error type for command execution
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("word length {length} is outside {min} to {max}")]
    InvalidLength { length: usize, min: usize, max: usize },
    #[error("the vocabulary has no {0}-letter words")]
    NoWords(usize),
    #[error(transparent)]
    Solver(#[from] SolverError),
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Parse a typed word length and check it against the configured bounds
#[must_use]
pub fn parse_length(input: &str, config: &GameConfig) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&length| config.allows_length(length))
}

/// Check a word length given on the command line
///
/// # Errors
///
/// Returns `CommandError::InvalidLength` if `length` is out of bounds.
pub fn check_length(length: usize, config: &GameConfig) -> Result<usize, CommandError> {
    if config.allows_length(length) {
        Ok(length)
    } else {
        Err(CommandError::InvalidLength {
            length,
            min: config.min_word_length,
            max: config.max_word_length,
        })
    }
}

/// Pick a random target of the requested length
///
/// # Errors
///
/// Returns `CommandError::NoWords` if no word has that length.
pub fn choose_target<R: Rng + ?Sized>(
    vocabulary: &Vocabulary,
    length: usize,
    rng: &mut R,
) -> Result<Word, CommandError> {
    let words = vocabulary.filter_by_length(length);
    debug!("choosing target among {} words of length {length}", words.len());
    words
        .sample(rng)
        .cloned()
        .ok_or(CommandError::NoWords(length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_length_checks_bounds() {
        let config = GameConfig::default();
        assert_eq!(parse_length(" 5 ", &config), Some(5));
        assert_eq!(parse_length("3", &config), None);
        assert_eq!(parse_length("9", &config), None);
        assert_eq!(parse_length("five", &config), None);
    }

    #[test]
    fn check_length_reports_bounds() {
        let config = GameConfig::default();
        assert_eq!(check_length(8, &config).unwrap(), 8);
        assert!(matches!(
            check_length(12, &config),
            Err(CommandError::InvalidLength {
                length: 12,
                min: 4,
                max: 8
            })
        ));
    }

    #[test]
    fn choose_target_has_requested_length() {
        let vocabulary = Vocabulary::from_strs(&["plot", "pilot", "place", "pilots"]);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..5 {
            let target = choose_target(&vocabulary, 5, &mut rng).unwrap();
            assert_eq!(target.len(), 5);
        }
        assert!(matches!(
            choose_target(&vocabulary, 7, &mut rng),
            Err(CommandError::NoWords(7))
        ));
    }
}
