//! Constraint-based word finder
//!
//! Given a pattern of confirmed and partial letters plus a set of excluded
//! letters, lists every vocabulary word still consistent with them.

mod filter;
mod pattern;

pub use filter::{CandidateFilter, Candidates};
pub use pattern::{Exclusions, SolverPattern, Symbol};

use crate::core::LetterSet;
use thiserror::Error;

/// Error type for rejected solver input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("excluded letters must be letters only, found '{0}'")]
    ExclusionFormat(char),
    #[error("letter {0} is excluded more than once")]
    DuplicateExclusion(char),
    #[error("invalid pattern '{0}': use letters and '*' only")]
    PatternFormat(String),
    #[error("pattern has {length} letters, expected {min} to {max}")]
    PatternLength { length: usize, min: usize, max: usize },
    #[error("letters {0} are both in the pattern and excluded")]
    ContradictoryConstraint(LetterSet),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            SolverError::DuplicateExclusion('A').to_string(),
            "letter A is excluded more than once"
        );
        assert_eq!(
            SolverError::PatternLength {
                length: 3,
                min: 4,
                max: 8
            }
            .to_string(),
            "pattern has 3 letters, expected 4 to 8"
        );
        let letters: LetterSet = b"PL".iter().copied().collect();
        assert_eq!(
            SolverError::ContradictoryConstraint(letters).to_string(),
            "letters L,P are both in the pattern and excluded"
        );
    }
}
