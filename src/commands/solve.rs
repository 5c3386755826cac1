//! Pattern solving command
//!
//! Lists vocabulary words consistent with a solver pattern and a set of
//! excluded letters.

use crate::config::GameConfig;
use crate::core::LetterSet;
use crate::solver::{CandidateFilter, SolverError};
use crate::wordlists::Vocabulary;
use log::debug;

/// Result of a solver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub pattern: String,
    pub excluded: LetterSet,
    /// Matching words in vocabulary order, at most the display limit
    pub candidates: Vec<String>,
    /// True when more words matched than are listed
    pub truncated: bool,
}

/// Find the candidates for a pattern
///
/// # Errors
///
/// Returns a `SolverError` if the pattern or exclusions are malformed, the
/// pattern length is out of bounds, or the two contradict each other.
///
/// # Examples
/// ```
/// use wordle_game::commands::solve_pattern;
/// use wordle_game::config::GameConfig;
/// use wordle_game::wordlists::Vocabulary;
///
/// let vocabulary = Vocabulary::from_strs(&["pilot", "plane", "plumb"]);
/// let result = solve_pattern("Pl***", "ACE", &GameConfig::default(), &vocabulary).unwrap();
/// assert_eq!(result.candidates, vec!["PILOT"]);
/// ```
pub fn solve_pattern(
    pattern: &str,
    excluded: &str,
    config: &GameConfig,
    vocabulary: &Vocabulary,
) -> Result<SolveResult, SolverError> {
    let filter = CandidateFilter::new(pattern, excluded, config)?;
    let words = vocabulary.filter_by_length(filter.length());

    // One extra match tells us whether the list was cut short
    let limit = config.max_displayed_candidates;
    let mut candidates: Vec<String> = filter
        .collect_parallel(&words, limit.saturating_add(1))
        .into_iter()
        .map(|word| word.text().to_string())
        .collect();
    let truncated = candidates.len() > limit;
    candidates.truncate(limit);

    debug!(
        "{} candidates for {pattern} among {} words",
        candidates.len(),
        words.len()
    );

    Ok(SolveResult {
        pattern: pattern.to_string(),
        excluded: excluded.bytes().collect(),
        candidates,
        truncated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_strs(&[
            "pilot", "plane", "plumb", "polka", "poult", "place", "pilots", "plot",
        ])
    }

    #[test]
    fn pilot_from_place_feedback() {
        let result =
            solve_pattern("Pl***", "ACE", &GameConfig::default(), &vocabulary()).unwrap();

        assert_eq!(result.candidates, vec!["PILOT", "POULT"]);
        assert!(!result.truncated);
        assert_eq!(result.excluded.to_string(), "A,C,E");
    }

    #[test]
    fn display_limit_truncates() {
        let config = GameConfig {
            max_displayed_candidates: 2,
            ..GameConfig::default()
        };
        let result = solve_pattern("P****", "", &config, &vocabulary()).unwrap();

        assert_eq!(result.candidates, vec!["PILOT", "PLANE"]);
        assert!(result.truncated);
    }

    #[test]
    fn exact_limit_is_not_truncated() {
        let config = GameConfig {
            max_displayed_candidates: 2,
            ..GameConfig::default()
        };
        let result = solve_pattern("Pl***", "ACE", &config, &vocabulary()).unwrap();
        assert_eq!(result.candidates.len(), 2);
        assert!(!result.truncated);
    }

    #[test]
    fn no_match_is_empty() {
        let result = solve_pattern("Z****", "", &GameConfig::default(), &vocabulary()).unwrap();
        assert!(result.candidates.is_empty());
    }

    #[test]
    fn invalid_input_is_an_error() {
        let config = GameConfig::default();
        assert!(matches!(
            solve_pattern("P****", "P", &config, &vocabulary()),
            Err(SolverError::ContradictoryConstraint(_))
        ));
        assert!(matches!(
            solve_pattern("P1***", "", &config, &vocabulary()),
            Err(SolverError::PatternFormat(_))
        ));
    }

    #[test]
    fn output_is_repeatable() {
        let config = GameConfig::default();
        let first = solve_pattern("*****", "Z", &config, &vocabulary()).unwrap();
        let second = solve_pattern("*****", "Z", &config, &vocabulary()).unwrap();
        assert_eq!(first, second);
    }
}
