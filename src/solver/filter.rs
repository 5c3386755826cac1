//! Candidate filtering
//!
//! Compiles a solver pattern and exclusion set into position checks, then
//! scans a vocabulary for words consistent with them.

use super::{Exclusions, SolverError, SolverPattern, Symbol};
use crate::config::GameConfig;
use crate::core::{LetterSet, Word};
use crate::wordlists::Vocabulary;
use log::{debug, trace};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Words checked per parallel batch before testing the result limit
const CHUNK_SIZE: usize = 1024;

/// Compiled solver constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFilter {
    length: usize,
    excluded: LetterSet,
    /// Confirmed letter per position
    confirmed: Vec<Option<u8>>,
    /// Positions each partial letter may still occupy
    available: FxHashMap<u8, FxHashSet<usize>>,
}

impl CandidateFilter {
    /// Parse and validate solver input, then compile it
    ///
    /// Checks run in order: exclusion letters, duplicate exclusions, pattern
    /// characters, pattern length within `config` bounds, and finally overlap
    /// between pattern letters and exclusions.
    ///
    /// # Errors
    ///
    /// Returns the first `SolverError` the input triggers.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::config::GameConfig;
    /// use wordle_game::solver::CandidateFilter;
    /// use wordle_game::wordlists::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::from_strs(&["pilot", "plane", "polka"]);
    /// let filter = CandidateFilter::new("Pl***", "ACE", &GameConfig::default()).unwrap();
    ///
    /// let found: Vec<&str> = filter.candidates(&vocabulary).map(|w| w.text()).collect();
    /// assert_eq!(found, vec!["PILOT"]);
    /// ```
    pub fn new(pattern: &str, excluded: &str, config: &GameConfig) -> Result<Self, SolverError> {
        let exclusions = Exclusions::parse(excluded)?;
        let pattern = SolverPattern::parse(pattern)?;

        if !config.allows_length(pattern.len()) {
            return Err(SolverError::PatternLength {
                length: pattern.len(),
                min: config.min_word_length,
                max: config.max_word_length,
            });
        }

        Self::compile(&pattern, exclusions)
    }

    /// Compile already-parsed input, rejecting contradictory constraints
    ///
    /// # Errors
    ///
    /// Returns `SolverError::ContradictoryConstraint` if a pattern letter is
    /// also excluded.
    pub fn compile(pattern: &SolverPattern, exclusions: Exclusions) -> Result<Self, SolverError> {
        let excluded = exclusions.letters();
        let overlap = pattern.letters().intersection(excluded);
        if !overlap.is_empty() {
            return Err(SolverError::ContradictoryConstraint(overlap));
        }

        let confirmed: Vec<Option<u8>> = pattern
            .symbols()
            .iter()
            .map(|symbol| match *symbol {
                Symbol::Confirmed(letter) => Some(letter),
                _ => None,
            })
            .collect();

        let open: FxHashSet<usize> = confirmed
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
            .collect();

        let mut available: FxHashMap<u8, FxHashSet<usize>> = FxHashMap::default();
        for (position, symbol) in pattern.symbols().iter().enumerate() {
            if let Symbol::Partial(letter) = *symbol {
                available
                    .entry(letter)
                    .or_insert_with(|| open.clone())
                    .remove(&position);
            }
        }

        debug!(
            "solver constraints: {} letters, {} confirmed, partial {}, excluded {}",
            confirmed.len(),
            confirmed.iter().flatten().count(),
            available.keys().copied().collect::<LetterSet>(),
            excluded
        );

        Ok(Self {
            length: confirmed.len(),
            excluded,
            confirmed,
            available,
        })
    }

    /// Required word length
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Check whether a word is consistent with the constraints
    ///
    /// 1. No excluded letter anywhere.
    /// 2. Every confirmed letter at its position.
    /// 3. Every partial letter present at an open position, and never at a
    ///    position where it is known not to be.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        if word.len() != self.length {
            return false;
        }
        let letters = word.letters();

        if let Some(&bad) = letters.iter().find(|&&l| self.excluded.contains(l)) {
            trace!("{word}: contains excluded {}", char::from(bad));
            return false;
        }

        for (position, (&letter, confirmed)) in letters.iter().zip(&self.confirmed).enumerate() {
            if let Some(expected) = *confirmed
                && letter != expected
            {
                trace!("{word}: position {position} is not {}", char::from(expected));
                return false;
            }
        }

        for (&partial, positions) in &self.available {
            let mut present = false;
            for (position, &letter) in letters.iter().enumerate() {
                // Confirmed positions already hold their own letter
                if letter != partial || self.confirmed[position].is_some() {
                    continue;
                }
                if !positions.contains(&position) {
                    trace!("{word}: {} excluded at {position}", char::from(partial));
                    return false;
                }
                present = true;
            }
            if !present {
                trace!("{word}: lacks {}", char::from(partial));
                return false;
            }
        }

        true
    }

    /// Lazily yield matching words in vocabulary order
    ///
    /// The iterator can be cloned, or this method called again, to restart.
    #[must_use]
    pub fn candidates<'f, 'v>(&'f self, vocabulary: &'v Vocabulary) -> Candidates<'f, 'v> {
        Candidates {
            filter: self,
            words: vocabulary.iter(),
        }
    }

    /// Collect up to `limit` matches, checking words in parallel batches
    ///
    /// Output keeps vocabulary order, and scanning stops at the first batch
    /// that reaches the limit.
    #[must_use]
    pub fn collect_parallel<'v>(&self, vocabulary: &'v Vocabulary, limit: usize) -> Vec<&'v Word> {
        let mut found: Vec<&'v Word> = Vec::new();

        for chunk in vocabulary.words().chunks(CHUNK_SIZE) {
            if found.len() >= limit {
                break;
            }
            let matched: Vec<&'v Word> = chunk.par_iter().filter(|w| self.matches(w)).collect();
            let room = limit - found.len();
            found.extend(matched.into_iter().take(room));
        }

        found
    }
}

/// Iterator over vocabulary words accepted by a `CandidateFilter`
#[derive(Debug, Clone)]
pub struct Candidates<'f, 'v> {
    filter: &'f CandidateFilter,
    words: std::slice::Iter<'v, Word>,
}

impl<'v> Iterator for Candidates<'_, 'v> {
    type Item = &'v Word;

    fn next(&mut self) -> Option<Self::Item> {
        let filter = self.filter;
        self.words.by_ref().find(|word| filter.matches(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    fn texts<'a>(words: impl IntoIterator<Item = &'a Word>) -> Vec<&'a str> {
        words.into_iter().map(Word::text).collect()
    }

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_strs(&[
            "pilot", "plane", "plumb", "polka", "poult", "pulse", "pluck", "spilt", "split",
            "piled", "aptly", "pilots",
        ])
    }

    #[test]
    fn pl_pattern_excluding_ace() {
        let vocabulary = vocabulary();
        let filter = CandidateFilter::new("Pl***", "ACE", &config()).unwrap();

        // PLUMB puts L back at position 1; PLANE, POLKA, PULSE, PLUCK and PILED
        // use excluded letters; SPILT and SPLIT lack the leading P
        assert_eq!(texts(filter.candidates(&vocabulary)), vec!["PILOT", "POULT"]);
    }

    #[test]
    fn pilot_is_retained_plane_rejected() {
        let filter = CandidateFilter::new("Pl***", "ACE", &config()).unwrap();
        assert!(filter.matches(&Word::new("pilot").unwrap()));
        assert!(!filter.matches(&Word::new("plane").unwrap()));
    }

    #[test]
    fn placeholder_only_pattern_matches_all_of_length() {
        let vocabulary = vocabulary();
        let filter = CandidateFilter::new("*****", "", &config()).unwrap();
        assert_eq!(filter.candidates(&vocabulary).count(), 11);
    }

    #[test]
    fn confirmed_letters_must_match() {
        let filter = CandidateFilter::new("**L**", "", &config()).unwrap();
        assert!(filter.matches(&Word::new("pilot").unwrap()));
        assert!(filter.matches(&Word::new("split").unwrap()));
        assert!(!filter.matches(&Word::new("plane").unwrap()));
    }

    #[test]
    fn partial_letter_must_be_present() {
        let filter = CandidateFilter::new("t****", "", &config()).unwrap();
        assert!(filter.matches(&Word::new("pilot").unwrap()));
        assert!(!filter.matches(&Word::new("plane").unwrap()));
        assert!(!filter.matches(&Word::new("table").unwrap()));
    }

    #[test]
    fn partial_letter_excluded_at_every_marked_position() {
        // L is known not to be at 0 or at 2
        let filter = CandidateFilter::new("l*l**", "", &config()).unwrap();
        assert!(!filter.matches(&Word::new("split").unwrap()));
        assert!(filter.matches(&Word::new("plane").unwrap()));
        assert!(!filter.matches(&Word::new("pilot").unwrap()));
    }

    #[test]
    fn partial_letter_cannot_take_a_confirmed_position() {
        // I is confirmed at 1; T is somewhere other than 4
        let filter = CandidateFilter::new("*I**t", "", &config()).unwrap();
        assert!(!filter.matches(&Word::new("pilot").unwrap()));
        assert!(filter.matches(&Word::new("bites").unwrap()));
    }

    #[test]
    fn partial_copy_of_confirmed_letter_needs_second_occurrence() {
        let filter = CandidateFilter::new("Pp***", "", &config()).unwrap();
        assert!(!filter.matches(&Word::new("pilot").unwrap()));
        assert!(filter.matches(&Word::new("puppy").unwrap()));
    }

    #[test]
    fn excluded_letters_reject_anywhere() {
        let filter = CandidateFilter::new("*****", "O", &config()).unwrap();
        assert!(!filter.matches(&Word::new("pilot").unwrap()));
        assert!(filter.matches(&Word::new("plane").unwrap()));
    }

    #[test]
    fn contradictory_input_rejected() {
        assert_eq!(
            CandidateFilter::new("P****", "P", &config()),
            Err(SolverError::ContradictoryConstraint(
                b"P".iter().copied().collect()
            ))
        );
        // Partial letters count too, in either case
        assert!(matches!(
            CandidateFilter::new("*l***", "l", &config()),
            Err(SolverError::ContradictoryConstraint(_))
        ));
    }

    #[test]
    fn length_bounds_enforced() {
        assert_eq!(
            CandidateFilter::new("***", "", &config()),
            Err(SolverError::PatternLength {
                length: 3,
                min: 4,
                max: 8
            })
        );
        assert!(CandidateFilter::new("*********", "", &config()).is_err());
        assert!(CandidateFilter::new("****", "", &config()).is_ok());
    }

    #[test]
    fn validation_order() {
        // Bad exclusion reported before bad pattern
        assert_eq!(
            CandidateFilter::new("P1", "A1", &config()),
            Err(SolverError::ExclusionFormat('1'))
        );
        // Duplicate exclusion reported before bad pattern
        assert_eq!(
            CandidateFilter::new("P1", "AA", &config()),
            Err(SolverError::DuplicateExclusion('A'))
        );
        // Bad pattern reported before length
        assert!(matches!(
            CandidateFilter::new("P1", "A", &config()),
            Err(SolverError::PatternFormat(_))
        ));
        // Length reported before contradiction
        assert!(matches!(
            CandidateFilter::new("PA", "A", &config()),
            Err(SolverError::PatternLength { .. })
        ));
    }

    #[test]
    fn candidates_are_restartable_and_idempotent() {
        let vocabulary = vocabulary();
        let filter = CandidateFilter::new("P****", "", &config()).unwrap();

        let iter = filter.candidates(&vocabulary);
        let first: Vec<&Word> = iter.clone().collect();
        let second: Vec<&Word> = iter.collect();
        let third: Vec<&Word> = filter.candidates(&vocabulary).collect();

        assert_eq!(first, second);
        assert_eq!(first, third);
        assert!(!first.is_empty());
    }

    #[test]
    fn parallel_collection_matches_sequential_order() {
        let vocabulary = Vocabulary::embedded().filter_by_length(5);
        let filter = CandidateFilter::new("*****", "", &config()).unwrap();

        let sequential: Vec<&Word> = filter.candidates(&vocabulary).take(1500).collect();
        let parallel = filter.collect_parallel(&vocabulary, 1500);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn parallel_collection_respects_limit() {
        let vocabulary = vocabulary();
        let filter = CandidateFilter::new("P****", "", &config()).unwrap();

        assert_eq!(filter.collect_parallel(&vocabulary, 2).len(), 2);
        assert!(filter.collect_parallel(&vocabulary, 0).is_empty());
        assert_eq!(
            texts(filter.collect_parallel(&vocabulary, 100)),
            texts(filter.candidates(&vocabulary))
        );
    }
}
