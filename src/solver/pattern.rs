//! Solver input parsing
//!
//! A solver pattern has one symbol per position:
//! - uppercase letter: confirmed at this position
//! - lowercase letter: in the word, but not at this position
//! - `*` (or `_`, `.`): unknown
//!
//! It is paired with a set of excluded letters known to be absent.

use super::SolverError;
use crate::core::LetterSet;
use std::fmt;
use std::str::FromStr;

/// One position of a solver pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Letter confirmed at this position (stored uppercase)
    Confirmed(u8),
    /// Letter present elsewhere (stored uppercase)
    Partial(u8),
    Unknown,
}

impl Symbol {
    fn parse(c: char) -> Option<Self> {
        match c {
            '*' | '_' | '.' => Some(Self::Unknown),
            c if c.is_ascii_uppercase() => Some(Self::Confirmed(c as u8)),
            c if c.is_ascii_lowercase() => Some(Self::Partial(c.to_ascii_uppercase() as u8)),
            _ => None,
        }
    }

    const fn to_char(self) -> char {
        match self {
            Self::Confirmed(letter) => letter as char,
            Self::Partial(letter) => letter.to_ascii_lowercase() as char,
            Self::Unknown => '*',
        }
    }
}

/// Positional template of confirmed, partial and unknown letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverPattern {
    symbols: Vec<Symbol>,
}

impl SolverPattern {
    /// Parse a pattern such as `"Pl***"`
    ///
    /// # Errors
    ///
    /// Returns `SolverError::PatternFormat` if the pattern is empty or has a
    /// character other than an ASCII letter or placeholder.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::solver::{SolverPattern, Symbol};
    ///
    /// let pattern = SolverPattern::parse("Pl***").unwrap();
    /// assert_eq!(pattern.symbols()[0], Symbol::Confirmed(b'P'));
    /// assert_eq!(pattern.symbols()[1], Symbol::Partial(b'L'));
    /// assert_eq!(pattern.len(), 5);
    /// ```
    pub fn parse(input: &str) -> Result<Self, SolverError> {
        if input.is_empty() {
            return Err(SolverError::PatternFormat(input.to_string()));
        }
        let symbols = input
            .chars()
            .map(Symbol::parse)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| SolverError::PatternFormat(input.to_string()))?;
        Ok(Self { symbols })
    }

    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Every letter mentioned, confirmed or partial
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.symbols
            .iter()
            .filter_map(|symbol| match *symbol {
                Symbol::Confirmed(letter) | Symbol::Partial(letter) => Some(letter),
                Symbol::Unknown => None,
            })
            .collect()
    }
}

impl FromStr for SolverPattern {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SolverPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|s| write!(f, "{}", s.to_char()))
    }
}

/// Letters known to be absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exclusions(LetterSet);

impl Exclusions {
    /// Parse excluded letters in any order, either case, no separators
    ///
    /// An empty string means nothing is excluded.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::ExclusionFormat` for a non-letter and
    /// `SolverError::DuplicateExclusion` for a letter given twice.
    pub fn parse(input: &str) -> Result<Self, SolverError> {
        if let Some(bad) = input.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(SolverError::ExclusionFormat(bad));
        }

        let mut letters = LetterSet::new();
        for letter in input.bytes() {
            if !letters.insert(letter) {
                return Err(SolverError::DuplicateExclusion(char::from(
                    letter.to_ascii_uppercase(),
                )));
            }
        }
        Ok(Self(letters))
    }

    #[must_use]
    pub const fn letters(self) -> LetterSet {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mixed_pattern() {
        let pattern = SolverPattern::parse("Pl*_.").unwrap();
        assert_eq!(
            pattern.symbols(),
            &[
                Symbol::Confirmed(b'P'),
                Symbol::Partial(b'L'),
                Symbol::Unknown,
                Symbol::Unknown,
                Symbol::Unknown
            ]
        );
        assert_eq!(pattern.to_string(), "Pl***");
        assert_eq!(pattern.letters().to_string(), "L,P");
    }

    #[test]
    fn parse_rejects_bad_characters() {
        assert_eq!(
            SolverPattern::parse("P1***"),
            Err(SolverError::PatternFormat("P1***".to_string()))
        );
        assert!(SolverPattern::parse("P ***").is_err());
        assert!(SolverPattern::parse("").is_err());
    }

    #[test]
    fn exclusions_parse_any_case() {
        let exclusions = Exclusions::parse("aCe").unwrap();
        assert_eq!(exclusions.letters().to_string(), "A,C,E");
        assert!(Exclusions::parse("").unwrap().letters().is_empty());
    }

    #[test]
    fn exclusions_reject_non_letters() {
        assert_eq!(Exclusions::parse("A,C"), Err(SolverError::ExclusionFormat(',')));
        assert_eq!(Exclusions::parse("A*"), Err(SolverError::ExclusionFormat('*')));
    }

    #[test]
    fn exclusions_reject_duplicates() {
        assert_eq!(Exclusions::parse("ACA"), Err(SolverError::DuplicateExclusion('A')));
        assert_eq!(Exclusions::parse("aA"), Err(SolverError::DuplicateExclusion('A')));
    }
}
