//! Word representation
//!
//! A `Word` is a non-empty run of ASCII letters, normalized to uppercase.
//! Length is not fixed here: games and solver runs pick their own length.

use super::LetterSet;
use std::fmt;
use thiserror::Error;

/// An uppercase ASCII word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word must contain only the letters A-Z, found {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other
    /// than the ASCII letters A-Z (either case).
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("pilot").unwrap();
    /// assert_eq!(word.text(), "PILOT");
    ///
    /// assert!(Word::new("pi1ot").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let mut text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        text.make_ascii_uppercase();
        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false`: empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    /// The distinct letters of the word
    #[must_use]
    pub fn letter_set(&self) -> LetterSet {
        self.letters().iter().copied().collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_normalizes_to_uppercase() {
        let word = Word::new("PiLoT").unwrap();
        assert_eq!(word.text(), "PILOT");
        assert_eq!(word.letters(), b"PILOT");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("ox").unwrap().len(), 2);
        assert_eq!(Word::new("absolute").unwrap().len(), 8);
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("word!"), Err(WordError::InvalidCharacter('!')));
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacter('3')));
        assert_eq!(Word::new("two words"), Err(WordError::InvalidCharacter(' ')));
        assert_eq!(Word::new("café"), Err(WordError::InvalidCharacter('é')));
        assert_eq!(Word::new("pl***"), Err(WordError::InvalidCharacter('*')));
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("pilot").unwrap();
        assert_eq!(word.letter_at(0), b'P');
        assert_eq!(word.letter_at(4), b'T');
    }

    #[test]
    fn word_letter_set() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.letter_set().to_string(), "D,E,P,S");
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "crane".parse().unwrap();
        assert_eq!(format!("{word}"), "CRANE");
        assert_eq!(word, Word::new("CRANE").unwrap());
    }
}
