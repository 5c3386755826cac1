//! Guess validation
//!
//! Decides whether a guess may be submitted, given what is already known.
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. letters only
//! 2. target length
//! 3. no eliminated letter
//! 4. known word
//! 5. discovered positions kept
//! 6. every partial letter used

use crate::core::{Knowledge, LetterSet, Word};
use crate::wordlists::Vocabulary;
use thiserror::Error;

/// Why a guess was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("input must contain only letters")]
    NotLetters,
    #[error("input must contain exactly {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("you have already eliminated {letters}")]
    EliminatedLetter { letters: LetterSet },
    #[error("{word} is not a recognised word")]
    UnknownWord { word: String },
    #[error("position {} must be {expected}", .position + 1)]
    DiscoveredMismatch { position: usize, expected: char },
    #[error("you have to use the letters {missing}")]
    PartialMissing { missing: LetterSet },
    #[error("the game is already over")]
    GameOver,
}

/// Decides whether a guess is legal for the current knowledge
///
/// Validation never mutates the knowledge state.
pub trait GuessValidator {
    /// # Errors
    ///
    /// Returns the first `GuessError` in check order that the guess violates.
    fn validate(&self, guess: &str, knowledge: &Knowledge) -> Result<(), GuessError>;
}

/// Production validator backed by a vocabulary
#[derive(Debug, Clone, Copy)]
pub struct RulesValidator<'v> {
    target_length: usize,
    vocabulary: &'v Vocabulary,
}

impl<'v> RulesValidator<'v> {
    #[must_use]
    pub const fn new(target_length: usize, vocabulary: &'v Vocabulary) -> Self {
        Self {
            target_length,
            vocabulary,
        }
    }
}

impl GuessValidator for RulesValidator<'_> {
    fn validate(&self, guess: &str, knowledge: &Knowledge) -> Result<(), GuessError> {
        let word = Word::new(guess).map_err(|_| GuessError::NotLetters)?;

        if word.len() != self.target_length {
            return Err(GuessError::WrongLength {
                expected: self.target_length,
                actual: word.len(),
            });
        }

        check_eliminated(&word, knowledge)?;

        if !self.vocabulary.contains(word.text()) {
            return Err(GuessError::UnknownWord {
                word: word.text().to_string(),
            });
        }

        check_discovered(&word, knowledge)?;
        check_partial(&word, knowledge)
    }
}

fn check_eliminated(word: &Word, knowledge: &Knowledge) -> Result<(), GuessError> {
    let reused = word.letter_set().intersection(knowledge.eliminated());
    if reused.is_empty() {
        Ok(())
    } else {
        Err(GuessError::EliminatedLetter { letters: reused })
    }
}

fn check_discovered(word: &Word, knowledge: &Knowledge) -> Result<(), GuessError> {
    // Lowest position first so the reported mismatch is stable
    for (position, expected) in knowledge.discovered_sorted() {
        if word.letters().get(position) != Some(&expected) {
            return Err(GuessError::DiscoveredMismatch {
                position,
                expected: char::from(expected),
            });
        }
    }
    Ok(())
}

fn check_partial(word: &Word, knowledge: &Knowledge) -> Result<(), GuessError> {
    let missing = knowledge.partial().difference(word.letter_set());
    if missing.is_empty() {
        Ok(())
    } else {
        Err(GuessError::PartialMissing { missing })
    }
}

/// Test double that accepts every guess
#[cfg(test)]
pub(crate) struct AcceptAll;

#[cfg(test)]
impl GuessValidator for AcceptAll {
    fn validate(&self, _guess: &str, _knowledge: &Knowledge) -> Result<(), GuessError> {
        Ok(())
    }
}
