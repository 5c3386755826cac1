//! Per-letter feedback for a guess
//!
//! Each guessed letter is classified as:
//! - Exact: the letter is in the target at this position
//! - Misplaced: the letter is in the target at another position
//! - Absent: the target has no (further) copy of this letter

use super::Word;
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    Exact,
    Misplaced,
    Absent,
}

impl LetterFeedback {
    /// Emoji square for the classification
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, one entry per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterFeedback>);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Duplicate letters are counted: a guessed letter is only Misplaced while
    /// the target still has an unmatched copy of it.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark misplaced letters left to right from the remaining pool
    ///
    /// Guess and target are expected to have equal length; extra positions of
    /// the longer word are ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterFeedback, Word};
    ///
    /// let target = Word::new("pilot").unwrap();
    /// let guess = Word::new("place").unwrap();
    /// let feedback = Feedback::calculate(&target, &guess);
    ///
    /// assert_eq!(feedback.letters()[0], LetterFeedback::Exact);
    /// assert_eq!(feedback.letters()[1], LetterFeedback::Misplaced);
    /// assert_eq!(feedback.to_emoji(), "🟩🟨⬜⬜⬜");
    /// ```
    #[must_use]
    pub fn calculate(target: &Word, guess: &Word) -> Self {
        let mut result = vec![LetterFeedback::Absent; guess.len().min(target.len())];
        let mut available = [0u8; 26];

        // First pass: exact matches, and count the unmatched target letters
        for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
            if g == t {
                result[i] = LetterFeedback::Exact;
            } else {
                available[usize::from(t - b'A')] += 1;
            }
        }

        // Second pass: misplaced letters consume the remaining pool
        for (i, &g) in guess.letters().iter().enumerate().take(result.len()) {
            if result[i] == LetterFeedback::Exact {
                continue;
            }
            let count = &mut available[usize::from(g - b'A')];
            if *count > 0 {
                result[i] = LetterFeedback::Misplaced;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// The per-position classifications
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[LetterFeedback] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is an exact match
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&f| f == LetterFeedback::Exact)
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜⬜⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterFeedback::{Absent, Exact, Misplaced};

    fn feedback(target: &str, guess: &str) -> Feedback {
        Feedback::calculate(&Word::new(target).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn identical_words_are_all_exact() {
        let result = feedback("pilot", "pilot");
        assert!(result.is_win());
        assert_eq!(result.letters(), &[Exact; 5]);
    }

    #[test]
    fn pilot_against_place() {
        let result = feedback("pilot", "place");
        assert_eq!(result.letters(), &[Exact, Misplaced, Absent, Absent, Absent]);
        assert!(!result.is_win());
    }

    #[test]
    fn all_absent() {
        let result = feedback("pilot", "crane");
        assert_eq!(result.letters(), &[Absent; 5]);
    }

    #[test]
    fn surplus_duplicate_is_absent() {
        // One O in ROBOT is exact at position 3; the other O in the guess has no copy left
        let result = feedback("robot", "floor");
        // F(absent) L(absent) O(misplaced: ROBOT's O at 1) O(exact) R(misplaced)
        assert_eq!(result.letters(), &[Absent, Absent, Misplaced, Exact, Misplaced]);

        // PILOT has a single P, already matched at position 0
        let result = feedback("pilot", "poppy");
        assert_eq!(result.letters(), &[Exact, Misplaced, Absent, Absent, Absent]);
    }

    #[test]
    fn exact_match_takes_priority_over_earlier_misplaced() {
        // SPEED vs ABIDE: the only E of ABIDE sits at position 4
        let result = feedback("abide", "speed");
        assert_eq!(result.letters(), &[Absent, Absent, Misplaced, Absent, Misplaced]);

        // The exact E at position 4 must win over the earlier E
        let result = feedback("abide", "geese");
        assert_eq!(result.letters(), &[Absent, Absent, Absent, Absent, Exact]);
    }

    #[test]
    fn feedback_is_deterministic() {
        assert_eq!(feedback("pilot", "plant"), feedback("pilot", "plant"));
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(feedback("pilot", "place").to_emoji(), "🟩🟨⬜⬜⬜");
        assert_eq!(format!("{}", feedback("pilot", "pilot")), "🟩🟩🟩🟩🟩");
    }
}
