//! Guess evaluation
//!
//! Classifies a guess against the target and folds the result into the
//! player's `Knowledge`.

use super::{Feedback, Knowledge, LetterFeedback, Word};
use log::trace;

/// Evaluate `guess` against `target`, updating `knowledge` in place
///
/// - Exact letters are recorded as discovered at their position.
/// - Misplaced letters are added to the partial set.
/// - Absent letters are eliminated, unless the target contains the letter at
///   all. A surplus copy of a letter (e.g. the second P of POPPY against
///   PILOT) is reported Absent but never eliminated, so eliminated letters
///   stay disjoint from discovered and partial ones.
///
/// Guess and target must have equal length; the validator guarantees this.
///
/// # Examples
/// ```
/// use wordle_game::core::{Knowledge, Word, evaluate};
///
/// let target = Word::new("pilot").unwrap();
/// let mut knowledge = Knowledge::new();
///
/// let feedback = evaluate(&target, &Word::new("place").unwrap(), &mut knowledge);
/// assert!(!feedback.is_win());
/// assert_eq!(knowledge.discovered_at(0), Some(b'P'));
/// assert_eq!(knowledge.partial().to_string(), "L");
/// assert_eq!(knowledge.eliminated().to_string(), "A,C,E");
/// ```
pub fn evaluate(target: &Word, guess: &Word, knowledge: &mut Knowledge) -> Feedback {
    debug_assert_eq!(target.len(), guess.len(), "guess length must match target");

    let feedback = Feedback::calculate(target, guess);
    let target_letters = target.letter_set();

    for (position, (&letter, &result)) in guess.letters().iter().zip(feedback.letters()).enumerate() {
        match result {
            LetterFeedback::Exact => knowledge.discover(position, letter),
            LetterFeedback::Misplaced => knowledge.mark_partial(letter),
            LetterFeedback::Absent if !target_letters.contains(letter) => {
                knowledge.eliminate(letter);
            }
            LetterFeedback::Absent => {
                trace!("surplus copy of {} at {position} not eliminated", char::from(letter));
            }
        }
    }

    feedback
}
