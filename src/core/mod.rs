//! Core domain types for the word game
//!
//! Words, per-letter feedback, the accumulated knowledge state and the
//! evaluator that ties them together. Nothing here performs I/O.

mod alphabet;
mod evaluator;
mod feedback;
mod knowledge;
mod word;

pub use alphabet::LetterSet;
pub use evaluator::evaluate;
pub use feedback::{Feedback, LetterFeedback};
pub use knowledge::Knowledge;
pub use word::{Word, WordError};
