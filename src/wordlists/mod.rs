//! Word lists and the vocabulary
//!
//! Provides the embedded default list, file loading, and the `Vocabulary`
//! used for membership checks, target sampling and solver scans.

mod embedded;
pub mod loader;
mod vocabulary;

pub use embedded::{WORDS, WORDS_COUNT};
pub use vocabulary::Vocabulary;
