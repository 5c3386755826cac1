//! The vocabulary of valid words
//!
//! An ordered, de-duplicated word collection with case-insensitive lookup.
//! Iteration order is load order, so solver output is reproducible.

use super::{WORDS, loader::words_from_slice};
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Valid words for guessing and solving
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary, dropping repeated words but keeping first-seen order
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut vocabulary = Self::default();
        for word in words {
            if vocabulary.index.insert(word.text().to_string()) {
                vocabulary.words.push(word);
            }
        }
        vocabulary
    }

    /// Build a vocabulary from string slices, skipping invalid entries
    #[must_use]
    pub fn from_strs(words: &[&str]) -> Self {
        Self::new(words_from_slice(words))
    }

    /// The vocabulary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_strs(WORDS)
    }

    /// Case-insensitive membership check
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_ascii_uppercase())
    }

    /// A new vocabulary with only the words of exactly `length` letters
    #[must_use]
    pub fn filter_by_length(&self, length: usize) -> Self {
        Self::new(self.words.iter().filter(|w| w.len() == length).cloned())
    }

    /// Words in load order
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a random word, or `None` if the vocabulary is empty
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    /// Distinct word lengths present, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.words.iter().map(Word::len).collect();
        lengths.sort_unstable();
        lengths.dedup();
        lengths
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
