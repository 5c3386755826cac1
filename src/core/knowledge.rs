//! Accumulated knowledge about the target word
//!
//! Collects, across guesses, which letters are confirmed at which position,
//! which are known to be present elsewhere, and which are absent entirely.
//! Only the evaluator mutates it.

use super::LetterSet;
use rustc_hash::FxHashMap;

/// What a player has learned about the target so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Knowledge {
    discovered: FxHashMap<usize, u8>,
    partial: LetterSet,
    eliminated: LetterSet,
}

impl Knowledge {
    /// Create an empty knowledge state for a new game
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Confirmed letters keyed by position
    #[inline]
    #[must_use]
    pub fn discovered(&self) -> &FxHashMap<usize, u8> {
        &self.discovered
    }

    /// The confirmed letter at a position, if any
    #[inline]
    #[must_use]
    pub fn discovered_at(&self, position: usize) -> Option<u8> {
        self.discovered.get(&position).copied()
    }

    /// Confirmed letters ordered by position
    #[must_use]
    pub fn discovered_sorted(&self) -> Vec<(usize, u8)> {
        let mut entries: Vec<(usize, u8)> = self.discovered.iter().map(|(&p, &l)| (p, l)).collect();
        entries.sort_unstable();
        entries
    }

    /// Letters known to be in the target, position unknown
    #[inline]
    #[must_use]
    pub const fn partial(&self) -> LetterSet {
        self.partial
    }

    /// Letters known to be absent from the target
    #[inline]
    #[must_use]
    pub const fn eliminated(&self) -> LetterSet {
        self.eliminated
    }

    /// True before any guess has been evaluated
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.discovered.is_empty() && self.partial.is_empty() && self.eliminated.is_empty()
    }

    /// Record a confirmed letter; an existing entry is never replaced
    pub(crate) fn discover(&mut self, position: usize, letter: u8) {
        self.discovered.entry(position).or_insert(letter);
    }

    pub(crate) fn mark_partial(&mut self, letter: u8) {
        debug_assert!(!self.eliminated.contains(letter), "partial letter was eliminated");
        self.partial.insert(letter);
    }

    pub(crate) fn eliminate(&mut self, letter: u8) {
        debug_assert!(!self.partial.contains(letter), "eliminated letter was partial");
        self.eliminated.insert(letter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_knowledge_is_empty() {
        let knowledge = Knowledge::new();
        assert!(knowledge.is_empty());
        assert!(knowledge.discovered().is_empty());
        assert!(knowledge.partial().is_empty());
        assert!(knowledge.eliminated().is_empty());
    }

    #[test]
    fn discovered_entries_are_never_replaced() {
        let mut knowledge = Knowledge::new();
        knowledge.discover(0, b'P');
        knowledge.discover(0, b'X');

        assert_eq!(knowledge.discovered_at(0), Some(b'P'));
        assert_eq!(knowledge.discovered_at(1), None);
    }

    #[test]
    fn discovered_sorted_by_position() {
        let mut knowledge = Knowledge::new();
        knowledge.discover(3, b'O');
        knowledge.discover(0, b'P');

        assert_eq!(knowledge.discovered_sorted(), vec![(0, b'P'), (3, b'O')]);
        assert!(!knowledge.is_empty());
    }

    #[test]
    fn partial_and_eliminated_accumulate() {
        let mut knowledge = Knowledge::new();
        knowledge.mark_partial(b'L');
        knowledge.eliminate(b'A');
        knowledge.eliminate(b'C');

        assert_eq!(knowledge.partial().to_string(), "L");
        assert_eq!(knowledge.eliminated().to_string(), "A,C");
    }
}
