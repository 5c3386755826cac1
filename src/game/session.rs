//! A single game session
//!
//! Owns the target word, the knowledge state, the revealed view and the
//! guess counter for exactly one game. Nothing is shared between sessions.

use super::validator::{GuessError, GuessValidator};
use crate::core::{Feedback, Knowledge, LetterFeedback, Word, evaluate};
use crate::history::GameRecord;
use log::debug;
use rand::Rng;
use rand::prelude::IndexedRandom;
use thiserror::Error;

/// Progress of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// What the player can see at one position of the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Hidden,
    /// Confirmed by a guess
    Exact(u8),
    /// Latest guessed letter here is in the word, but elsewhere
    Misplaced(u8),
    /// Uncovered by a hint
    Revealed(u8),
}

impl Cell {
    /// True when the letter at this position is not yet known
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Hidden | Self::Misplaced(_))
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub feedback: Feedback,
    pub status: GameStatus,
}

/// A letter uncovered by a hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub position: usize,
    pub letter: u8,
}

/// Why a hint was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HintError {
    #[error("you have already used a hint")]
    AlreadyUsed,
    #[error("there is only one letter left to guess")]
    OneLetterLeft,
    #[error("the game is already over")]
    GameOver,
}

/// One game against a fixed target
#[derive(Debug, Clone)]
pub struct Game<V> {
    target: Word,
    validator: V,
    knowledge: Knowledge,
    view: Vec<Cell>,
    history: Vec<(Word, Feedback)>,
    guesses: usize,
    guess_limit: usize,
    hint_used: bool,
    status: GameStatus,
}

impl<V: GuessValidator> Game<V> {
    /// Start a game with an injected validator
    #[must_use]
    pub fn new(target: Word, validator: V, guess_limit: usize) -> Self {
        debug!("new game: {} letters, {guess_limit} guesses", target.len());
        let view = vec![Cell::Hidden; target.len()];
        Self {
            target,
            validator,
            knowledge: Knowledge::new(),
            view,
            history: Vec::new(),
            guesses: 0,
            guess_limit,
            hint_used: false,
            status: GameStatus::InProgress,
        }
    }

    /// Validate and play a guess
    ///
    /// A rejected guess leaves the whole session untouched.
    ///
    /// # Errors
    ///
    /// Returns the validator's `GuessError`, or `GuessError::GameOver` once the
    /// game has finished.
    pub fn submit(&mut self, input: &str) -> Result<Turn, GuessError> {
        if self.is_finished() {
            return Err(GuessError::GameOver);
        }

        let input = input.trim().to_ascii_uppercase();
        if let Err(e) = self.validator.validate(&input, &self.knowledge) {
            debug!("rejected guess: {e}");
            return Err(e);
        }
        let guess = Word::new(input).map_err(|_| GuessError::NotLetters)?;

        let feedback = evaluate(&self.target, &guess, &mut self.knowledge);
        self.update_view(&guess, &feedback);
        self.guesses += 1;

        self.status = if feedback.is_win() {
            GameStatus::Won
        } else if self.guesses >= self.guess_limit {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        debug!(
            "guess {}/{}: {} {}",
            self.guesses, self.guess_limit, guess, feedback
        );
        self.history.push((guess, feedback.clone()));

        Ok(Turn {
            feedback,
            status: self.status,
        })
    }

    fn update_view(&mut self, guess: &Word, feedback: &Feedback) {
        for ((cell, &letter), &result) in self
            .view
            .iter_mut()
            .zip(guess.letters())
            .zip(feedback.letters())
        {
            match result {
                LetterFeedback::Exact => *cell = Cell::Exact(letter),
                LetterFeedback::Misplaced if cell.is_unknown() => *cell = Cell::Misplaced(letter),
                _ => {}
            }
        }
    }

    /// Reveal the letter at one random hidden position of the target
    ///
    /// Allowed once per game, costs one guess, and is refused when at most
    /// one hidden position remains.
    ///
    /// # Errors
    ///
    /// Returns a `HintError` explaining why no letter was revealed.
    pub fn hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Hint, HintError> {
        if self.is_finished() {
            return Err(HintError::GameOver);
        }
        if self.hint_used {
            return Err(HintError::AlreadyUsed);
        }

        let hidden: Vec<usize> = self
            .view
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Hidden)
            .map(|(i, _)| i)
            .collect();
        if hidden.len() <= 1 {
            return Err(HintError::OneLetterLeft);
        }
        let Some(&position) = hidden.choose(rng) else {
            return Err(HintError::OneLetterLeft);
        };

        let letter = self.target.letter_at(position);
        self.view[position] = Cell::Revealed(letter);
        self.hint_used = true;
        self.guesses += 1;
        if self.guesses >= self.guess_limit {
            self.status = GameStatus::Lost;
        }

        debug!("hint revealed position {position}");
        Ok(Hint { position, letter })
    }
}

impl<V> Game<V> {
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    #[must_use]
    pub fn view(&self) -> &[Cell] {
        &self.view
    }

    /// Accepted guesses with their feedback, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// Guesses used so far, hints included
    #[must_use]
    pub const fn guesses(&self) -> usize {
        self.guesses
    }

    #[must_use]
    pub const fn guess_limit(&self) -> usize {
        self.guess_limit
    }

    #[must_use]
    pub const fn remaining_guesses(&self) -> usize {
        self.guess_limit.saturating_sub(self.guesses)
    }

    #[must_use]
    pub const fn hint_used(&self) -> bool {
        self.hint_used
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        !matches!(self.status, GameStatus::InProgress)
    }

    /// The record to persist, once the game has finished
    #[must_use]
    pub fn record(&self) -> Option<GameRecord> {
        self.is_finished().then(|| GameRecord {
            word: self.target.text().to_string(),
            won: self.status == GameStatus::Won,
            guesses: self.guesses,
        })
    }
}
