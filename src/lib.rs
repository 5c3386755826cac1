//! Wordle Game
//!
//! A terminal word-guessing game with a constraint-based solver.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Knowledge, Word, evaluate};
//!
//! let target = Word::new("pilot").unwrap();
//! let guess = Word::new("place").unwrap();
//!
//! let mut knowledge = Knowledge::new();
//! let feedback = evaluate(&target, &guess, &mut knowledge);
//!
//! assert_eq!(feedback.to_emoji(), "🟩🟨⬜⬜⬜");
//! assert_eq!(knowledge.eliminated().to_string(), "A,C,E");
//! ```

// Core domain types
pub mod core;

// Game limits
pub mod config;

// Guess validation and game sessions
pub mod game;

// Candidate search
pub mod solver;

// Word lists
pub mod wordlists;

// Finished game records
pub mod history;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
