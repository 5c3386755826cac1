//! Terminal output formatting
//!
//! Colored rendering of guesses, the board, solver candidates and statistics.

pub mod display;
pub mod formatters;

pub use display::{
    write_board, write_debug, write_help, write_outcome, write_solve_result, write_summary,
    write_welcome,
};
