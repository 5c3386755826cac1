//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterFeedback, Word};
use crate::game::Cell;
use colored::{ColoredString, Colorize};

/// Color one letter tile according to its feedback
#[must_use]
pub fn letter_tile(letter: u8, feedback: LetterFeedback) -> ColoredString {
    let tile = format!(" {} ", char::from(letter));
    match feedback {
        LetterFeedback::Exact => tile.black().on_green().bold(),
        LetterFeedback::Misplaced => tile.black().on_yellow().bold(),
        LetterFeedback::Absent => tile.white().on_bright_black(),
    }
}

/// A guess rendered as colored tiles
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.letters())
        .map(|(&letter, &result)| letter_tile(letter, result).to_string())
        .collect()
}

/// Plain-text view of the target, in solver pattern notation
///
/// Known letters are uppercase, misplaced letters lowercase and hidden
/// positions `_`, so the output can be fed straight to the solver.
#[must_use]
pub fn view_pattern(view: &[Cell]) -> String {
    view.iter()
        .map(|cell| match *cell {
            Cell::Hidden => '_',
            Cell::Exact(letter) | Cell::Revealed(letter) => char::from(letter),
            Cell::Misplaced(letter) => char::from(letter.to_ascii_lowercase()),
        })
        .collect()
}

/// The view with colors matching the guess tiles
#[must_use]
pub fn colored_view(view: &[Cell]) -> String {
    view.iter()
        .map(|cell| match *cell {
            Cell::Hidden => " _ ".bright_black().to_string(),
            Cell::Exact(letter) => letter_tile(letter, LetterFeedback::Exact).to_string(),
            Cell::Misplaced(letter) => letter_tile(letter, LetterFeedback::Misplaced).to_string(),
            Cell::Revealed(letter) => format!(" {} ", char::from(letter))
                .black()
                .on_cyan()
                .bold()
                .to_string(),
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a win rate percentage as a bar
#[must_use]
pub fn win_rate_bar(win_rate: f64, width: usize) -> String {
    create_progress_bar(win_rate, 100.0, width)
}
