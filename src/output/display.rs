//! Display functions for games and command results

use super::formatters::{colored_guess, colored_view, view_pattern, win_rate_bar};
use crate::commands::SolveResult;
use crate::config::GameConfig;
use crate::game::{Command, Game, GameStatus};
use crate::history::Summary;
use colored::Colorize;
use std::io::{self, Write};

/// Print the welcome banner
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_welcome<W: Write>(out: &mut W, config: &GameConfig) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {}", "W O R D L E".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        "\nGuess the hidden word in {} tries.",
        config.guess_limit.to_string().bright_yellow().bold()
    )?;
    writeln!(
        out,
        "Type {} for instructions, {} to leave, {} to reveal a letter.\n",
        Command::HELP.bright_cyan(),
        Command::QUIT.bright_cyan(),
        Command::HINT.bright_cyan()
    )
}

/// Print the rules and commands
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_help<W: Write>(out: &mut W, config: &GameConfig) -> io::Result<()> {
    writeln!(out, "\n{}", "How to play".bright_cyan().bold())?;
    writeln!(
        out,
        "  Pick a word length between {} and {}, then guess the word in {} tries.",
        config.min_word_length, config.max_word_length, config.guess_limit
    )?;
    writeln!(out, "  {} right letter, right place", " A ".black().on_green())?;
    writeln!(out, "  {} right letter, wrong place", " A ".black().on_yellow())?;
    writeln!(out, "  {} letter not in the word", " A ".white().on_bright_black())?;
    writeln!(
        out,
        "  Every guess must be a known word that keeps the letters you have found."
    )?;
    writeln!(
        out,
        "  {} reveals one letter, once per game, and costs a guess.",
        Command::HINT
    )?;
    writeln!(out, "  {} ends the game without saving it.\n", Command::QUIT)
}

/// Print the guesses so far and the revealed view
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_board<W: Write, V>(out: &mut W, game: &Game<V>) -> io::Result<()> {
    writeln!(out)?;
    for (i, (word, feedback)) in game.history().iter().enumerate() {
        writeln!(
            out,
            "  {}. {} {}",
            (i + 1).to_string().bright_black(),
            colored_guess(word, feedback),
            feedback
        )?;
    }

    writeln!(out, "\n     {}", colored_view(game.view()))?;

    let eliminated = game.knowledge().eliminated();
    if !eliminated.is_empty() {
        writeln!(out, "  Eliminated letters: {}", eliminated.to_string().red())?;
    }
    writeln!(
        out,
        "  {} of {} guesses left",
        game.remaining_guesses(),
        game.guess_limit()
    )
}

/// Print the full game state, target included
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_debug<W: Write, V>(out: &mut W, game: &Game<V>) -> io::Result<()> {
    let knowledge = game.knowledge();
    let discovered: Vec<String> = knowledge
        .discovered_sorted()
        .into_iter()
        .map(|(position, letter)| format!("{}={}", position + 1, char::from(letter)))
        .collect();

    writeln!(out, "{}", "─".repeat(40).bright_black())?;
    writeln!(out, "Word:       {}", game.target())?;
    writeln!(out, "View:       {}", view_pattern(game.view()))?;
    writeln!(out, "Discovered: {}", discovered.join(","))?;
    writeln!(out, "Partial:    {}", knowledge.partial())?;
    writeln!(out, "Eliminated: {}", knowledge.eliminated())?;
    writeln!(out, "Guesses:    {}/{}", game.guesses(), game.guess_limit())?;
    writeln!(out, "Hint used:  {}", game.hint_used())?;
    writeln!(out, "{}", "─".repeat(40).bright_black())
}

/// Print the outcome of a finished game
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_outcome<W: Write, V>(out: &mut W, game: &Game<V>) -> io::Result<()> {
    match game.status() {
        GameStatus::Won => {
            let guesses = game.guesses();
            writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
            writeln!(
                out,
                "  {} Solved in {} {}!",
                "🎉".bright_green(),
                guesses.to_string().bright_cyan().bold(),
                if guesses == 1 { "guess" } else { "guesses" }
            )?;
            writeln!(out, "{}", "═".repeat(60).bright_cyan())
        }
        GameStatus::Lost => writeln!(
            out,
            "\n{} The word was: {}",
            "You are out of guesses!".red().bold(),
            game.target().text().bright_yellow().bold()
        ),
        GameStatus::InProgress => Ok(()),
    }
}

/// Print a history summary with a win rate bar
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out, "\n📊 {}", "Statistics:".bright_cyan().bold())?;
    writeln!(out, "   {summary}")?;
    if summary.games > 0 {
        writeln!(
            out,
            "   Win rate: [{}] {}",
            win_rate_bar(summary.win_rate, 30).green(),
            format!("{:.1}%", summary.win_rate).bright_yellow()
        )?;
    }
    Ok(())
}

/// Print solver candidates
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_solve_result<W: Write>(out: &mut W, result: &SolveResult) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Pattern: {}  Excluded: {}",
        result.pattern.bright_yellow().bold(),
        if result.excluded.is_empty() {
            "-".to_string()
        } else {
            result.excluded.to_string()
        }
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    if result.candidates.is_empty() {
        return writeln!(out, "{}", "No candidates match.".red().bold());
    }

    writeln!(out, "\nCandidates:")?;
    for candidate in &result.candidates {
        writeln!(out, "  • {candidate}")?;
    }
    if result.truncated {
        writeln!(
            out,
            "  {}",
            format!("(showing the first {})", result.candidates.len()).bright_black()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::AcceptAll;

    fn render(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn board_lists_guesses_and_remaining() {
        let mut game = Game::new(Word::new("pilot").unwrap(), AcceptAll, 6);
        game.submit("place").unwrap();

        let text = render(|out| write_board(out, &game));
        assert!(text.contains("🟩🟨⬜⬜⬜"));
        assert!(text.contains("Eliminated letters: A,C,E"));
        assert!(text.contains("5 of 6 guesses left"));
    }

    #[test]
    fn debug_shows_target_and_view() {
        let mut game = Game::new(Word::new("pilot").unwrap(), AcceptAll, 6);
        game.submit("place").unwrap();

        let text = render(|out| write_debug(out, &game));
        assert!(text.contains("Word:       PILOT"));
        assert!(text.contains("View:       Pl___"));
        assert!(text.contains("Discovered: 1=P"));
    }

    #[test]
    fn lost_game_reveals_target() {
        let mut game = Game::new(Word::new("pilot").unwrap(), AcceptAll, 1);
        game.submit("place").unwrap();

        let text = render(|out| write_outcome(out, &game));
        assert!(text.contains("The word was: PILOT"));
    }

    #[test]
    fn empty_summary_has_no_bar() {
        let text = render(|out| write_summary(out, &Summary::default()));
        assert!(text.contains("0 games with 0.00% win rate"));
        assert!(!text.contains("Win rate:"));
    }
}
