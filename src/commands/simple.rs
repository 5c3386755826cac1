//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: choose a length, then type guesses or
//! commands until the game ends.

use super::{CommandError, check_length, choose_target, parse_length};
use crate::config::GameConfig;
use crate::game::{Command, Game, GuessValidator, RulesValidator};
use crate::history::{GameRecord, HistoryStore};
use crate::output::{
    write_board, write_debug, write_help, write_outcome, write_summary, write_welcome,
};
use crate::wordlists::Vocabulary;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin and stdout
///
/// # Errors
///
/// Returns an error if the length is invalid, no word has that length, the
/// terminal cannot be read or written, or the history file cannot be updated.
pub fn run_simple(
    config: &GameConfig,
    vocabulary: &Vocabulary,
    history: Option<&HistoryStore>,
    length: Option<usize>,
) -> Result<(), CommandError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut rand::rng(),
        config,
        vocabulary,
        history,
        length,
    )?;
    Ok(())
}

/// Choose a length and a target, then play one game
///
/// Returns the finished game's record, or `None` if the player quit.
///
/// # Errors
///
/// See [`run_simple`].
pub fn play_session<R: BufRead, W: Write, G: Rng + ?Sized>(
    input: &mut R,
    out: &mut W,
    rng: &mut G,
    config: &GameConfig,
    vocabulary: &Vocabulary,
    history: Option<&HistoryStore>,
    length: Option<usize>,
) -> Result<Option<GameRecord>, CommandError> {
    write_welcome(out, config)?;

    let length = match length {
        Some(length) => check_length(length, config)?,
        None => match ask_length(input, out, config)? {
            Some(length) => length,
            None => {
                writeln!(out, "Bye!")?;
                return Ok(None);
            }
        },
    };

    let target = choose_target(vocabulary, length, rng)?;
    let mut game = Game::new(
        target,
        RulesValidator::new(length, vocabulary),
        config.guess_limit,
    );
    play_game(&mut game, input, out, rng, config, history)
}

fn ask_length<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &GameConfig,
) -> Result<Option<usize>, CommandError> {
    let question = format!(
        "Choose word length (between {} and {} inclusive): ",
        config.min_word_length, config.max_word_length
    );
    loop {
        let Some(line) = prompt(input, out, &question)? else {
            return Ok(None);
        };
        if Command::parse(&line) == Some(Command::Quit) {
            return Ok(None);
        }
        match parse_length(&line, config) {
            Some(length) => return Ok(Some(length)),
            None => writeln!(out, "{}", "Invalid word length. Please try again.".red())?,
        }
    }
}

/// Play an already started game to the end
///
/// A finished game is appended to `history` and the updated summary shown.
/// Quitting, or reaching end of input, abandons the game without a record.
///
/// # Errors
///
/// See [`run_simple`].
pub fn play_game<V: GuessValidator, R: BufRead, W: Write, G: Rng + ?Sized>(
    game: &mut Game<V>,
    input: &mut R,
    out: &mut W,
    rng: &mut G,
    config: &GameConfig,
    history: Option<&HistoryStore>,
) -> Result<Option<GameRecord>, CommandError> {
    write_board(out, game)?;

    while !game.is_finished() {
        let question = format!("\nGuess {}/{}: ", game.guesses() + 1, game.guess_limit());
        let Some(line) = prompt(input, out, &question)? else {
            writeln!(out, "\nBye!")?;
            return Ok(None);
        };

        match Command::parse(&line) {
            Some(Command::Help) => write_help(out, config)?,
            Some(Command::Quit) => {
                writeln!(out, "The word was {}. Bye!", game.target())?;
                return Ok(None);
            }
            Some(Command::Hint) => match game.hint(rng) {
                Ok(hint) => {
                    writeln!(
                        out,
                        "{} Letter {} is {}",
                        "💡".bright_yellow(),
                        hint.position + 1,
                        char::from(hint.letter).to_string().bright_cyan().bold()
                    )?;
                    write_board(out, game)?;
                }
                Err(e) => writeln!(out, "{} {e}", "✗".red())?,
            },
            Some(Command::Debug) => write_debug(out, game)?,
            None => match game.submit(&line) {
                Ok(_) => write_board(out, game)?,
                Err(e) => writeln!(out, "{} Invalid guess: {e}", "✗".red())?,
            },
        }
    }

    write_outcome(out, game)?;

    let record = game.record();
    if let (Some(store), Some(record)) = (history, &record) {
        store.append(record)?;
        write_summary(out, &store.summarize()?)?;
    }
    writeln!(out, "\nBye!")?;

    Ok(record)
}

/// Show a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> io::Result<Option<String>> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
