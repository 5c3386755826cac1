//! Interactive game rules
//!
//! Guess validation, the per-game session and the in-game commands shared by
//! the line-mode and TUI front ends.

mod session;
mod validator;

pub use session::{Cell, Game, GameStatus, Hint, HintError, Turn};
pub use validator::{GuessError, GuessValidator, RulesValidator};

#[cfg(test)]
pub(crate) use validator::AcceptAll;

/// Command typed in place of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Hint,
    Debug,
}

impl Command {
    pub const HELP: &str = ":HELP";
    pub const QUIT: &str = ":QUIT";
    pub const HINT: &str = ":HINT";
    pub const DEBUG: &str = ":DEBUG";

    /// Recognize a command, ignoring case and surrounding whitespace
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            Self::HELP => Some(Self::Help),
            Self::QUIT => Some(Self::Quit),
            Self::HINT => Some(Self::Hint),
            Self::DEBUG => Some(Self::Debug),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_case_insensitively() {
        assert_eq!(Command::parse(":help"), Some(Command::Help));
        assert_eq!(Command::parse(" :QUIT "), Some(Command::Quit));
        assert_eq!(Command::parse(":Hint"), Some(Command::Hint));
        assert_eq!(Command::parse(":debug"), Some(Command::Debug));
    }

    #[test]
    fn guesses_are_not_commands() {
        assert_eq!(Command::parse("pilot"), None);
        assert_eq!(Command::parse("HELP"), None);
        assert_eq!(Command::parse(""), None);
    }
}
