//! Game configuration
//!
//! A handful of integer limits, loaded once (from CLI flags) and then passed
//! by reference to everything that needs them.

use thiserror::Error;

/// Default number of guesses per game
pub const DEFAULT_GUESS_LIMIT: usize = 6;
/// Default shortest playable word
pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;
/// Default longest playable word
pub const DEFAULT_MAX_WORD_LENGTH: usize = 8;
/// Default number of solver candidates shown
pub const DEFAULT_MAX_DISPLAYED_CANDIDATES: usize = 20;

/// Limits shared by the game and the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub guess_limit: usize,
    pub min_word_length: usize,
    pub max_word_length: usize,
    pub max_displayed_candidates: usize,
}

/// Error type for inconsistent configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("guess limit must be at least 1")]
    ZeroGuessLimit,
    #[error("candidate display limit must be at least 1")]
    ZeroDisplayLimit,
    #[error("minimum word length must be at least 1")]
    ZeroMinLength,
    #[error("minimum word length {min} exceeds maximum {max}")]
    InvertedLengths { min: usize, max: usize },
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            guess_limit: DEFAULT_GUESS_LIMIT,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            max_displayed_candidates: DEFAULT_MAX_DISPLAYED_CANDIDATES,
        }
    }
}

impl GameConfig {
    /// Check that the limits are usable
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first inconsistent value.
    pub const fn validate(self) -> Result<Self, ConfigError> {
        if self.guess_limit == 0 {
            return Err(ConfigError::ZeroGuessLimit);
        }
        if self.max_displayed_candidates == 0 {
            return Err(ConfigError::ZeroDisplayLimit);
        }
        if self.min_word_length == 0 {
            return Err(ConfigError::ZeroMinLength);
        }
        if self.min_word_length > self.max_word_length {
            return Err(ConfigError::InvertedLengths {
                min: self.min_word_length,
                max: self.max_word_length,
            });
        }
        Ok(self)
    }

    /// Check whether a word length is within the inclusive bounds
    #[must_use]
    pub const fn allows_length(&self, length: usize) -> bool {
        length >= self.min_word_length && length <= self.max_word_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(config));
        assert_eq!(config.guess_limit, 6);
    }

    #[test]
    fn rejects_zero_limits() {
        let config = GameConfig {
            guess_limit: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroGuessLimit));

        let config = GameConfig {
            max_displayed_candidates: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDisplayLimit));

        let config = GameConfig {
            min_word_length: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroMinLength));
    }

    #[test]
    fn rejects_inverted_lengths() {
        let config = GameConfig {
            min_word_length: 7,
            max_word_length: 5,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedLengths { min: 7, max: 5 })
        );
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let config = GameConfig::default();
        assert!(!config.allows_length(3));
        assert!(config.allows_length(4));
        assert!(config.allows_length(8));
        assert!(!config.allows_length(9));
    }
}
