//! Search and session settings

use std::str::FromStr;
use std::time::Duration;

use crate::{board::Player, error::ConfigError};

/// Search depth used when none is configured, in plies
pub const DEFAULT_DEPTH: usize = 10;

/// How long a rejected move stays visible to the player
pub const DEFAULT_ERROR_DISPLAY: Duration = Duration::from_secs(2);

/// Settings of the minimax search
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    depth: usize,
}

impl SearchConfig {
    /// Creates a config searching `depth` plies ahead, which must be at least 1
    pub fn with_depth(depth: usize) -> Result<Self, ConfigError> {
        let config = Self { depth };
        config.validate()?;
        Ok(config)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::InvalidDepth(self.depth));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

/// Who controls the pieces in a session
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Both players are human
    TwoPlayer,
    /// The given player is controlled by the search
    VersusBot { bot: Player },
}

impl Mode {
    pub fn bot(&self) -> Option<Player> {
        match self {
            Mode::TwoPlayer => None,
            Mode::VersusBot { bot } => Some(*bot),
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        // the bot answers the human, who opens
        Mode::VersusBot { bot: Player::Two }
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Mode::TwoPlayer),
            "one" | "1" => Ok(Mode::VersusBot { bot: Player::One }),
            "two" | "2" => Ok(Mode::VersusBot { bot: Player::Two }),
            _ => Err(ConfigError::UnknownPlayer(s.to_string())),
        }
    }
}

/// Settings of a game session
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub mode: Mode,
    pub search: SearchConfig,
    pub error_display: Duration,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search.validate()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            search: SearchConfig::default(),
            error_display: DEFAULT_ERROR_DISPLAY,
        }
    }
}
