//! Error types

use thiserror::Error;

use crate::states::{State, Transition};

/// Errors surfaced by the game core and its configuration
#[derive(Debug, Error)]
pub enum GameError {
    /// A state-machine guard was violated. This is a caller bug, not a
    /// player-facing condition, and the loop does not recover from it.
    #[error("Invalid transition: cannot {transition} from {from}")]
    InvalidTransition { from: State, transition: Transition },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings parse error: {0}")]
    SettingsParse(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type alias for game operations
pub type Result<T> = std::result::Result<T, GameError>;
