//! Error taxonomy for the engine.
//!
//! Errors are raised where a violation is detected and propagate to the
//! caller unchanged. Nothing in the engine retries.

use thiserror::Error;

use super::player::PlayerId;

/// Error type for turn, game and experiment operations.
#[derive(Error, Debug)]
pub enum HogError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("{player} strategy returned an invalid roll count: {value}")]
    InvalidStrategyOutput { player: PlayerId, value: i32 },
    #[error("input closed before a roll count was entered")]
    InputClosed,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl HogError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HogError>;
