//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors raised when turning user-facing names into core values.
///
/// Loading vocabulary never fails; malformed lines are dropped instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown mode: {0}")]
    UnknownMode(String),

    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("invalid swipe coordinates: {0}")]
    InvalidSwipe(String),
}
