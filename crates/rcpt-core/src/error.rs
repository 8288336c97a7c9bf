//! Error types for the rcpt-core library.
//!
//! Receipt parsing itself is infallible; these cover the layers around it.

use thiserror::Error;

/// Main error type for the rcpt library.
#[derive(Error, Debug)]
pub enum RcptError {
    /// Transaction draft construction error.
    #[error("draft error: {0}")]
    Draft(#[from] DraftError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while turning a parsed receipt into a transaction draft.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// The user id has no leading decimal digits.
    #[error("invalid user id: {0:?}")]
    InvalidUserId(String),

    /// A monetary field could not be read as a number.
    #[error("invalid amount for {field}: {value:?}")]
    InvalidAmount { field: String, value: String },
}

/// Result type for the rcpt library.
pub type Result<T> = std::result::Result<T, RcptError>;
