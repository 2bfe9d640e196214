//! Error types for the caesarcrypt library.
//!
//! The cipher itself is total. Every variant here belongs to the request
//! validation boundary and is reported to the caller as-is.

use thiserror::Error;

/// Errors produced while validating a cipher request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaesarError {
    /// Shift parameter could not be read as an integer.
    #[error("Invalid shift value. Must be a number between 1 and 25.")]
    InvalidShift(String),
    /// Shift parsed as an integer but lies outside [1, 25].
    #[error("Shift value must be between 1 and 25")]
    ShiftOutOfRange(i64),
    /// Input text is empty.
    #[error("No text provided")]
    EmptyInput,
}

impl CaesarError {
    /// Short machine-readable tag for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CaesarError::InvalidShift(_) => "parse_error",
            CaesarError::ShiftOutOfRange(_) => "range_error",
            CaesarError::EmptyInput => "empty_input",
        }
    }
}
