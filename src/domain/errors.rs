//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly 10 decimal digits.
    #[error("invalid phone number: {0:?} (expected exactly 10 digits)")]
    InvalidPhone(String),
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
