//! Error types for evaluation and config storage

use thiserror::Error;

/// Why an expression could not be evaluated.
///
/// Only the equals command ever produces one of these; every other
/// command silently ignores input it cannot accept.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Too few tokens, an even token count, or numerals and operators
    /// out of alternation.
    #[error("invalid expression")]
    InvalidExpression,
    #[error("division by zero")]
    DivisionByZero,
    /// A run of digits and points that is not a number, e.g. `1.2.3`.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    /// The result overflowed to infinity or became NaN.
    #[error("result is not a finite number")]
    NonFinite,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
