//! Error types for algoviz-algorithms.

use thiserror::Error;

/// Result type for dataset input.
pub type Result<T> = std::result::Result<T, InputError>;

/// Why user-supplied dataset text was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// No values at all.
    #[error("please enter at least one number")]
    Empty,

    /// More values than a visualizer can show.
    #[error("maximum {limit} elements allowed, got {count}")]
    TooMany { count: usize, limit: usize },

    /// A token that is not an integer.
    #[error("not a valid number: {0:?}")]
    NotANumber(String),

    /// An integer outside the accepted range.
    #[error("value {value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: u32, max: u32 },
}

/// A procedure name that the family does not implement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown procedure: {0}")]
pub struct UnknownProcedure(pub String);
