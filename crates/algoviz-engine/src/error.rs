//! Error types for algoviz-engine.

use thiserror::Error;

/// Result type for algoviz-engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring the engine.
#[derive(Debug, Error)]
pub enum Error {
    /// An environment variable held a value that could not be used.
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidConfig {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}
