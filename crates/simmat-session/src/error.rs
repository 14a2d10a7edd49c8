//! Session error types.

use thiserror::Error;

/// Errors that can occur during session operations.
///
/// None of these are fatal to the session — each failure is scoped to a
/// single entry or a single requested computation.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Entry position doesn't exist
    #[error("Entry position out of range: {position} (have {len} entries)")]
    IndexOutOfRange { position: usize, len: usize },

    /// Matrix computation requested while its guard is false
    #[error("Matrix preconditions not met: {0}")]
    PreconditionViolated(String),

    /// Vector math error (mismatched embedding dimensions)
    #[error("Math error: {0}")]
    Math(#[from] simmat_math::MathError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
