//! Math error types.

use thiserror::Error;

/// Errors that can occur during vector math.
#[derive(Debug, Error)]
pub enum MathError {
    /// Vectors of different lengths were compared
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
