//! Provider error types.

use thiserror::Error;

/// Errors that can occur during an embedding request.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Inference failed inside the model
    #[error("Inference error: {0}")]
    Inference(String),

    /// Input the model cannot process
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Model produced a vector of an unexpected length
    #[error("Wrong dimension: expected {expected}, got {actual}")]
    WrongDimension { expected: usize, actual: usize },
}
