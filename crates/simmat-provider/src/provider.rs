//! Embedding provider trait and types.
//!
//! Defines the interface through which the session obtains vector
//! embeddings for entry text.

use async_trait::async_trait;

use crate::error::ProviderError;

/// Vector embedding - a fixed-length float array produced by the model.
///
/// Immutable once produced. Values are stored exactly as returned by the
/// provider; cosine similarity divides by the norms itself, so there is no
/// normalization step here.
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    /// The embedding vector
    pub values: Vec<f64>,
}

impl Embedding {
    /// Create an embedding from raw model output.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Get the embedding dimension
    pub fn dimension(&self) -> usize {
        self.values.len()
    }
}

/// Information about the loaded model.
#[derive(Debug, Clone)]
pub struct ProviderInfo {
    /// Model name (e.g., "all-MiniLM-L6-v2")
    pub name: String,
    /// Embedding dimension
    pub dimension: usize,
}

/// Trait for embedding providers.
///
/// Implementations must be thread-safe (Send + Sync): multiple requests
/// may be in flight concurrently, one per entry. Calls may take tens of
/// seconds and may fail; no retry contract is assumed — retries are the
/// caller's decision.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get provider information
    fn info(&self) -> &ProviderInfo;

    /// Generate an embedding for a single text.
    async fn embed(&self, text: &str) -> Result<Embedding, ProviderError>;
}
