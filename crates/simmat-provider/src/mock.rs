//! Mock embedding provider for testing.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::ProviderError;
use crate::provider::{Embedding, EmbeddingProvider, ProviderInfo};

/// Mock provider that generates deterministic embeddings.
///
/// Useful for testing without loading a real model. Texts registered via
/// `with_response` return their canned vector; anything else gets a
/// deterministic byte-fold vector of the configured dimension. Failure
/// injection and an artificial delay are available to exercise the
/// pending and failure paths of the session state machine.
pub struct MockProvider {
    info: ProviderInfo,
    responses: HashMap<String, Vec<f64>>,
    fail_on: HashSet<String>,
    delay: Option<Duration>,
}

impl MockProvider {
    /// Create a mock provider producing vectors of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            info: ProviderInfo {
                name: "mock".to_string(),
                dimension,
            },
            responses: HashMap::new(),
            fail_on: HashSet::new(),
            delay: None,
        }
    }

    /// Register a canned response for an exact text.
    pub fn with_response(mut self, text: impl Into<String>, values: Vec<f64>) -> Self {
        self.responses.insert(text.into(), values);
        self
    }

    /// Make requests for an exact text fail with an inference error.
    pub fn with_failure(mut self, text: impl Into<String>) -> Self {
        self.fail_on.insert(text.into());
        self
    }

    /// Delay every request, to hold entries in the pending state.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Deterministic fallback vector for unregistered text.
    fn fold_bytes(&self, text: &str) -> Vec<f64> {
        let mut values = vec![0.0; self.info.dimension];
        if self.info.dimension == 0 {
            return values;
        }
        for (i, b) in text.bytes().enumerate() {
            values[i % self.info.dimension] += f64::from(b) / 255.0;
        }
        values
    }
}

#[async_trait]
impl EmbeddingProvider for MockProvider {
    fn info(&self) -> &ProviderInfo {
        &self.info
    }

    async fn embed(&self, text: &str) -> Result<Embedding, ProviderError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_on.contains(text) {
            debug!(text = text, "Mock provider failing as configured");
            return Err(ProviderError::Inference("mock failure".to_string()));
        }

        let values = self
            .responses
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.fold_bytes(text));

        Ok(Embedding::new(values))
    }
}
