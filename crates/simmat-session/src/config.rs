//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::matrix::{STRONG_THRESHOLD, WEAK_THRESHOLD};

/// Configuration for a matrix session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Similarity above this gets a weak highlight.
    #[serde(default = "default_weak_threshold")]
    pub weak_threshold: f64,

    /// Similarity above this gets a strong highlight.
    #[serde(default = "default_strong_threshold")]
    pub strong_threshold: f64,

    /// Expected embedding dimension. When set, resolved embeddings of any
    /// other length are rejected as provider failures. When `None`, the
    /// dimension is whatever the model produces and cross-entry mismatches
    /// surface at matrix computation time.
    #[serde(default)]
    pub expected_dimension: Option<usize>,
}

fn default_weak_threshold() -> f64 {
    WEAK_THRESHOLD
}

fn default_strong_threshold() -> f64 {
    STRONG_THRESHOLD
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            weak_threshold: default_weak_threshold(),
            strong_threshold: default_strong_threshold(),
            expected_dimension: None,
        }
    }
}

impl SessionConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), SessionError> {
        if !(-1.0..=1.0).contains(&self.weak_threshold) {
            return Err(SessionError::InvalidConfig(format!(
                "weak_threshold must be -1.0..=1.0, got {}",
                self.weak_threshold
            )));
        }
        if !(-1.0..=1.0).contains(&self.strong_threshold) {
            return Err(SessionError::InvalidConfig(format!(
                "strong_threshold must be -1.0..=1.0, got {}",
                self.strong_threshold
            )));
        }
        if self.weak_threshold > self.strong_threshold {
            return Err(SessionError::InvalidConfig(format!(
                "weak_threshold {} exceeds strong_threshold {}",
                self.weak_threshold, self.strong_threshold
            )));
        }
        if self.expected_dimension == Some(0) {
            return Err(SessionError::InvalidConfig(
                "expected_dimension must be > 0 when set".to_string(),
            ));
        }
        Ok(())
    }
}
