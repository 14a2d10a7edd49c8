//! End-to-end test infrastructure for simmat.
//!
//! Provides a shared TestHarness and helper functions for E2E tests
//! covering the full add-entry -> embed -> compute-matrix flow against a
//! deterministic mock provider.

use std::sync::Arc;

use simmat_provider::MockProvider;
use simmat_session::{MatrixSession, RequestOutcome};

/// Canned vectors used across the E2E scenarios: "cat" and "car" point in
/// nearly the same direction, "dog" is orthogonal to both.
pub const SCENARIO_TEXTS: [(&str, [f64; 2]); 3] = [
    ("cat", [1.0, 0.0]),
    ("dog", [0.0, 1.0]),
    ("car", [1.0, 0.01]),
];

/// Build a mock provider seeded with the scenario vectors.
pub fn scenario_provider() -> MockProvider {
    SCENARIO_TEXTS
        .iter()
        .fold(MockProvider::new(2), |provider, (text, values)| {
            provider.with_response(*text, values.to_vec())
        })
}

/// Shared test harness for E2E tests.
///
/// Wraps a session wired to the scenario provider, with helpers for the
/// common add-type-embed sequence.
pub struct TestHarness {
    pub session: MatrixSession,
}

impl TestHarness {
    /// Create a harness with the scenario provider installed.
    pub fn new() -> Self {
        Self::with_provider(scenario_provider())
    }

    /// Create a harness with a custom mock provider.
    pub fn with_provider(provider: MockProvider) -> Self {
        let session = MatrixSession::new();
        session.set_provider(Arc::new(provider));
        Self { session }
    }

    /// Add an entry, set its text, request its embedding, and wait for the
    /// request to complete. Returns the entry's position.
    pub async fn add_embedded_entry(&self, text: &str) -> usize {
        let position = self.session.entry_count();
        self.session.add_entry();
        self.session
            .set_entry_text(position, text)
            .expect("Failed to set entry text");
        match self
            .session
            .request_embedding(position)
            .expect("Failed to request embedding")
        {
            RequestOutcome::Issued(handle) => {
                handle.await.expect("Embedding task panicked");
            }
            other => panic!("Expected embedding request to be issued, got {other:?}"),
        }
        position
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
