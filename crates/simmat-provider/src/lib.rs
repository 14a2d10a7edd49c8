//! # simmat-provider
//!
//! Embedding provider interface for Simmat.
//!
//! The inference model that turns text into vectors is an external
//! collaborator: it may take tens of seconds per call and may fail. This
//! crate defines the seam the session orchestrator talks through — the
//! `Embedding` value type, the async `EmbeddingProvider` trait, and a
//! deterministic `MockProvider` for tests.
//!
//! ## Features
//! - `Embedding`: immutable `f64` vector, stored as produced (no
//!   normalization — the math layer owns norms)
//! - `EmbeddingProvider`: async, `Send + Sync`, no retry contract
//! - `MockProvider`: canned responses, failure injection, optional delay

pub mod error;
pub mod mock;
pub mod provider;

pub use error::ProviderError;
pub use mock::MockProvider;
pub use provider::{Embedding, EmbeddingProvider, ProviderInfo};
