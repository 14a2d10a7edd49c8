//! # simmat-session
//!
//! Entry and similarity matrix orchestration for Simmat.
//!
//! A `MatrixSession` owns the mutable collection of text entries and the
//! last computed similarity matrix. It mediates between the presentation
//! layer (add/remove/edit/compute triggers) and the embedding provider
//! (async, slow, fallible), and enforces the gating rule for when a
//! matrix may be computed.
//!
//! ## Features
//! - Three-state embedding lifecycle per entry: absent, pending, resolved
//! - In-flight requests keyed by entry identity, so stale completions for
//!   removed entries are discarded instead of corrupting their successors
//! - Provider failures reset the entry to absent and are surfaced through
//!   `last_failure` rather than leaving the entry pending forever
//! - On-demand, atomic matrix computation over the resolved entries

pub mod config;
pub mod entry;
pub mod error;
pub mod matrix;
pub mod session;

pub use config::SessionConfig;
pub use entry::{EmbeddingState, Entry, EntryId};
pub use error::SessionError;
pub use matrix::{Highlight, SimilarityMatrix, STRONG_THRESHOLD, WEAK_THRESHOLD};
pub use session::{MatrixSession, ProviderFailure, RequestOutcome};
