//! # simmat-math
//!
//! Numerically stable vector similarity math for Simmat.
//!
//! This crate is the leaf of the workspace: pure functions over `f64`
//! slices with no internal dependencies and no state.
//!
//! ## Features
//! - `dot` product with explicit dimension checking (no silent truncation)
//! - `l2_norm` via a scaled running-sum that stays finite across the full
//!   double-precision dynamic range
//! - `cosine_similarity` composed from the two, yielding `NaN` (not an
//!   error) when either input has zero norm

pub mod error;
pub mod norm;
pub mod similarity;

pub use error::MathError;
pub use norm::l2_norm;
pub use similarity::{cosine_similarity, dot};
