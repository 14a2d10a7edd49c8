//! Similarity matrix construction and display hints.

use serde::{Deserialize, Serialize};

use simmat_math::cosine_similarity;
use simmat_provider::Embedding;

use crate::error::SessionError;

/// Similarity above this gets a weak highlight.
pub const WEAK_THRESHOLD: f64 = 0.5;

/// Similarity above this gets a strong highlight.
pub const STRONG_THRESHOLD: f64 = 0.8;

/// Display hint for a matrix cell.
///
/// Presentation is not this crate's concern, but the thresholds are a
/// default worth keeping so frontends agree on what "closely related"
/// looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    None,
    Weak,
    Strong,
}

impl Highlight {
    /// Classify a similarity value against the default thresholds.
    /// `NaN` (undefined similarity) classifies as `None`.
    pub fn classify(value: f64) -> Self {
        Self::classify_with(value, WEAK_THRESHOLD, STRONG_THRESHOLD)
    }

    /// Classify against explicit thresholds.
    pub fn classify_with(value: f64, weak: f64, strong: f64) -> Self {
        if value > strong {
            Highlight::Strong
        } else if value > weak {
            Highlight::Weak
        } else {
            Highlight::None
        }
    }
}

/// Pairwise cosine similarities over the resolved entries at one moment.
///
/// A derived, disposable snapshot: entry edits or removals after
/// computation do not update it — removal drops it entirely on the
/// session. Labels carry each included entry's 1-based ordinal position
/// in the full entry list at computation time (entries without a resolved
/// embedding leave gaps, e.g. `#1`, `#3`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    labels: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    /// Build the matrix over `(position, embedding)` pairs in ordinal order.
    ///
    /// Every ordered pair is computed, including the diagonal; mismatched
    /// embedding dimensions fail rather than truncate.
    pub(crate) fn build(items: &[(usize, &Embedding)]) -> Result<Self, SessionError> {
        let labels = items
            .iter()
            .map(|(position, _)| format!("#{}", position + 1))
            .collect();

        let mut values = Vec::with_capacity(items.len());
        for (_, a) in items {
            let mut row = Vec::with_capacity(items.len());
            for (_, b) in items {
                row.push(cosine_similarity(&a.values, &b.values)?);
            }
            values.push(row);
        }

        Ok(Self { labels, values })
    }

    /// Number of entries covered (matrix is `order x order`).
    pub fn order(&self) -> usize {
        self.values.len()
    }

    /// Header labels, one per covered entry.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Cell value, if in range.
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row)?.get(col).copied()
    }

    /// All rows in label order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }
}
