//! Entry types and the per-entry embedding lifecycle.

use std::fmt;

use simmat_provider::Embedding;
use ulid::Ulid;

/// Stable identity of an entry.
///
/// Positions shift as entries are added and removed; in-flight embedding
/// requests are matched back by this id so a completion for a deleted
/// entry never lands on whatever entry now occupies its old position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Ulid);

impl EntryId {
    pub(crate) fn new() -> Self {
        Self(Ulid::new())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Per-entry embedding lifecycle.
///
/// `Absent --request--> Pending --success--> Resolved`; a failed request
/// transitions back to `Absent` with the failure surfaced on the session.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbeddingState {
    /// No embedding requested yet (or the last request failed)
    Absent,
    /// A request is in flight
    Pending,
    /// The provider returned a vector
    Resolved(Embedding),
}

impl EmbeddingState {
    pub fn is_pending(&self) -> bool {
        matches!(self, EmbeddingState::Pending)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, EmbeddingState::Resolved(_))
    }

    /// The resolved embedding, if any.
    pub fn embedding(&self) -> Option<&Embedding> {
        match self {
            EmbeddingState::Resolved(embedding) => Some(embedding),
            _ => None,
        }
    }
}

/// One user-provided text item.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Stable identity, assigned at creation
    pub id: EntryId,
    /// Current text (may be blank)
    pub text: String,
    /// Embedding lifecycle state
    pub state: EmbeddingState,
}

impl Entry {
    pub(crate) fn new() -> Self {
        Self {
            id: EntryId::new(),
            text: String::new(),
            state: EmbeddingState::Absent,
        }
    }
}
