//! The entry/result orchestrator.
//!
//! `MatrixSession` owns the entry collection and the last computed
//! similarity matrix. State lives behind a mutex so in-flight embedding
//! tasks can write their completions back; every critical section is
//! short and nothing holds the lock across an await.

use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use simmat_provider::{Embedding, EmbeddingProvider, ProviderError};

use crate::config::SessionConfig;
use crate::entry::{EmbeddingState, Entry, EntryId};
use crate::error::SessionError;
use crate::matrix::{Highlight, SimilarityMatrix};

/// Outcome of `request_embedding`.
#[derive(Debug)]
pub enum RequestOutcome {
    /// Request issued. The handle resolves once the completion has been
    /// applied to the session; dropping it detaches the task.
    Issued(JoinHandle<()>),
    /// Entry text was empty or whitespace-only; nothing was requested.
    SkippedBlankText,
    /// No provider installed; nothing was requested.
    SkippedNoProvider,
}

impl RequestOutcome {
    pub fn is_issued(&self) -> bool {
        matches!(self, RequestOutcome::Issued(_))
    }
}

/// A surfaced embedding failure.
///
/// The affected entry has been reset to absent; re-requesting is the
/// caller's decision.
#[derive(Debug, Clone)]
pub struct ProviderFailure {
    /// Entry whose request failed
    pub entry: EntryId,
    /// Human-readable failure description
    pub message: String,
}

#[derive(Default)]
struct SessionState {
    entries: Vec<Entry>,
    matrix: Option<SimilarityMatrix>,
    provider: Option<Arc<dyn EmbeddingProvider>>,
    last_failure: Option<ProviderFailure>,
}

impl SessionState {
    fn can_compute(&self) -> bool {
        let any_pending = self.entries.iter().any(|e| e.state.is_pending());
        let resolved = self.entries.iter().filter(|e| e.state.is_resolved()).count();
        !any_pending && resolved >= 2
    }
}

/// Orchestrator for text entries and their similarity matrix.
pub struct MatrixSession {
    state: Arc<Mutex<SessionState>>,
    config: SessionConfig,
}

impl MatrixSession {
    /// Create a session with default configuration and no provider.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Create a session with explicit configuration.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState::default())),
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Classify a similarity value against this session's thresholds.
    pub fn classify(&self, value: f64) -> Highlight {
        Highlight::classify_with(value, self.config.weak_threshold, self.config.strong_threshold)
    }

    /// Install the embedding provider.
    ///
    /// Clears all entries and any stored matrix: embeddings produced by a
    /// previous model are not comparable with the new one's.
    pub fn set_provider(&self, provider: Arc<dyn EmbeddingProvider>) {
        let mut state = self.state.lock().unwrap();
        let model = provider.info().clone();
        info!(model = %model.name, dim = model.dimension, "Provider installed");
        state.entries.clear();
        state.matrix = None;
        state.last_failure = None;
        state.provider = Some(provider);
    }

    /// Whether a provider is currently installed.
    pub fn provider_loaded(&self) -> bool {
        self.state.lock().unwrap().provider.is_some()
    }

    /// Append a new entry with no text and no embedding.
    pub fn add_entry(&self) -> EntryId {
        let mut state = self.state.lock().unwrap();
        let entry = Entry::new();
        let id = entry.id;
        state.entries.push(entry);
        debug!(entry = %id, count = state.entries.len(), "Entry added");
        id
    }

    /// Remove the entry at the given position.
    ///
    /// Also clears any stored matrix: its row/column correspondence to
    /// entries no longer holds.
    pub fn remove_entry(&self, position: usize) -> Result<(), SessionError> {
        let mut state = self.state.lock().unwrap();
        let len = state.entries.len();
        if position >= len {
            return Err(SessionError::IndexOutOfRange { position, len });
        }
        let entry = state.entries.remove(position);
        state.matrix = None;
        debug!(entry = %entry.id, position = position, "Entry removed, matrix cleared");
        Ok(())
    }

    /// Update an entry's text.
    ///
    /// Blank text is stored like any other; it only matters when an
    /// embedding is requested. Never transitions embedding state.
    pub fn set_entry_text(
        &self,
        position: usize,
        text: impl Into<String>,
    ) -> Result<(), SessionError> {
        let mut state = self.state.lock().unwrap();
        let len = state.entries.len();
        let entry = state
            .entries
            .get_mut(position)
            .ok_or(SessionError::IndexOutOfRange { position, len })?;
        entry.text = text.into();
        Ok(())
    }

    /// Snapshot of all entries in ordinal order.
    pub fn entries(&self) -> Vec<Entry> {
        self.state.lock().unwrap().entries.clone()
    }

    pub fn entry_count(&self) -> usize {
        self.state.lock().unwrap().entries.len()
    }

    /// Request an embedding for the entry at the given position.
    ///
    /// No-ops (without error) when the text is blank or no provider is
    /// installed — the UI is expected to prevent both, so neither is worth
    /// failing over. Otherwise the entry goes pending and a task is
    /// spawned to await the provider.
    ///
    /// The completion is matched back by entry id, never by position: if
    /// the entry was removed meanwhile, the result is discarded. Multiple
    /// requests for the same entry may be in flight; the last one to
    /// complete wins.
    pub fn request_embedding(&self, position: usize) -> Result<RequestOutcome, SessionError> {
        let mut state = self.state.lock().unwrap();
        let len = state.entries.len();
        let provider = state.provider.clone();
        let entry = state
            .entries
            .get_mut(position)
            .ok_or(SessionError::IndexOutOfRange { position, len })?;

        if entry.text.trim().is_empty() {
            debug!(entry = %entry.id, "Skipping embedding request for blank text");
            return Ok(RequestOutcome::SkippedBlankText);
        }
        let Some(provider) = provider else {
            debug!(entry = %entry.id, "Skipping embedding request, no provider");
            return Ok(RequestOutcome::SkippedNoProvider);
        };

        entry.state = EmbeddingState::Pending;
        let id = entry.id;
        let text = entry.text.clone();
        drop(state);

        debug!(entry = %id, "Embedding request issued");
        let shared = Arc::clone(&self.state);
        let expected_dimension = self.config.expected_dimension;
        let handle = tokio::spawn(async move {
            let result = provider.embed(&text).await;
            apply_completion(&shared, id, expected_dimension, result);
        });

        Ok(RequestOutcome::Issued(handle))
    }

    /// The most recent surfaced embedding failure, if any.
    pub fn last_failure(&self) -> Option<ProviderFailure> {
        self.state.lock().unwrap().last_failure.clone()
    }

    /// Consume the most recent surfaced embedding failure.
    pub fn take_last_failure(&self) -> Option<ProviderFailure> {
        self.state.lock().unwrap().last_failure.take()
    }

    /// Whether a matrix may be computed right now: at least two entries
    /// resolved and none pending. Pure predicate over current state.
    pub fn can_compute_matrix(&self) -> bool {
        self.state.lock().unwrap().can_compute()
    }

    /// Compute the similarity matrix over the resolved entries.
    ///
    /// Fails with `PreconditionViolated` if `can_compute_matrix` is false
    /// — a partial matrix is never produced. Snapshot and computation
    /// happen under the lock, so no entry mutation interleaves; the stored
    /// matrix is replaced atomically.
    pub fn compute_matrix(&self) -> Result<SimilarityMatrix, SessionError> {
        let mut guard = self.state.lock().unwrap();
        let state = &mut *guard;
        if !state.can_compute() {
            let pending = state.entries.iter().filter(|e| e.state.is_pending()).count();
            let resolved = state
                .entries
                .iter()
                .filter(|e| e.state.is_resolved())
                .count();
            return Err(SessionError::PreconditionViolated(format!(
                "{pending} pending, {resolved} resolved (need none pending and at least 2 resolved)"
            )));
        }

        let items: Vec<(usize, &Embedding)> = state
            .entries
            .iter()
            .enumerate()
            .filter_map(|(position, e)| e.state.embedding().map(|emb| (position, emb)))
            .collect();

        let matrix = SimilarityMatrix::build(&items)?;
        state.matrix = Some(matrix.clone());
        debug!(order = matrix.order(), "Matrix computed");
        Ok(matrix)
    }

    /// The last computed matrix, if one is stored.
    pub fn matrix(&self) -> Option<SimilarityMatrix> {
        self.state.lock().unwrap().matrix.clone()
    }
}

impl Default for MatrixSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a finished embedding request to the session state.
fn apply_completion(
    shared: &Arc<Mutex<SessionState>>,
    id: EntryId,
    expected_dimension: Option<usize>,
    result: Result<Embedding, ProviderError>,
) {
    let mut guard = shared.lock().unwrap();
    let state = &mut *guard;

    let Some(entry) = state.entries.iter_mut().find(|e| e.id == id) else {
        warn!(entry = %id, "Discarding embedding for removed entry");
        return;
    };

    let result = result.and_then(|embedding| match expected_dimension {
        Some(expected) if embedding.dimension() != expected => {
            Err(ProviderError::WrongDimension {
                expected,
                actual: embedding.dimension(),
            })
        }
        _ => Ok(embedding),
    });

    match result {
        Ok(embedding) => {
            debug!(entry = %id, dim = embedding.dimension(), "Embedding resolved");
            entry.state = EmbeddingState::Resolved(embedding);
        }
        Err(err) => {
            warn!(entry = %id, error = %err, "Embedding request failed");
            entry.state = EmbeddingState::Absent;
            state.last_failure = Some(ProviderFailure {
                entry: id,
                message: err.to_string(),
            });
        }
    }
}
