//! End-to-end similarity matrix flow tests.
//!
//! Covers the full add-entry -> embed -> compute-matrix path against the
//! deterministic mock provider, including the gating predicate and the
//! matrix snapshot semantics on entry removal and text edits.

use std::time::Duration;

use pretty_assertions::assert_eq;

use e2e_tests::{scenario_provider, TestHarness};
use simmat_session::{EmbeddingState, Highlight, RequestOutcome};

/// Full flow over "cat", "dog", "car": resolve all three, compute, and
/// verify the order-3 matrix cell by cell against the known vectors.
#[tokio::test]
async fn test_three_entry_matrix_values() {
    let harness = TestHarness::new();

    harness.add_embedded_entry("cat").await;
    harness.add_embedded_entry("dog").await;
    harness.add_embedded_entry("car").await;

    assert!(harness.session.can_compute_matrix());
    let matrix = harness.session.compute_matrix().unwrap();

    assert_eq!(matrix.order(), 3);
    assert_eq!(matrix.labels(), ["#1", "#2", "#3"]);

    // Diagonal is self-similarity
    for i in 0..3 {
        assert!((matrix.value(i, i).unwrap() - 1.0).abs() < 1e-9);
    }

    // cat/dog orthogonal, cat/car nearly parallel, dog/car nearly orthogonal
    assert_eq!(matrix.value(0, 1).unwrap(), 0.0);
    assert!((matrix.value(0, 2).unwrap() - 0.99995).abs() < 1e-4);
    assert!((matrix.value(1, 2).unwrap() - 0.00999).abs() < 1e-4);

    // Display hints at the preserved thresholds
    assert_eq!(Highlight::classify(matrix.value(0, 2).unwrap()), Highlight::Strong);
    assert_eq!(Highlight::classify(matrix.value(0, 1).unwrap()), Highlight::None);
}

/// Removing an entry after a matrix was computed must clear the stored
/// matrix — it would otherwise be displayed against a mismatched list.
#[tokio::test]
async fn test_removal_invalidates_stored_matrix() {
    let harness = TestHarness::new();
    harness.add_embedded_entry("cat").await;
    harness.add_embedded_entry("dog").await;

    harness.session.compute_matrix().unwrap();
    assert!(harness.session.matrix().is_some());

    harness.session.remove_entry(0).unwrap();
    assert_eq!(harness.session.matrix(), None);
}

/// Requesting an embedding for blank text is a no-op: state stays absent
/// and no provider call happens.
#[tokio::test]
async fn test_blank_text_request_is_noop() {
    let harness = TestHarness::new();
    harness.session.add_entry();
    harness.session.set_entry_text(0, "   ").unwrap();

    let outcome = harness.session.request_embedding(0).unwrap();
    assert!(matches!(outcome, RequestOutcome::SkippedBlankText));
    assert_eq!(harness.session.entries()[0].state, EmbeddingState::Absent);
}

/// While any request is pending, computation is blocked; once all have
/// completed it opens up again.
#[tokio::test]
async fn test_pending_request_blocks_computation() {
    let harness =
        TestHarness::with_provider(scenario_provider().with_delay(Duration::from_millis(30)));

    harness.add_embedded_entry("cat").await;
    harness.session.add_entry();
    harness.session.set_entry_text(1, "dog").unwrap();

    let handle = match harness.session.request_embedding(1).unwrap() {
        RequestOutcome::Issued(handle) => handle,
        other => panic!("Expected embedding request to be issued, got {other:?}"),
    };

    assert!(harness.session.entries()[1].state.is_pending());
    assert!(!harness.session.can_compute_matrix());
    assert!(harness.session.compute_matrix().is_err());

    handle.await.unwrap();
    assert!(harness.session.can_compute_matrix());
    assert!(harness.session.compute_matrix().is_ok());
}

/// The matrix the session stores is the one it returned, and it survives
/// text edits (a snapshot, not a live view).
#[tokio::test]
async fn test_matrix_is_a_snapshot() {
    let harness = TestHarness::new();
    harness.add_embedded_entry("cat").await;
    harness.add_embedded_entry("car").await;

    let matrix = harness.session.compute_matrix().unwrap();
    harness.session.set_entry_text(0, "tiger").unwrap();

    assert_eq!(harness.session.matrix(), Some(matrix));
}

/// The matrix serializes for the presentation layer.
#[tokio::test]
async fn test_matrix_round_trips_through_json() {
    let harness = TestHarness::new();
    harness.add_embedded_entry("cat").await;
    harness.add_embedded_entry("dog").await;

    let matrix = harness.session.compute_matrix().unwrap();
    let json = serde_json::to_string(&matrix).unwrap();
    let back: simmat_session::SimilarityMatrix = serde_json::from_str(&json).unwrap();
    assert_eq!(back, matrix);
}
