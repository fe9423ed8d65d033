//! Integration tests for Diagnostics
//!
//! Tests recording, eviction, and querying of conversion diagnostics.

use crosswalk_foundation::{DiagnosticKind, Diagnostics, TypeTag};

// =============================================================================
// Recording
// =============================================================================

#[test]
fn unclassifiable_records_and_returns_none() {
    let mut log = Diagnostics::default();
    assert_eq!(log.unclassifiable("script", "set", "{1}"), TypeTag::None);
    assert_eq!(log.len(), 1);
    let record = log.latest().unwrap();
    assert_eq!(record.runtime, "script");
    assert_eq!(record.sequence, 0);
    assert_eq!(record.to_string(), "[script#0] cannot convert set value {1}");
}

#[test]
fn saturation_message() {
    let kind = DiagnosticKind::IntegerSaturated {
        value: 1 << 40,
        stored: i64::from(i32::MAX),
    };
    assert_eq!(
        kind.to_string(),
        format!("integer {} saturated to {}", 1_i64 << 40, i32::MAX)
    );
    assert!(!kind.is_unclassifiable());
}

#[test]
fn default_capacity() {
    assert_eq!(Diagnostics::default().capacity(), Diagnostics::DEFAULT_CAPACITY);
}

// =============================================================================
// Eviction
// =============================================================================

#[test]
fn full_log_drops_oldest() {
    let mut log = Diagnostics::new(3);
    for i in 0..10 {
        log.unclassifiable("test", "thing", i.to_string());
    }
    assert_eq!(log.len(), 3);
    assert_eq!(log.total(), 10);
    assert_eq!(log.iter().next().map(|d| d.sequence), Some(7));
}

#[test]
fn count_filters_by_kind() {
    let mut log = Diagnostics::default();
    log.unclassifiable("test", "thing", "a");
    log.record("test", DiagnosticKind::NonFiniteFloat { value: f64::NAN });
    log.unclassifiable("test", "thing", "b");
    assert_eq!(log.count(DiagnosticKind::is_unclassifiable), 2);
    assert_eq!(
        log.count(|k| matches!(k, DiagnosticKind::NonFiniteFloat { .. })),
        1
    );
}
