//! Integration tests for Error types
//!
//! Tests error construction, display, paths, and error kinds.

use crosswalk_foundation::{ConversionLimit, Error, ErrorKind, PathSegment, ValuePath};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_max_depth() {
    let err = Error::limit_exceeded(ConversionLimit::MaxDepth { limit: 4 });
    assert!(matches!(
        err.kind,
        ErrorKind::LimitExceeded(ConversionLimit::MaxDepth { limit: 4 })
    ));
    assert_eq!(format!("{err}"), "limit exceeded: max depth (4) exceeded at $");
}

#[test]
fn error_max_values() {
    let err = Error::limit_exceeded(ConversionLimit::MaxValues { limit: 10 });
    let msg = format!("{err}");
    assert!(msg.contains("max values (10)"));
}

#[test]
fn error_unclassifiable() {
    let err = Error::unclassifiable("variant", "cannot convert QPointF value QPointF(1, 2)");
    assert!(matches!(
        err.kind,
        ErrorKind::Unclassifiable { runtime: "variant", .. }
    ));
    assert!(format!("{err}").contains("QPointF"));
}

#[test]
fn error_invalid_config() {
    let err = Error::invalid_config("max_values must be at least 1");
    assert!(matches!(err.kind, ErrorKind::InvalidConfig(_)));
    assert!(format!("{err}").contains("max_values"));
}

// =============================================================================
// Paths
// =============================================================================

#[test]
fn path_segments_display() {
    let path = ValuePath {
        segments: vec![
            PathSegment::Index(2),
            PathSegment::Entry(1),
            PathSegment::Index(0),
        ],
    };
    assert_eq!(path.to_string(), "$[2]{1}[0]");
    assert_eq!(path.depth(), 3);
}

#[test]
fn within_prepends() {
    let err = Error::invalid_config("x")
        .within(PathSegment::Index(5))
        .within(PathSegment::Entry(0));
    assert_eq!(
        err.path.segments,
        vec![PathSegment::Entry(0), PathSegment::Index(5)]
    );
    assert!(format!("{err}").ends_with("at ${0}[5]"));
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&Error::invalid_config("x"));
}
