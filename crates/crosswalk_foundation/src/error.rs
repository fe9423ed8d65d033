//! Error types for checked conversions.
//!
//! Uses `thiserror` for ergonomic error definition. The plain conversion
//! path never produces these; they come from callers that opt into limits
//! or strict classification.

use std::fmt;

use thiserror::Error;

/// The main error type for Crosswalk operations.
#[derive(Debug, Error)]
#[error("{kind} at {path}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Where in the source value the conversion stopped.
    pub path: ValuePath,
}

impl Error {
    /// Creates a new error at the root of the value.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            path: ValuePath::root(),
        }
    }

    /// Prefixes the path with the segment of an enclosing collection.
    ///
    /// Called while unwinding, innermost segment first.
    #[must_use]
    pub fn within(mut self, segment: PathSegment) -> Self {
        self.path.segments.insert(0, segment);
        self
    }

    /// Creates a limit exceeded error.
    #[must_use]
    pub fn limit_exceeded(limit: ConversionLimit) -> Self {
        Self::new(ErrorKind::LimitExceeded(limit))
    }

    /// Creates an unclassifiable value error.
    #[must_use]
    pub fn unclassifiable(runtime: &'static str, description: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unclassifiable {
            runtime,
            description: description.into(),
        })
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfig(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A configured conversion limit was hit.
    #[error("limit exceeded: {0}")]
    LimitExceeded(ConversionLimit),

    /// A value matched no type tag and strict mode was on.
    #[error("unclassifiable {runtime} value: {description}")]
    Unclassifiable {
        /// The source runtime.
        runtime: &'static str,
        /// The diagnostic recorded for the value.
        description: String,
    },

    /// Configuration was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Limits a checked conversion can exceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionLimit {
    /// Maximum nesting depth exceeded.
    MaxDepth {
        /// The configured limit.
        limit: usize,
    },
    /// Maximum number of visited values exceeded.
    MaxValues {
        /// The configured limit.
        limit: usize,
    },
}

impl fmt::Display for ConversionLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxDepth { limit } => write!(f, "max depth ({limit}) exceeded"),
            Self::MaxValues { limit } => write!(f, "max values ({limit}) exceeded"),
        }
    }
}

/// One step from a collection into one of its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    /// Element of a list.
    Index(usize),
    /// Entry of a map, counted in iteration order.
    Entry(usize),
}

/// Location of a value inside a nested source value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValuePath {
    /// Segments from the root inward.
    pub segments: Vec<PathSegment>,
}

impl ValuePath {
    /// The path of the root value.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Returns true for the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for segment in &self.segments {
            match segment {
                PathSegment::Index(index) => write!(f, "[{index}]")?,
                PathSegment::Entry(entry) => write!(f, "{{{entry}}}")?,
            }
        }
        Ok(())
    }
}
