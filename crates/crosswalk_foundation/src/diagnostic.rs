//! Diagnostics recorded by converters.
//!
//! Conversions never fail on odd input; they degrade and leave a diagnostic
//! behind instead. Each record is emitted through `tracing` and kept in a
//! bounded ring so callers can inspect what happened.

use std::collections::VecDeque;
use std::fmt;

use crate::tag::TypeTag;

// =============================================================================
// Diagnostic Kind
// =============================================================================

/// What a converter had to degrade.
#[derive(Clone, Debug, PartialEq)]
pub enum DiagnosticKind {
    /// A native value matched none of the classification predicates.
    Unclassifiable {
        /// The runtime's name for the value's type.
        type_name: String,
        /// Short printable form of the value.
        repr: String,
    },
    /// An integer was clamped into a narrower native range.
    IntegerSaturated {
        /// The 64-bit value that was requested.
        value: i64,
        /// The value actually stored.
        stored: i64,
    },
    /// A float the runtime cannot represent was replaced with its null.
    NonFiniteFloat {
        /// The rejected value.
        value: f64,
    },
    /// A map entry replaced an earlier entry whose key became equal in
    /// this runtime, such as `1` and `"1"` in a string-keyed map.
    KeyCollision {
        /// Position of the replacing entry in the source map.
        entry: usize,
    },
}

impl DiagnosticKind {
    /// Returns true for [`DiagnosticKind::Unclassifiable`].
    #[must_use]
    pub const fn is_unclassifiable(&self) -> bool {
        matches!(self, Self::Unclassifiable { .. })
    }

    /// Returns true for [`DiagnosticKind::KeyCollision`].
    #[must_use]
    pub const fn is_key_collision(&self) -> bool {
        matches!(self, Self::KeyCollision { .. })
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unclassifiable { type_name, repr } => {
                write!(f, "cannot convert {type_name} value {repr}")
            }
            Self::IntegerSaturated { value, stored } => {
                write!(f, "integer {value} saturated to {stored}")
            }
            Self::NonFiniteFloat { value } => {
                write!(f, "non-finite float {value} replaced with null")
            }
            Self::KeyCollision { entry } => {
                write!(f, "map entry {entry} replaced an earlier entry with an equal key")
            }
        }
    }
}

// =============================================================================
// Diagnostic
// =============================================================================

/// A single recorded diagnostic.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Monotonic sequence number within the owning [`Diagnostics`].
    pub sequence: u64,
    /// Name of the runtime that recorded it.
    pub runtime: &'static str,
    /// What happened.
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}#{}] {}", self.runtime, self.sequence, self.kind)
    }
}

// =============================================================================
// Diagnostics
// =============================================================================

/// Bounded log of diagnostics, oldest first.
///
/// When full, the oldest record is discarded. [`Diagnostics::total`] keeps
/// counting across evictions.
#[derive(Clone, Debug)]
pub struct Diagnostics {
    records: VecDeque<Diagnostic>,
    max_size: usize,
    next_sequence: u64,
}

impl Diagnostics {
    /// Default number of retained records.
    pub const DEFAULT_CAPACITY: usize = 256;

    /// Longest value representation kept in an unclassifiable record.
    pub const MAX_REPR_CHARS: usize = 80;

    /// Creates a log retaining at most `max_size` records.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max_size.min(64)),
            max_size,
            next_sequence: 0,
        }
    }

    /// Records a diagnostic and emits it as a warning.
    ///
    /// Returns the assigned sequence number.
    pub fn record(&mut self, runtime: &'static str, kind: DiagnosticKind) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        tracing::warn!(runtime, sequence, "{kind}");

        self.records.push_back(Diagnostic {
            sequence,
            runtime,
            kind,
        });
        while self.records.len() > self.max_size {
            self.records.pop_front();
        }

        sequence
    }

    /// Records an unclassifiable value and returns [`TypeTag::None`].
    ///
    /// Shorthand for the fallback branch of a converter's `classify`.
    /// Long representations are cut to [`Diagnostics::MAX_REPR_CHARS`].
    pub fn unclassifiable(
        &mut self,
        runtime: &'static str,
        type_name: impl Into<String>,
        repr: impl Into<String>,
    ) -> TypeTag {
        let mut repr = repr.into();
        if let Some((cut, _)) = repr.char_indices().nth(Self::MAX_REPR_CHARS) {
            repr.truncate(cut);
            repr.push_str("...");
        }
        self.record(
            runtime,
            DiagnosticKind::Unclassifiable {
                type_name: type_name.into(),
                repr,
            },
        );
        TypeTag::None
    }

    /// Number of retained records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of diagnostics ever recorded, including evicted ones.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.next_sequence
    }

    /// Maximum number of retained records.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.max_size
    }

    /// The most recent record.
    #[must_use]
    pub fn latest(&self) -> Option<&Diagnostic> {
        self.records.back()
    }

    /// Iterates retained records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.records.iter()
    }

    /// The most recent `count` records, oldest first.
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<&Diagnostic> {
        let start = self.records.len().saturating_sub(count);
        self.records.iter().skip(start).collect()
    }

    /// Number of retained records matching `predicate`.
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&DiagnosticKind) -> bool,
    {
        self.records.iter().filter(|r| predicate(&r.kind)).count()
    }

    /// Drops all retained records. Sequence numbers keep increasing.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
