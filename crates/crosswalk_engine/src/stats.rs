//! Counters collected by a checked conversion.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crosswalk_foundation::TypeTag;

/// What the last [`Driver::convert`](crate::Driver::convert) call visited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConvertStats {
    /// Source values visited, dict keys included.
    pub values: usize,
    /// Deepest nesting level reached. The root is at depth 0.
    pub max_depth: usize,
    /// Visits per tag, indexed by [`TypeTag::index`].
    by_tag: [usize; TypeTag::PRIORITY.len()],
}

impl ConvertStats {
    /// Creates empty stats.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one visited value.
    pub(crate) fn record(&mut self, tag: TypeTag, depth: usize) {
        self.values += 1;
        self.max_depth = self.max_depth.max(depth);
        self.by_tag[tag.index()] += 1;
    }

    /// Number of visited values classified as `tag`.
    #[must_use]
    pub fn count(&self, tag: TypeTag) -> usize {
        self.by_tag[tag.index()]
    }

    /// Number of collections visited.
    #[must_use]
    pub fn collections(&self) -> usize {
        self.count(TypeTag::List) + self.count(TypeTag::Dict)
    }
}
