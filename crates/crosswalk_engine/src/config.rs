//! Configuration for checked conversions.

use crosswalk_foundation::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Limits and strictness for [`Driver`](crate::Driver).
///
/// The default places no bounds and degrades unclassifiable values to null,
/// which matches [`convert`](crate::convert).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConvertConfig {
    /// Maximum nesting depth. The root value is at depth 0.
    pub max_depth: Option<usize>,

    /// Maximum number of source values visited, keys included.
    pub max_values: Option<usize>,

    /// Fail on unclassifiable values instead of converting them to null.
    pub strict: bool,
}

impl ConvertConfig {
    /// Depth limit used by [`ConvertConfig::bounded`].
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    /// Value limit used by [`ConvertConfig::bounded`].
    pub const DEFAULT_MAX_VALUES: usize = 1_000_000;

    /// No limits, lenient.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Limits suitable for untrusted input.
    #[must_use]
    pub fn bounded() -> Self {
        Self {
            max_depth: Some(Self::DEFAULT_MAX_DEPTH),
            max_values: Some(Self::DEFAULT_MAX_VALUES),
            strict: false,
        }
    }

    /// Builder method to set the depth limit.
    #[must_use]
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Builder method to set the value limit.
    #[must_use]
    pub fn with_max_values(mut self, values: Option<usize>) -> Self {
        self.max_values = values;
        self
    }

    /// Builder method to enable/disable strict mode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Checks that the configuration can admit at least one value.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidConfig`](crosswalk_foundation::ErrorKind::InvalidConfig)
    /// if `max_values` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_values == Some(0) {
            return Err(Error::invalid_config("max_values must be at least 1"));
        }
        Ok(())
    }
}
