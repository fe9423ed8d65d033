//! Type tags used to dispatch conversions.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of a native value for conversion dispatch.
///
/// Every native value maps to exactly one tag. Values a runtime cannot
/// represent in this taxonomy classify as [`TypeTag::None`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TypeTag {
    /// Boolean scalar.
    Boolean,
    /// 64-bit signed integer scalar.
    Integer,
    /// Double precision floating point scalar.
    Floating,
    /// Text or raw byte string.
    String,
    /// Ordered sequence.
    List,
    /// Key-value map.
    Dict,
    /// Null, or anything that could not be classified.
    None,
}

impl TypeTag {
    /// All tags in classification priority order.
    ///
    /// Runtimes test their native predicates in this order, so a value that
    /// satisfies several predicates (a boolean that is also integer-like)
    /// gets the earliest tag.
    pub const PRIORITY: [TypeTag; 7] = [
        Self::Boolean,
        Self::Integer,
        Self::Floating,
        Self::String,
        Self::List,
        Self::Dict,
        Self::None,
    ];

    /// Position of this tag in [`TypeTag::PRIORITY`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Boolean => 0,
            Self::Integer => 1,
            Self::Floating => 2,
            Self::String => 3,
            Self::List => 4,
            Self::Dict => 5,
            Self::None => 6,
        }
    }

    /// Returns true for BOOLEAN, INTEGER, FLOATING and STRING.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::Boolean | Self::Integer | Self::Floating | Self::String
        )
    }

    /// Returns true for LIST and DICT.
    #[must_use]
    pub const fn is_collection(self) -> bool {
        matches!(self, Self::List | Self::Dict)
    }

    /// Lowercase name of the tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Floating => "floating",
            Self::String => "string",
            Self::List => "list",
            Self::Dict => "dict",
            Self::None => "none",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
