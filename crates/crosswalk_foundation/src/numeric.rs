//! Narrowing of 64-bit integers into 32-bit native integers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a runtime with a 32-bit native integer stores a 64-bit value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IntegerNarrowing {
    /// Store narrow when the value fits, otherwise use the wide form.
    #[default]
    Widen,
    /// Always store narrow, keeping the low 32 bits.
    Wrap,
    /// Always store narrow, clamping to the 32-bit range.
    Saturate,
}

/// Result of narrowing a 64-bit integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Narrowed {
    /// The value is stored as a 32-bit integer.
    Narrow(i32),
    /// The value needs the runtime's wide integer.
    Wide(i64),
    /// The value was clamped; the original is kept for reporting.
    Clamped {
        /// The stored value.
        stored: i32,
        /// The requested value.
        original: i64,
    },
}

impl IntegerNarrowing {
    /// Applies this policy to `value`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn apply(self, value: i64) -> Narrowed {
        match (self, i32::try_from(value)) {
            (_, Ok(narrow)) => Narrowed::Narrow(narrow),
            (Self::Widen, Err(_)) => Narrowed::Wide(value),
            (Self::Wrap, Err(_)) => Narrowed::Narrow(value as i32),
            (Self::Saturate, Err(_)) => Narrowed::Clamped {
                stored: if value < 0 { i32::MIN } else { i32::MAX },
                original: value,
            },
        }
    }
}
