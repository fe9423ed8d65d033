//! Tagged variant value of the UI toolkit.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collections::{VariantList, VariantMap};

/// A toolkit variant.
///
/// Holds one value of a fixed set of toolkit types. `Invalid` is the empty
/// variant and plays the role of null.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Variant {
    /// The empty variant.
    #[default]
    Invalid,
    /// Boolean.
    Bool(bool),
    /// 32-bit signed integer.
    Int(i32),
    /// 32-bit unsigned integer.
    UInt(u32),
    /// 64-bit signed integer.
    LongLong(i64),
    /// 64-bit unsigned integer.
    ULongLong(u64),
    /// Single precision float.
    Float(f32),
    /// Double precision float.
    Double(f64),
    /// UTF-8 text.
    String(String),
    /// Raw bytes.
    ByteArray(Vec<u8>),
    /// List of strings.
    StringList(Vec<String>),
    /// List of variants.
    List(VariantList),
    /// String-keyed map of variants.
    Map(VariantMap),
    /// URL.
    Url(String),
    /// 2D point.
    Point(f64, f64),
    /// RGBA color.
    Color(u32),
}

impl Variant {
    /// The toolkit's name for this variant's type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Invalid => "Invalid",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::UInt(_) => "uint",
            Self::LongLong(_) => "qlonglong",
            Self::ULongLong(_) => "qulonglong",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::String(_) => "QString",
            Self::ByteArray(_) => "QByteArray",
            Self::StringList(_) => "QStringList",
            Self::List(_) => "QVariantList",
            Self::Map(_) => "QVariantMap",
            Self::Url(_) => "QUrl",
            Self::Point(..) => "QPointF",
            Self::Color(_) => "QColor",
        }
    }

    /// Returns true for the empty variant.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// Returns true for any integer variant.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Int(_) | Self::UInt(_) | Self::LongLong(_) | Self::ULongLong(_)
        )
    }

    /// Returns true for either float variant.
    #[must_use]
    pub const fn is_floating(&self) -> bool {
        matches!(self, Self::Float(_) | Self::Double(_))
    }

    /// Reads any integer variant as `i64`.
    ///
    /// `ULongLong` values above `i64::MAX` wrap.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn to_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n as i64),
            Self::UInt(n) => Some(*n as i64),
            Self::LongLong(n) => Some(*n),
            Self::ULongLong(n) => Some(*n as i64),
            _ => None,
        }
    }

    /// Reads either float variant as `f64`.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(f64::from(*n)),
            Self::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// Text of a `String` variant.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The list of a `List` variant.
    #[must_use]
    pub const fn as_list(&self) -> Option<&VariantList> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// The map of a `Map` variant.
    #[must_use]
    pub const fn as_map(&self) -> Option<&VariantMap> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// String form of the variant, as used for map keys.
    #[must_use]
    pub fn to_key_string(&self) -> String {
        match self {
            Self::String(s) | Self::Url(s) => s.clone(),
            Self::ByteArray(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            Self::Invalid => String::new(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => write!(f, "QVariant()"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::LongLong(n) => write!(f, "{n}"),
            Self::ULongLong(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Double(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::ByteArray(bytes) => write!(f, "{:?}", String::from_utf8_lossy(bytes)),
            Self::StringList(items) => write!(f, "{items:?}"),
            Self::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
            Self::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k:?}: {v}")?;
                }
                write!(f, "}}")
            }
            Self::Url(url) => write!(f, "QUrl({url:?})"),
            Self::Point(x, y) => write!(f, "QPointF({x}, {y})"),
            Self::Color(rgba) => write!(f, "#{rgba:08x}"),
        }
    }
}

// Convenience From implementations

impl From<bool> for Variant {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Variant {
    fn from(n: i32) -> Self {
        Self::Int(n)
    }
}

impl From<i64> for Variant {
    fn from(n: i64) -> Self {
        Self::LongLong(n)
    }
}

impl From<f64> for Variant {
    fn from(n: f64) -> Self {
        Self::Double(n)
    }
}

impl From<&str> for Variant {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Variant {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Variant>> From<Vec<T>> for Variant {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}
