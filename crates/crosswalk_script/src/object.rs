//! Reference-counted object model of the scripting runtime.

use std::fmt;
use std::rc::Rc;

// =============================================================================
// Object
// =============================================================================

/// The payload behind an [`Obj`] handle.
///
/// Objects are immutable once created. Containers hold their own
/// references to their members.
pub enum Object {
    /// The null object.
    None,
    /// Boolean. Also integer-like, see [`Obj::is_int`].
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Float.
    Float(f64),
    /// Text, stored one code point per slot.
    Str(Box<[char]>),
    /// Raw bytes.
    Bytes(Box<[u8]>),
    /// Growable sequence.
    List(Vec<Obj>),
    /// Fixed-size sequence.
    Tuple(Box<[Obj]>),
    /// Key-value mapping with unique keys, in insertion order.
    Dict(Vec<(Obj, Obj)>),
    /// Unordered collection of unique members.
    Set(Vec<Obj>),
    /// Instance of a user-defined class.
    Instance {
        /// The class name.
        class: String,
    },
}

// =============================================================================
// Obj
// =============================================================================

/// Shared handle to an [`Object`].
///
/// Cloning a handle takes a new reference; dropping it releases one.
#[derive(Clone)]
pub struct Obj(Rc<Object>);

impl Obj {
    /// Wraps a fresh object in a handle holding the only reference.
    #[must_use]
    pub fn new(object: Object) -> Self {
        Self(Rc::new(object))
    }

    /// Creates an integer.
    #[must_use]
    pub fn int(value: i64) -> Self {
        Self::new(Object::Int(value))
    }

    /// Creates a float.
    #[must_use]
    pub fn float(value: f64) -> Self {
        Self::new(Object::Float(value))
    }

    /// Creates a text string.
    #[must_use]
    pub fn str(text: &str) -> Self {
        Self::new(Object::Str(text.chars().collect()))
    }

    /// Creates a byte string.
    #[must_use]
    pub fn bytes(bytes: &[u8]) -> Self {
        Self::new(Object::Bytes(bytes.into()))
    }

    /// Creates a list owning `items`.
    #[must_use]
    pub fn list(items: Vec<Obj>) -> Self {
        Self::new(Object::List(items))
    }

    /// Creates a tuple owning `items`.
    #[must_use]
    pub fn tuple(items: Vec<Obj>) -> Self {
        Self::new(Object::Tuple(items.into_boxed_slice()))
    }

    /// Creates a dict from `entries`. Later duplicates of a key win.
    #[must_use]
    pub fn dict(entries: Vec<(Obj, Obj)>) -> Self {
        let mut unique: Vec<(Obj, Obj)> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            insert_entry(&mut unique, key, value);
        }
        Self::new(Object::Dict(unique))
    }

    /// Creates a set, dropping duplicate members.
    #[must_use]
    pub fn set(members: Vec<Obj>) -> Self {
        let mut unique: Vec<Obj> = Vec::with_capacity(members.len());
        for member in members {
            if !unique.contains(&member) {
                unique.push(member);
            }
        }
        Self::new(Object::Set(unique))
    }

    /// Creates an instance of a user-defined class.
    #[must_use]
    pub fn instance(class: impl Into<String>) -> Self {
        Self::new(Object::Instance {
            class: class.into(),
        })
    }

    /// The object behind this handle.
    #[must_use]
    pub fn object(&self) -> &Object {
        &self.0
    }

    /// Number of live references to the object.
    #[must_use]
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// Returns true if both handles refer to the same object.
    #[must_use]
    pub fn is(&self, other: &Obj) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// The runtime's name for this object's type.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self.object() {
            Object::None => "NoneType",
            Object::Bool(_) => "bool",
            Object::Int(_) => "int",
            Object::Float(_) => "float",
            Object::Str(_) => "str",
            Object::Bytes(_) => "bytes",
            Object::List(_) => "list",
            Object::Tuple(_) => "tuple",
            Object::Dict(_) => "dict",
            Object::Set(_) => "set",
            Object::Instance { class } => class,
        }
    }

    // -------------------------------------------------------------------------
    // Type predicates
    // -------------------------------------------------------------------------

    /// Returns true for the null object.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self.object(), Object::None)
    }

    /// Returns true for booleans.
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self.object(), Object::Bool(_))
    }

    /// Returns true for integers, including booleans.
    #[must_use]
    pub fn is_int(&self) -> bool {
        matches!(self.object(), Object::Int(_) | Object::Bool(_))
    }

    /// Returns true for floats.
    #[must_use]
    pub fn is_float(&self) -> bool {
        matches!(self.object(), Object::Float(_))
    }

    /// Returns true for text strings.
    #[must_use]
    pub fn is_str(&self) -> bool {
        matches!(self.object(), Object::Str(_))
    }

    /// Returns true for byte strings.
    #[must_use]
    pub fn is_bytes(&self) -> bool {
        matches!(self.object(), Object::Bytes(_))
    }

    /// Returns true for lists.
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self.object(), Object::List(_))
    }

    /// Returns true for tuples.
    #[must_use]
    pub fn is_tuple(&self) -> bool {
        matches!(self.object(), Object::Tuple(_))
    }

    /// Returns true for dicts.
    #[must_use]
    pub fn is_dict(&self) -> bool {
        matches!(self.object(), Object::Dict(_))
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Integer value of an int or bool.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self.object() {
            Object::Int(n) => Some(*n),
            Object::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    /// Value of a bool.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.object() {
            Object::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Value of a float.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self.object() {
            Object::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Text of a str, re-encoded as UTF-8.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self.object() {
            Object::Str(chars) => Some(chars.iter().collect()),
            _ => None,
        }
    }

    /// Members of a list or tuple.
    #[must_use]
    pub fn items(&self) -> Option<&[Obj]> {
        match self.object() {
            Object::List(items) => Some(&items[..]),
            Object::Tuple(items) => Some(&items[..]),
            _ => None,
        }
    }

    /// Entries of a dict.
    #[must_use]
    pub fn entries(&self) -> Option<&[(Obj, Obj)]> {
        match self.object() {
            Object::Dict(entries) => Some(&entries[..]),
            _ => None,
        }
    }

    /// Looks up `key` in a dict.
    #[must_use]
    pub fn get(&self, key: &Obj) -> Option<&Obj> {
        self.entries()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Looks up a text key in a dict.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&Obj> {
        self.get(&Obj::str(key))
    }

    /// Number of members of a container, or `None` for scalars.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self.object() {
            Object::Str(chars) => Some(chars.len()),
            Object::Bytes(bytes) => Some(bytes.len()),
            Object::List(items) | Object::Set(items) => Some(items.len()),
            Object::Tuple(items) => Some(items.len()),
            Object::Dict(entries) => Some(entries.len()),
            _ => None,
        }
    }
}

/// Inserts into a dict's entry list, replacing the value of an equal key.
///
/// Returns the replaced value.
pub(crate) fn insert_entry(
    entries: &mut Vec<(Obj, Obj)>,
    key: Obj,
    value: Obj,
) -> Option<Obj> {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some(entry) => Some(std::mem::replace(&mut entry.1, value)),
        None => {
            entries.push((key, value));
            None
        }
    }
}

// =============================================================================
// Equality
// =============================================================================

// Strict by type: `1 != True` and `1 != 1.0`. Dicts and sets compare
// without regard to order.
impl PartialEq for Obj {
    fn eq(&self, other: &Self) -> bool {
        if self.is(other) {
            return !matches!(self.object(), Object::Float(n) if n.is_nan());
        }
        match (self.object(), other.object()) {
            (Object::None, Object::None) => true,
            (Object::Bool(a), Object::Bool(b)) => a == b,
            (Object::Int(a), Object::Int(b)) => a == b,
            (Object::Float(a), Object::Float(b)) => a == b,
            (Object::Str(a), Object::Str(b)) => a == b,
            (Object::Bytes(a), Object::Bytes(b)) => a == b,
            (Object::List(a), Object::List(b)) => a == b,
            (Object::Tuple(a), Object::Tuple(b)) => a == b,
            (Object::Dict(a), Object::Dict(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(key, value)| {
                        b.iter().any(|(k, v)| k == key && v == value)
                    })
            }
            (Object::Set(a), Object::Set(b)) => {
                a.len() == b.len() && a.iter().all(|member| b.contains(member))
            }
            _ => false,
        }
    }
}

// =============================================================================
// Display
// =============================================================================

fn write_seq(f: &mut fmt::Formatter<'_>, open: &str, items: &[Obj], close: &str) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(close)
}

impl fmt::Display for Obj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.object() {
            Object::None => f.write_str("None"),
            Object::Bool(true) => f.write_str("True"),
            Object::Bool(false) => f.write_str("False"),
            Object::Int(n) => write!(f, "{n}"),
            Object::Float(n) => write!(f, "{n:?}"),
            Object::Str(chars) => {
                f.write_str("'")?;
                for c in chars.iter() {
                    match c {
                        '\'' => f.write_str("\\'")?,
                        '\\' => f.write_str("\\\\")?,
                        c => write!(f, "{c}")?,
                    }
                }
                f.write_str("'")
            }
            Object::Bytes(bytes) => write!(f, "b{:?}", String::from_utf8_lossy(bytes)),
            Object::List(items) => write_seq(f, "[", items, "]"),
            Object::Tuple(items) if items.len() == 1 => write!(f, "({},)", items[0]),
            Object::Tuple(items) => write_seq(f, "(", items, ")"),
            Object::Dict(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Object::Set(members) if members.is_empty() => f.write_str("set()"),
            Object::Set(members) => write_seq(f, "{", members, "}"),
            Object::Instance { class } => write!(f, "<{class} object>"),
        }
    }
}

impl fmt::Debug for Obj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// Convenience From implementations

impl From<i64> for Obj {
    fn from(n: i64) -> Self {
        Self::int(n)
    }
}

impl From<i32> for Obj {
    fn from(n: i32) -> Self {
        Self::int(i64::from(n))
    }
}

impl From<f64> for Obj {
    fn from(n: f64) -> Self {
        Self::float(n)
    }
}

impl From<&str> for Obj {
    fn from(s: &str) -> Self {
        Self::str(s)
    }
}

impl<T: Into<Obj>> From<Vec<T>> for Obj {
    fn from(items: Vec<T>) -> Self {
        Self::list(items.into_iter().map(Into::into).collect())
    }
}
