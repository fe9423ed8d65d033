//! [`ValueConverter`] for the scripting runtime.

use std::borrow::Cow;

use crosswalk_foundation::{
    DictBuilder, DictIterator, Diagnostics, IndexedIter, ListBuilder, ListIterator, StringBuffer,
    TypeTag, ValueConverter,
};

use crate::object::{Obj, Object, insert_entry};
use crate::runtime::ScriptRuntime;

/// Converts between [`Obj`] handles and the common type taxonomy.
///
/// Text is stored as code points, so reading a `str` transcodes it into the
/// converter's [`StringBuffer`]. The view returned by `as_string` borrows the
/// converter, so it cannot outlive the next extraction:
///
/// ```compile_fail
/// use crosswalk_foundation::ValueConverter;
/// use crosswalk_script::{Obj, ScriptConverter, ScriptRuntime};
///
/// let runtime = ScriptRuntime::new();
/// let mut converter = ScriptConverter::new(&runtime);
/// let (a, b) = (Obj::str("a"), Obj::str("b"));
/// let first = converter.as_string(&a);
/// let second = converter.as_string(&b);
/// assert_eq!(first, "a");
/// ```
///
/// Copy the text out if it has to live longer:
///
/// ```
/// use crosswalk_foundation::ValueConverter;
/// use crosswalk_script::{Obj, ScriptConverter, ScriptRuntime};
///
/// let runtime = ScriptRuntime::new();
/// let mut converter = ScriptConverter::new(&runtime);
/// let (a, b) = (Obj::str("a"), Obj::str("b"));
/// let first = converter.as_string(&a).to_owned();
/// let second = converter.as_string(&b);
/// assert_eq!((first.as_str(), second), ("a", "b"));
/// ```
#[derive(Debug)]
pub struct ScriptConverter {
    runtime: ScriptRuntime,
    buffer: StringBuffer,
    diagnostics: Diagnostics,
}

impl ScriptConverter {
    /// Creates a converter producing values for `runtime`.
    #[must_use]
    pub fn new(runtime: &ScriptRuntime) -> Self {
        Self {
            runtime: runtime.clone(),
            buffer: StringBuffer::new(),
            diagnostics: Diagnostics::default(),
        }
    }

    /// Sets how many diagnostics are retained.
    #[must_use]
    pub fn with_diagnostics_capacity(mut self, capacity: usize) -> Self {
        self.diagnostics = Diagnostics::new(capacity);
        self
    }

    /// The runtime this converter allocates in.
    #[must_use]
    pub fn runtime(&self) -> &ScriptRuntime {
        &self.runtime
    }

    /// The transient string buffer.
    #[must_use]
    pub fn string_buffer(&self) -> &StringBuffer {
        &self.buffer
    }
}

impl ValueConverter for ScriptConverter {
    type Value = Obj;
    type ListBuilder = ScriptListBuilder;
    type DictBuilder = ScriptDictBuilder;

    const RUNTIME: &'static str = "script";

    fn classify(&mut self, value: &Obj) -> TypeTag {
        if value.is_bool() {
            TypeTag::Boolean
        } else if value.is_int() {
            TypeTag::Integer
        } else if value.is_float() {
            TypeTag::Floating
        } else if value.is_str() || value.is_bytes() {
            TypeTag::String
        } else if value.is_list() || value.is_tuple() {
            TypeTag::List
        } else if value.is_dict() {
            TypeTag::Dict
        } else if value.is_none() {
            TypeTag::None
        } else {
            self.diagnostics
                .unclassifiable(Self::RUNTIME, value.type_name(), value.to_string())
        }
    }

    fn as_integer(&self, value: &Obj) -> i64 {
        value.as_int().unwrap_or(0)
    }

    fn as_floating(&self, value: &Obj) -> f64 {
        value.as_float().unwrap_or(0.0)
    }

    fn as_boolean(&self, value: &Obj) -> bool {
        value.as_bool().unwrap_or(false)
    }

    fn as_string<'a>(&'a mut self, value: &'a Obj) -> &'a str {
        match value.object() {
            Object::Str(chars) => self.buffer.fill(|out| out.extend(chars.iter())),
            Object::Bytes(bytes) => self.buffer.hold(String::from_utf8_lossy(bytes)),
            _ => "",
        }
    }

    fn new_integer(&mut self, value: i64) -> Obj {
        Obj::int(value)
    }

    fn new_floating(&mut self, value: f64) -> Obj {
        Obj::float(value)
    }

    fn new_boolean(&mut self, value: bool) -> Obj {
        self.runtime.bool(value)
    }

    fn new_string(&mut self, value: &str) -> Obj {
        Obj::str(value)
    }

    fn new_none(&mut self) -> Obj {
        self.runtime.none()
    }

    fn list_iter<'a>(&self, value: &'a Obj) -> Box<dyn ListIterator<'a, Obj> + 'a> {
        let items = value.items().unwrap_or(&[]);
        Box::new(IndexedIter::new(items.iter().map(Cow::Borrowed), items.len()))
    }

    fn dict_iter<'a>(&self, value: &'a Obj) -> Box<dyn DictIterator<'a, Obj> + 'a> {
        let entries = value.entries().unwrap_or(&[]);
        Box::new(
            entries
                .iter()
                .map(|(key, value)| (Cow::Borrowed(key), Cow::Borrowed(value))),
        )
    }

    fn new_list_builder(&mut self) -> ScriptListBuilder {
        ScriptListBuilder::default()
    }

    fn new_dict_builder(&mut self) -> ScriptDictBuilder {
        ScriptDictBuilder::default()
    }

    fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }
}

// =============================================================================
// Builders
// =============================================================================

/// Builds a `list` object.
#[derive(Debug, Default)]
pub struct ScriptListBuilder {
    items: Vec<Obj>,
}

impl ListBuilder<Obj> for ScriptListBuilder {
    fn append(&mut self, value: Obj) {
        self.items.push(value);
    }

    fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    fn finish(self) -> Obj {
        Obj::list(self.items)
    }
}

/// Builds a `dict` object. Setting an existing key replaces its value.
#[derive(Debug, Default)]
pub struct ScriptDictBuilder {
    entries: Vec<(Obj, Obj)>,
}

impl DictBuilder<Obj> for ScriptDictBuilder {
    fn set(&mut self, key: Obj, value: Obj) -> Option<Obj> {
        insert_entry(&mut self.entries, key, value)
    }

    fn finish(self) -> Obj {
        Obj::new(Object::Dict(self.entries))
    }
}
