//! [`ValueConverter`] for JSON documents.

use std::borrow::Cow;

use crosswalk_foundation::{
    DiagnosticKind, Diagnostics, DictBuilder, DictIterator, IndexedIter, ListBuilder,
    ListIterator, TypeTag, ValueConverter,
};
use serde_json::{Map, Number, Value};

/// Converts between [`serde_json::Value`] and the common type taxonomy.
///
/// JSON text is already UTF-8, so string extraction never copies. Every JSON
/// value has a tag; the only diagnostic this converter records is
/// [`DiagnosticKind::NonFiniteFloat`], when asked to build a float JSON
/// cannot hold.
#[derive(Debug, Default)]
pub struct JsonConverter {
    diagnostics: Diagnostics,
}

impl JsonConverter {
    /// Creates a converter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many diagnostics are retained.
    #[must_use]
    pub fn with_diagnostics_capacity(mut self, capacity: usize) -> Self {
        self.diagnostics = Diagnostics::new(capacity);
        self
    }
}

impl ValueConverter for JsonConverter {
    type Value = Value;
    type ListBuilder = JsonListBuilder;
    type DictBuilder = JsonDictBuilder;

    const RUNTIME: &'static str = "json";

    fn classify(&mut self, value: &Value) -> TypeTag {
        match value {
            Value::Bool(_) => TypeTag::Boolean,
            Value::Number(n) if n.is_i64() => TypeTag::Integer,
            Value::Number(_) => TypeTag::Floating,
            Value::String(_) => TypeTag::String,
            Value::Array(_) => TypeTag::List,
            Value::Object(_) => TypeTag::Dict,
            Value::Null => TypeTag::None,
        }
    }

    fn as_integer(&self, value: &Value) -> i64 {
        value.as_i64().unwrap_or(0)
    }

    fn as_floating(&self, value: &Value) -> f64 {
        value.as_f64().unwrap_or(0.0)
    }

    fn as_boolean(&self, value: &Value) -> bool {
        value.as_bool().unwrap_or(false)
    }

    fn as_string<'a>(&'a mut self, value: &'a Value) -> &'a str {
        value.as_str().unwrap_or("")
    }

    fn new_integer(&mut self, value: i64) -> Value {
        Value::from(value)
    }

    fn new_floating(&mut self, value: f64) -> Value {
        if let Some(number) = Number::from_f64(value) {
            Value::Number(number)
        } else {
            self.diagnostics
                .record(Self::RUNTIME, DiagnosticKind::NonFiniteFloat { value });
            Value::Null
        }
    }

    fn new_boolean(&mut self, value: bool) -> Value {
        Value::Bool(value)
    }

    fn new_string(&mut self, value: &str) -> Value {
        Value::String(value.to_owned())
    }

    fn new_none(&mut self) -> Value {
        Value::Null
    }

    fn list_iter<'a>(&self, value: &'a Value) -> Box<dyn ListIterator<'a, Value> + 'a> {
        let items = value.as_array().map_or(&[][..], Vec::as_slice);
        Box::new(IndexedIter::new(items.iter().map(Cow::Borrowed), items.len()))
    }

    fn dict_iter<'a>(&self, value: &'a Value) -> Box<dyn DictIterator<'a, Value> + 'a> {
        match value {
            Value::Object(map) => Box::new(map.iter().map(|(key, value)| {
                (Cow::Owned(Value::String(key.clone())), Cow::Borrowed(value))
            })),
            _ => Box::new(std::iter::empty()),
        }
    }

    fn new_list_builder(&mut self) -> JsonListBuilder {
        JsonListBuilder::default()
    }

    fn new_dict_builder(&mut self) -> JsonDictBuilder {
        JsonDictBuilder::default()
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

/// Builds a JSON array.
#[derive(Debug, Default)]
pub struct JsonListBuilder {
    items: Vec<Value>,
}

impl ListBuilder<Value> for JsonListBuilder {
    fn append(&mut self, value: Value) {
        self.items.push(value);
    }

    fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    fn finish(self) -> Value {
        Value::Array(self.items)
    }
}

/// Builds a JSON object.
///
/// Object keys are strings. Any other key is rendered as compact JSON text,
/// so `1` becomes `"1"` and `[1,2]` becomes `"[1,2]"`.
#[derive(Debug, Default)]
pub struct JsonDictBuilder {
    map: Map<String, Value>,
}

impl DictBuilder<Value> for JsonDictBuilder {
    fn set(&mut self, key: Value, value: Value) -> Option<Value> {
        let key = match key {
            Value::String(key) => key,
            other => {
                let rendered = other.to_string();
                tracing::debug!(key = %rendered, "rendered non-string object key");
                rendered
            }
        };
        self.map.insert(key, value)
    }

    fn finish(self) -> Value {
        Value::Object(self.map)
    }
}
