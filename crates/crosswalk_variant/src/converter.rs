//! [`ValueConverter`] for toolkit variants.

use std::borrow::Cow;

use crosswalk_foundation::{
    DiagnosticKind, Diagnostics, DictBuilder, DictIterator, IndexedIter, IntegerNarrowing,
    ListBuilder, ListIterator, Narrowed, StringBuffer, TypeTag, ValueConverter,
};

use crate::collections::{VariantList, VariantMap};
use crate::variant::Variant;

/// Converts between [`Variant`] values and the common type taxonomy.
///
/// The toolkit's native integer is 32 bits wide. How 64-bit integers are
/// stored is controlled by [`IntegerNarrowing`]; the default keeps every
/// value exact by falling back to `LongLong`.
#[derive(Debug, Default)]
pub struct VariantConverter {
    narrowing: IntegerNarrowing,
    buffer: StringBuffer,
    diagnostics: Diagnostics,
}

impl VariantConverter {
    /// Creates a converter with the default narrowing policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the integer narrowing policy.
    #[must_use]
    pub const fn with_narrowing(mut self, narrowing: IntegerNarrowing) -> Self {
        self.narrowing = narrowing;
        self
    }

    /// Sets how many diagnostics are retained.
    #[must_use]
    pub fn with_diagnostics_capacity(mut self, capacity: usize) -> Self {
        self.diagnostics = Diagnostics::new(capacity);
        self
    }

    /// The active narrowing policy.
    #[must_use]
    pub const fn narrowing(&self) -> IntegerNarrowing {
        self.narrowing
    }

    /// The transient string buffer.
    #[must_use]
    pub const fn string_buffer(&self) -> &StringBuffer {
        &self.buffer
    }
}

impl ValueConverter for VariantConverter {
    type Value = Variant;
    type ListBuilder = VariantListBuilder;
    type DictBuilder = VariantDictBuilder;

    const RUNTIME: &'static str = "variant";

    fn classify(&mut self, value: &Variant) -> TypeTag {
        match value {
            Variant::Bool(_) => TypeTag::Boolean,
            Variant::Int(_) | Variant::UInt(_) | Variant::LongLong(_) | Variant::ULongLong(_) => {
                TypeTag::Integer
            }
            Variant::Float(_) | Variant::Double(_) => TypeTag::Floating,
            Variant::String(_) | Variant::ByteArray(_) => TypeTag::String,
            Variant::List(_) | Variant::StringList(_) => TypeTag::List,
            Variant::Map(_) => TypeTag::Dict,
            Variant::Invalid => TypeTag::None,
            Variant::Url(_) | Variant::Point(..) | Variant::Color(_) => self
                .diagnostics
                .unclassifiable(Self::RUNTIME, value.type_name(), value.to_string()),
        }
    }

    fn as_integer(&self, value: &Variant) -> i64 {
        value.to_i64().unwrap_or(0)
    }

    fn as_floating(&self, value: &Variant) -> f64 {
        value.to_f64().unwrap_or(0.0)
    }

    fn as_boolean(&self, value: &Variant) -> bool {
        matches!(value, Variant::Bool(true))
    }

    fn as_string<'a>(&'a mut self, value: &'a Variant) -> &'a str {
        match value {
            Variant::String(text) => text,
            Variant::ByteArray(bytes) => self.buffer.hold(String::from_utf8_lossy(bytes)),
            _ => "",
        }
    }

    fn new_integer(&mut self, value: i64) -> Variant {
        match self.narrowing.apply(value) {
            Narrowed::Narrow(n) => Variant::Int(n),
            Narrowed::Wide(n) => Variant::LongLong(n),
            Narrowed::Clamped { stored, original } => {
                self.diagnostics.record(
                    Self::RUNTIME,
                    DiagnosticKind::IntegerSaturated {
                        value: original,
                        stored: i64::from(stored),
                    },
                );
                Variant::Int(stored)
            }
        }
    }

    fn new_floating(&mut self, value: f64) -> Variant {
        Variant::Double(value)
    }

    fn new_boolean(&mut self, value: bool) -> Variant {
        Variant::Bool(value)
    }

    fn new_string(&mut self, value: &str) -> Variant {
        Variant::String(value.to_owned())
    }

    fn new_none(&mut self) -> Variant {
        Variant::Invalid
    }

    fn list_iter<'a>(&self, value: &'a Variant) -> Box<dyn ListIterator<'a, Variant> + 'a> {
        match value {
            Variant::List(items) => Box::new(IndexedIter::new(
                items.iter().map(Cow::Borrowed),
                items.len(),
            )),
            Variant::StringList(items) => Box::new(IndexedIter::new(
                items
                    .iter()
                    .map(|item| Cow::Owned(Variant::String(item.clone()))),
                items.len(),
            )),
            _ => Box::new(IndexedIter::new(
                std::iter::empty::<Cow<'a, Variant>>(),
                0,
            )),
        }
    }

    fn dict_iter<'a>(&self, value: &'a Variant) -> Box<dyn DictIterator<'a, Variant> + 'a> {
        match value {
            Variant::Map(map) => Box::new(map.iter().map(|(key, value)| {
                (Cow::Owned(Variant::String(key.clone())), Cow::Borrowed(value))
            })),
            _ => Box::new(std::iter::empty()),
        }
    }

    fn new_list_builder(&mut self) -> VariantListBuilder {
        VariantListBuilder::default()
    }

    fn new_dict_builder(&mut self) -> VariantDictBuilder {
        VariantDictBuilder::default()
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

/// Builds a `List` variant.
#[derive(Debug, Default)]
pub struct VariantListBuilder {
    items: VariantList,
}

impl ListBuilder<Variant> for VariantListBuilder {
    fn append(&mut self, value: Variant) {
        self.items.push(value);
    }

    fn finish(self) -> Variant {
        Variant::List(self.items)
    }
}

/// Builds a `Map` variant.
///
/// Map keys are strings; any other key is replaced by its string form.
#[derive(Debug, Default)]
pub struct VariantDictBuilder {
    map: VariantMap,
}

impl DictBuilder<Variant> for VariantDictBuilder {
    fn set(&mut self, key: Variant, value: Variant) -> Option<Variant> {
        let key = match key {
            Variant::String(key) => key,
            other => {
                let coerced = other.to_key_string();
                tracing::debug!(
                    from = other.type_name(),
                    key = %coerced,
                    "coerced map key to string"
                );
                coerced
            }
        };
        self.map.set(key, value)
    }

    fn finish(self) -> Variant {
        Variant::Map(self.map)
    }
}
