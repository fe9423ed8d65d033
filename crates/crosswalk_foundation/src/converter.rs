//! The per-runtime conversion interface.

use crate::collections::{DictBuilder, DictIterator, ListBuilder, ListIterator};
use crate::diagnostic::Diagnostics;
use crate::tag::TypeTag;

/// Classification, extraction, and construction for one runtime's values.
///
/// The conversion driver is generic over two implementations of this trait
/// and never touches a runtime's values except through it. Adding a runtime
/// means implementing this trait; the driver stays as it is.
///
/// # Extraction contract
///
/// The `as_*` methods and the iterator factories are only meaningful after
/// [`ValueConverter::classify`] returned the matching tag. Implementations
/// return a neutral value (`0`, `false`, `""`, an empty iterator) when the
/// pairing is violated, so a misuse produces garbage rather than a panic.
///
/// # Ownership
///
/// Every `new_*` method returns a value owned by the caller. Builders take
/// ownership of what is appended to them, so a value built during a
/// conversion is either moved into exactly one collection or returned.
pub trait ValueConverter {
    /// Handle to a native value.
    type Value: Clone;
    /// Builder for native lists.
    type ListBuilder: ListBuilder<Self::Value>;
    /// Builder for native maps.
    type DictBuilder: DictBuilder<Self::Value>;

    /// Runtime name used in diagnostics and logs.
    const RUNTIME: &'static str;

    /// Classifies `value`.
    ///
    /// Predicates are tested in [`TypeTag::PRIORITY`] order. A value that
    /// matches none of them is recorded as a diagnostic and classified as
    /// [`TypeTag::None`]; that is the only side effect.
    fn classify(&mut self, value: &Self::Value) -> TypeTag;

    /// Reads an INTEGER value.
    fn as_integer(&self, value: &Self::Value) -> i64;

    /// Reads a FLOATING value.
    fn as_floating(&self, value: &Self::Value) -> f64;

    /// Reads a BOOLEAN value.
    fn as_boolean(&self, value: &Self::Value) -> bool;

    /// Reads a STRING value as UTF-8.
    ///
    /// Flat UTF-8 storage is returned directly. Anything else is transcoded
    /// into the converter's string buffer, so the returned view borrows the
    /// converter and is gone before the next extraction.
    fn as_string<'a>(&'a mut self, value: &'a Self::Value) -> &'a str;

    /// Creates an integer.
    fn new_integer(&mut self, value: i64) -> Self::Value;

    /// Creates a float.
    fn new_floating(&mut self, value: f64) -> Self::Value;

    /// Creates a boolean.
    fn new_boolean(&mut self, value: bool) -> Self::Value;

    /// Creates a string from UTF-8 text.
    fn new_string(&mut self, value: &str) -> Self::Value;

    /// Creates the runtime's null.
    fn new_none(&mut self) -> Self::Value;

    /// Iterates a LIST value.
    fn list_iter<'a>(&self, value: &'a Self::Value) -> Box<dyn ListIterator<'a, Self::Value> + 'a>;

    /// Iterates a DICT value.
    fn dict_iter<'a>(&self, value: &'a Self::Value) -> Box<dyn DictIterator<'a, Self::Value> + 'a>;

    /// Starts a new list.
    fn new_list_builder(&mut self) -> Self::ListBuilder;

    /// Starts a new map.
    fn new_dict_builder(&mut self) -> Self::DictBuilder;

    /// Diagnostics recorded by this converter.
    fn diagnostics(&self) -> &Diagnostics;

    /// Mutable access to the diagnostics, for degradations the driver
    /// detects on this converter's behalf.
    fn diagnostics_mut(&mut self) -> &mut Diagnostics;
}
