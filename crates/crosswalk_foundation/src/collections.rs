//! Builder and iterator abstractions over native collections.
//!
//! Iterators yield `Cow` items so a runtime can lend out values it stores
//! directly and produce owned values for entries it stores in another form
//! (map keys kept as plain strings, for example).

use std::borrow::Cow;

// =============================================================================
// Builders
// =============================================================================

/// Accumulates values into a new native list.
pub trait ListBuilder<V> {
    /// Moves `value` into the list.
    fn append(&mut self, value: V);

    /// Hints that `additional` more values are coming.
    fn reserve(&mut self, additional: usize) {
        let _ = additional;
    }

    /// Returns the finished list.
    fn finish(self) -> V;
}

/// Accumulates entries into a new native map.
pub trait DictBuilder<V> {
    /// Moves `key` and `value` into the map.
    ///
    /// Setting a key that is already present replaces its value, and the
    /// replaced value is returned. For string-keyed maps "present" means
    /// equal after key coercion.
    fn set(&mut self, key: V, value: V) -> Option<V>;

    /// Returns the finished map.
    fn finish(self) -> V;
}

// =============================================================================
// Iterators
// =============================================================================

/// Positional iteration over a native list.
///
/// Indices start at 0 and end at [`ListIterator::len`].
pub trait ListIterator<'a, V>: Iterator<Item = (usize, Cow<'a, V>)>
where
    V: Clone + 'a,
{
    /// Total number of elements, independent of how many were consumed.
    fn len(&self) -> usize;

    /// Returns true if the list has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Key-value iteration over a native map, in the runtime's own order.
pub trait DictIterator<'a, V>: Iterator<Item = (Cow<'a, V>, Cow<'a, V>)>
where
    V: Clone + 'a,
{
}

impl<'a, V, I> DictIterator<'a, V> for I
where
    V: Clone + 'a,
    I: Iterator<Item = (Cow<'a, V>, Cow<'a, V>)>,
{
}

/// [`ListIterator`] over any iterator of list items with a known length.
#[derive(Clone, Debug)]
pub struct IndexedIter<I> {
    items: I,
    position: usize,
    len: usize,
}

impl<I> IndexedIter<I> {
    /// Wraps `items`, which must yield exactly `len` values.
    pub const fn new(items: I, len: usize) -> Self {
        Self {
            items,
            position: 0,
            len,
        }
    }

    /// Index of the next element.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl<'a, V, I> Iterator for IndexedIter<I>
where
    V: Clone + 'a,
    I: Iterator<Item = Cow<'a, V>>,
{
    type Item = (usize, Cow<'a, V>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.len {
            return None;
        }
        let item = self.items.next()?;
        let index = self.position;
        self.position += 1;
        Some((index, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.position;
        (remaining, Some(remaining))
    }
}

impl<'a, V, I> ListIterator<'a, V> for IndexedIter<I>
where
    V: Clone + 'a,
    I: Iterator<Item = Cow<'a, V>>,
{
    fn len(&self) -> usize {
        self.len
    }
}
