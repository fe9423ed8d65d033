//! Single-slot buffer for re-encoded strings.
//!
//! A converter whose runtime does not store text as flat UTF-8 transcodes
//! into its [`StringBuffer`] and hands out a view of the result. The view
//! borrows the converter mutably, so it must be dropped before the next
//! extraction can happen. The slot keeps its allocation between fills.

use std::borrow::Cow;

/// Converter-owned cache holding the most recently transcoded string.
#[derive(Clone, Debug, Default)]
pub struct StringBuffer {
    /// The slot. `None` until the first fill and after `release`.
    slot: Option<String>,
    /// Number of fills so far.
    generation: u64,
}

impl StringBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: None,
            generation: 0,
        }
    }

    /// Replaces the buffered string with whatever `write` appends to it.
    ///
    /// The previous contents are cleared first. The allocation is reused.
    pub fn fill<F>(&mut self, write: F) -> &str
    where
        F: FnOnce(&mut String),
    {
        self.generation += 1;
        let slot = self.slot.get_or_insert_with(String::new);
        slot.clear();
        write(slot);
        slot.as_str()
    }

    /// Stores `text` if it is owned, or passes a borrowed view through.
    ///
    /// Borrowed text never touches the slot.
    pub fn hold<'a>(&'a mut self, text: Cow<'a, str>) -> &'a str {
        match text {
            Cow::Borrowed(text) => text,
            Cow::Owned(text) => {
                self.generation += 1;
                self.slot.insert(text).as_str()
            }
        }
    }

    /// Returns the buffered string, if any.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    /// Number of times the slot has been overwritten.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns true if nothing is buffered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Frees the buffered string and its allocation.
    pub fn release(&mut self) {
        self.slot = None;
    }
}
