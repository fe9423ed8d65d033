//! Interpreter-wide singletons.

use crate::object::{Obj, Object};

/// Shared state of one scripting runtime instance.
///
/// Holds the `None`, `True` and `False` singletons. Constructors return new
/// references to them, so identity comparisons behave as in the scripting
/// language.
#[derive(Clone, Debug)]
pub struct ScriptRuntime {
    none: Obj,
    true_: Obj,
    false_: Obj,
}

impl ScriptRuntime {
    /// Creates a runtime with fresh singletons.
    #[must_use]
    pub fn new() -> Self {
        Self {
            none: Obj::new(Object::None),
            true_: Obj::new(Object::Bool(true)),
            false_: Obj::new(Object::Bool(false)),
        }
    }

    /// A new reference to `None`.
    #[must_use]
    pub fn none(&self) -> Obj {
        self.none.clone()
    }

    /// A new reference to `True` or `False`.
    #[must_use]
    pub fn bool(&self, value: bool) -> Obj {
        if value {
            self.true_.clone()
        } else {
            self.false_.clone()
        }
    }
}

impl Default for ScriptRuntime {
    fn default() -> Self {
        Self::new()
    }
}
