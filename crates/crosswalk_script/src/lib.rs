//! Reference-counted scripting object model adapter for Crosswalk.
//!
//! This crate provides:
//! - [`Obj`] - Shared handle to a scripting object
//! - [`ScriptRuntime`] - Owner of the `None`/`True`/`False` singletons
//! - [`ScriptConverter`] - The [`ValueConverter`](crosswalk_foundation::ValueConverter)
//!   for this runtime

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod converter;
pub mod object;
pub mod runtime;

pub use converter::{ScriptConverter, ScriptDictBuilder, ScriptListBuilder};
pub use object::{Obj, Object};
pub use runtime::ScriptRuntime;
