//! Crosswalk - Value conversion between dynamic runtimes
//!
//! This crate re-exports all layers of the Crosswalk system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: crosswalk_script     - Reference-counted scripting objects
//!          crosswalk_variant    - Toolkit variants
//!          crosswalk_json       - serde_json documents
//! Layer 1: crosswalk_engine     - Recursive driver, checked driver, config
//! Layer 0: crosswalk_foundation - TypeTag, converter traits, diagnostics, Error
//! ```
//!
//! # Example
//!
//! ```
//! use crosswalk::engine::convert;
//! use crosswalk::json::JsonConverter;
//! use crosswalk::script::{ScriptConverter, ScriptRuntime};
//! use serde_json::json;
//!
//! let runtime = ScriptRuntime::new();
//! let mut json = JsonConverter::new();
//! let mut script = ScriptConverter::new(&runtime);
//!
//! let obj = convert(&json!({"a": 1, "b": [1, 2]}), &mut json, &mut script);
//! assert_eq!(obj.to_string(), "{'a': 1, 'b': [1, 2]}");
//! ```

pub use crosswalk_engine as engine;
pub use crosswalk_foundation as foundation;
pub use crosswalk_json as json;
pub use crosswalk_script as script;
pub use crosswalk_variant as variant;
