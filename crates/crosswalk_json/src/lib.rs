//! `serde_json` adapter for Crosswalk.
//!
//! This crate provides:
//! - [`JsonConverter`] - The [`ValueConverter`](crosswalk_foundation::ValueConverter)
//!   for [`serde_json::Value`]
//! - [`JsonListBuilder`], [`JsonDictBuilder`] - Array and object builders

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod converter;

pub use converter::{JsonConverter, JsonDictBuilder, JsonListBuilder};
