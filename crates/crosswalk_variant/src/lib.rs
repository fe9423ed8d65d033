//! Toolkit variant adapter for Crosswalk.
//!
//! This crate provides:
//! - [`Variant`] - Tagged toolkit value
//! - [`VariantList`], [`VariantMap`] - Persistent collections held by variants
//! - [`VariantConverter`] - The [`ValueConverter`](crosswalk_foundation::ValueConverter)
//!   for this runtime

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod converter;
pub mod variant;

pub use collections::{VariantList, VariantMap};
pub use converter::{VariantConverter, VariantDictBuilder, VariantListBuilder};
pub use variant::Variant;
