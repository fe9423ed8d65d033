//! Type tags, converter traits, diagnostics, and errors for Crosswalk.
//!
//! This crate provides:
//! - [`TypeTag`] - The closed classification driving every conversion
//! - [`ValueConverter`] - The per-runtime conversion interface
//! - [`ListBuilder`], [`DictBuilder`], [`ListIterator`], [`DictIterator`] -
//!   Collection construction and traversal
//! - [`StringBuffer`] - Single-slot cache for transcoded strings
//! - [`Diagnostics`] - Bounded log of degraded conversions
//! - [`Error`] - Errors for checked conversions

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod buffer;
pub mod collections;
pub mod converter;
pub mod diagnostic;
pub mod error;
pub mod numeric;
pub mod tag;

pub use buffer::StringBuffer;
pub use collections::{DictBuilder, DictIterator, IndexedIter, ListBuilder, ListIterator};
pub use converter::ValueConverter;
pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
pub use error::{ConversionLimit, Error, ErrorKind, PathSegment, ValuePath};
pub use numeric::{IntegerNarrowing, Narrowed};
pub use tag::TypeTag;

/// Result type for Crosswalk operations.
pub type Result<T> = std::result::Result<T, Error>;
