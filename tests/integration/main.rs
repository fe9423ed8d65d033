//! Integration tests across all layers
//!
//! End-to-end conversions between every runtime pair, ownership accounting,
//! and property tests over generated documents.

mod round_trip;
mod scenarios;
