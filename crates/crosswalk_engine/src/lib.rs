//! Conversion engine for Crosswalk.
//!
//! This crate provides:
//! - [`convert`] - Recursive conversion between any two runtimes
//! - [`Driver`] - Checked conversion with limits, strict mode, and stats
//! - [`ConvertConfig`] - Limits for the checked driver
//! - [`ConvertStats`] - What a checked conversion visited

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod driver;
pub mod stats;

pub use config::ConvertConfig;
pub use driver::{Driver, convert};
pub use stats::ConvertStats;
