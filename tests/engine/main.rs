//! Integration tests for Layer 1: Engine
//!
//! Tests for the recursive conversion driver, checked conversion, and
//! conversion configuration.

mod config;
mod driver;
