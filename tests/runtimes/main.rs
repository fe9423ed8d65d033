//! Integration tests for Layer 2: Runtime adapters
//!
//! Tests each runtime's converter against the extraction contract.

mod script;
