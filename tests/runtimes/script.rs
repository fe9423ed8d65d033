//! Integration tests for the scripting runtime converter
//!
//! Tests classification, string extraction, and builders.

use crosswalk_foundation::{DictBuilder, ListBuilder, TypeTag, ValueConverter};
use crosswalk_script::{Obj, ScriptConverter, ScriptRuntime};

fn setup() -> (ScriptRuntime, ScriptConverter) {
    let runtime = ScriptRuntime::new();
    let converter = ScriptConverter::new(&runtime);
    (runtime, converter)
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn classification_priority() {
    let (runtime, mut c) = setup();
    assert_eq!(c.classify(&runtime.bool(false)), TypeTag::Boolean);
    assert_eq!(c.classify(&Obj::int(0)), TypeTag::Integer);
    assert_eq!(c.classify(&runtime.none()), TypeTag::None);
}

#[test]
fn unclassifiable_leaves_one_diagnostic() {
    let (_runtime, mut c) = setup();
    let set = Obj::set(vec![Obj::int(1), Obj::int(2)]);
    assert_eq!(c.classify(&set), TypeTag::None);
    assert_eq!(c.diagnostics().len(), 1);
    assert_eq!(c.diagnostics().latest().unwrap().runtime, "script");
}

#[test]
fn diagnostics_capacity_is_configurable() {
    let runtime = ScriptRuntime::new();
    let mut c = ScriptConverter::new(&runtime).with_diagnostics_capacity(2);
    for _ in 0..5 {
        c.classify(&Obj::instance("X"));
    }
    assert_eq!(c.diagnostics().len(), 2);
    assert_eq!(c.diagnostics().total(), 5);
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn second_extraction_replaces_the_buffer() {
    let (_runtime, mut c) = setup();
    let (a, b) = (Obj::str("alpha"), Obj::str("beta"));

    let first = c.as_string(&a).to_owned();
    let generation = c.string_buffer().generation();
    let second = c.as_string(&b).to_owned();

    assert_eq!(first, "alpha");
    assert_eq!(second, "beta");
    assert_eq!(c.string_buffer().generation(), generation + 1);
    assert_eq!(c.string_buffer().current(), Some("beta"));
}

#[test]
fn non_ascii_text() {
    let (_runtime, mut c) = setup();
    let s = Obj::str("日本語 ✓");
    assert_eq!(c.as_string(&s), "日本語 ✓");
}

// =============================================================================
// Builders
// =============================================================================

#[test]
fn list_builder_preserves_order() {
    let (_runtime, mut c) = setup();
    let mut builder = c.new_list_builder();
    for n in [3, 1, 2] {
        let item = c.new_integer(n);
        builder.append(item);
    }
    assert_eq!(builder.finish().to_string(), "[3, 1, 2]");
}

#[test]
fn dict_builder_accepts_any_key() {
    let (_runtime, mut c) = setup();
    let mut builder = c.new_dict_builder();
    let key = c.new_integer(1);
    let value = c.new_string("one");
    builder.set(key, value);
    let dict = builder.finish();
    assert_eq!(dict.to_string(), "{1: 'one'}");
}
