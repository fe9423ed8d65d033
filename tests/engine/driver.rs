//! Integration tests for the plain conversion driver
//!
//! Tests dispatch on every tag and structural preservation across runtimes.

use crosswalk_engine::convert;
use crosswalk_foundation::{TypeTag, ValueConverter};
use crosswalk_json::JsonConverter;
use crosswalk_script::{Obj, ScriptConverter, ScriptRuntime};
use crosswalk_variant::{Variant, VariantConverter, VariantMap};
use serde_json::json;

// =============================================================================
// Scalars
// =============================================================================

#[test]
fn scalars_json_to_variant() {
    let mut json = JsonConverter::new();
    let mut variant = VariantConverter::new();

    assert_eq!(convert(&json!(true), &mut json, &mut variant), Variant::Bool(true));
    assert_eq!(convert(&json!(-7), &mut json, &mut variant), Variant::Int(-7));
    assert_eq!(convert(&json!(0.25), &mut json, &mut variant), Variant::Double(0.25));
    assert_eq!(convert(&json!("s"), &mut json, &mut variant), Variant::from("s"));
    assert_eq!(convert(&json!(null), &mut json, &mut variant), Variant::Invalid);
}

#[test]
fn integers_are_64_bit_end_to_end() {
    let runtime = ScriptRuntime::new();
    let mut script = ScriptConverter::new(&runtime);
    let mut json = JsonConverter::new();

    let big = Obj::int(i64::MIN);
    assert_eq!(convert(&big, &mut script, &mut json), json!(i64::MIN));
}

#[test]
fn script_bools_stay_booleans() {
    let runtime = ScriptRuntime::new();
    let mut script = ScriptConverter::new(&runtime);
    let mut json = JsonConverter::new();

    let value = Obj::list(vec![runtime.bool(true), Obj::int(1)]);
    assert_eq!(convert(&value, &mut script, &mut json), json!([true, 1]));
}

#[test]
fn bytes_convert_as_strings() {
    let runtime = ScriptRuntime::new();
    let mut script = ScriptConverter::new(&runtime);
    let mut variant = VariantConverter::new();

    let value = Obj::bytes(b"raw");
    assert_eq!(convert(&value, &mut script, &mut variant), Variant::from("raw"));
}

// =============================================================================
// Collections
// =============================================================================

#[test]
fn nested_collections() {
    let mut json = JsonConverter::new();
    let mut variant = VariantConverter::new();

    let out = convert(&json!({"a": 1, "b": [1, 2]}), &mut json, &mut variant);

    let expected: VariantMap = [
        ("a", Variant::Int(1)),
        ("b", vec![Variant::Int(1), Variant::Int(2)].into()),
    ]
    .into_iter()
    .collect();
    assert_eq!(out, Variant::Map(expected));
}

#[test]
fn tuples_become_lists() {
    let runtime = ScriptRuntime::new();
    let mut script = ScriptConverter::new(&runtime);
    let mut json = JsonConverter::new();

    let value = Obj::tuple(vec![Obj::int(1), Obj::str("a")]);
    assert_eq!(convert(&value, &mut script, &mut json), json!([1, "a"]));
}

#[test]
fn string_lists_become_lists() {
    let mut variant = VariantConverter::new();
    let mut json = JsonConverter::new();

    let value = Variant::StringList(vec!["x".to_string(), "y".to_string()]);
    assert_eq!(convert(&value, &mut variant, &mut json), json!(["x", "y"]));
}

#[test]
fn non_string_keys_are_coerced_by_string_keyed_targets() {
    let runtime = ScriptRuntime::new();
    let mut script = ScriptConverter::new(&runtime);
    let mut json = JsonConverter::new();

    let value = Obj::dict(vec![(Obj::int(1), Obj::str("one")), (Obj::str("k"), Obj::int(2))]);
    assert_eq!(
        convert(&value, &mut script, &mut json),
        json!({"1": "one", "k": 2})
    );
}

#[test]
fn target_tags_match_source_tags() {
    let runtime = ScriptRuntime::new();
    let mut json = JsonConverter::new();
    let mut script = ScriptConverter::new(&runtime);
    let doc = json!([false, 10, 1.5, "t", [], {}, null]);

    let out = convert(&doc, &mut json, &mut script);

    let source_tags: Vec<TypeTag> = doc
        .as_array()
        .unwrap()
        .iter()
        .map(|v| json.classify(v))
        .collect();
    let target_tags: Vec<TypeTag> = out
        .items()
        .unwrap()
        .iter()
        .map(|v| script.classify(v))
        .collect();
    assert_eq!(source_tags, target_tags);
}
