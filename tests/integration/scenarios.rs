//! End-to-end conversion scenarios
//!
//! Each test feeds a documented input through the driver and checks the
//! shape and tags of the result.

use crosswalk_engine::convert;
use crosswalk_foundation::{DiagnosticKind, TypeTag, ValueConverter};
use crosswalk_json::JsonConverter;
use crosswalk_script::{Obj, ScriptConverter, ScriptRuntime};
use crosswalk_variant::{Variant, VariantConverter};
use serde_json::json;

#[test]
fn mixed_scalar_list() {
    let runtime = ScriptRuntime::new();
    let mut json = JsonConverter::new();
    let mut script = ScriptConverter::new(&runtime);

    let out = convert(&json!([true, 3, 2.5, "x", null]), &mut json, &mut script);

    let items = out.items().unwrap();
    assert_eq!(items.len(), 5);
    let tags: Vec<TypeTag> = items.iter().map(|v| script.classify(v)).collect();
    assert_eq!(
        tags,
        vec![
            TypeTag::Boolean,
            TypeTag::Integer,
            TypeTag::Floating,
            TypeTag::String,
            TypeTag::None,
        ]
    );
    assert_eq!(out.to_string(), "[True, 3, 2.5, 'x', None]");
}

#[test]
fn nested_map() {
    let runtime = ScriptRuntime::new();
    let mut json = JsonConverter::new();
    let mut script = ScriptConverter::new(&runtime);

    let out = convert(&json!({"a": 1, "b": [1, 2]}), &mut json, &mut script);

    assert_eq!(out.len(), Some(2));
    assert_eq!(out.get_str("a"), Some(&Obj::int(1)));
    assert_eq!(
        out.get_str("b"),
        Some(&Obj::list(vec![Obj::int(1), Obj::int(2)]))
    );
}

#[test]
fn empty_collections_are_not_null() {
    let runtime = ScriptRuntime::new();
    let mut json = JsonConverter::new();
    let mut script = ScriptConverter::new(&runtime);
    let mut variant = VariantConverter::new();

    let list = convert(&json!([]), &mut json, &mut script);
    let dict = convert(&json!({}), &mut json, &mut script);
    assert_eq!(script.classify(&list), TypeTag::List);
    assert_eq!(list.len(), Some(0));
    assert_eq!(script.classify(&dict), TypeTag::Dict);
    assert_eq!(dict.len(), Some(0));

    let list = convert(&json!([]), &mut json, &mut variant);
    let dict = convert(&json!({}), &mut json, &mut variant);
    assert_eq!(list, Variant::List(Default::default()));
    assert_eq!(dict, Variant::Map(Default::default()));
}

#[test]
fn unclassifiable_value_yields_null_and_one_diagnostic() {
    let runtime = ScriptRuntime::new();
    let mut script = ScriptConverter::new(&runtime);
    let mut json = JsonConverter::new();

    let out = convert(&Obj::instance("Socket"), &mut script, &mut json);

    assert!(out.is_null());
    assert_eq!(script.diagnostics().len(), 1);
    assert!(matches!(
        &script.diagnostics().latest().unwrap().kind,
        DiagnosticKind::Unclassifiable { type_name, .. } if type_name == "Socket"
    ));
    assert!(json.diagnostics().is_empty());
}

#[test]
fn unclassifiable_inside_collections() {
    let mut variant = VariantConverter::new();
    let runtime = ScriptRuntime::new();
    let mut script = ScriptConverter::new(&runtime);

    let map = [
        ("where", Variant::Point(1.0, 2.0)),
        ("name", Variant::from("p")),
    ]
    .into_iter()
    .collect();
    let out = convert(&Variant::Map(map), &mut variant, &mut script);

    assert_eq!(out.to_string(), "{'name': 'p', 'where': None}");
    assert_eq!(variant.diagnostics().len(), 1);
}

#[test]
fn string_buffer_is_invalidated_by_the_next_extraction() {
    let runtime = ScriptRuntime::new();
    let mut script = ScriptConverter::new(&runtime);
    let (a, b) = (Obj::str("one"), Obj::str("two"));

    let first = script.as_string(&a).to_owned();
    let after_first = script.string_buffer().generation();
    let second = script.as_string(&b).to_owned();

    assert_eq!((first.as_str(), second.as_str()), ("one", "two"));
    assert_eq!(script.string_buffer().generation(), after_first + 1);
    assert_eq!(script.string_buffer().current(), Some("two"));
}
