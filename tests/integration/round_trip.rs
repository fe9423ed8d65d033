//! Round trips between runtime pairs
//!
//! Converting A to B and back must reconstruct an equal value.

use crosswalk_engine::convert;
use crosswalk_json::JsonConverter;
use crosswalk_script::{Obj, ScriptConverter, ScriptRuntime};
use crosswalk_variant::{Variant, VariantConverter};
use serde_json::{Value, json};

fn document() -> Value {
    json!({
        "name": "crosswalk",
        "version": [0, 1, 0],
        "stable": false,
        "ratio": 0.75,
        "big": 1_099_511_627_776_i64,
        "nothing": null,
        "nested": {"deeper": {"deepest": ["a", "b"]}}
    })
}

#[test]
fn json_script_json() {
    let runtime = ScriptRuntime::new();
    let mut json = JsonConverter::new();
    let mut script = ScriptConverter::new(&runtime);

    let doc = document();
    let obj = convert(&doc, &mut json, &mut script);
    let back = convert(&obj, &mut script, &mut json);

    assert_eq!(back, doc);
}

#[test]
fn json_variant_json() {
    let mut json = JsonConverter::new();
    let mut variant = VariantConverter::new();

    let doc = document();
    let v = convert(&doc, &mut json, &mut variant);
    let back = convert(&v, &mut variant, &mut json);

    assert_eq!(back, doc);
    let big = v.as_map().and_then(|m| m.get("big")).cloned();
    assert_eq!(big, Some(Variant::LongLong(1 << 40)));
}

#[test]
fn script_variant_script() {
    let runtime = ScriptRuntime::new();
    let mut script = ScriptConverter::new(&runtime);
    let mut variant = VariantConverter::new();

    let original = Obj::dict(vec![
        (Obj::str("list"), Obj::list(vec![Obj::int(1), Obj::float(2.5)])),
        (Obj::str("flag"), runtime.bool(true)),
        (Obj::str("none"), runtime.none()),
    ]);
    let v = convert(&original, &mut script, &mut variant);
    let back = convert(&v, &mut variant, &mut script);

    assert_eq!(back, original);
}

#[test]
fn scalar_round_trips() {
    let runtime = ScriptRuntime::new();
    let mut script = ScriptConverter::new(&runtime);
    let mut variant = VariantConverter::new();

    for original in [
        Obj::int(i64::MAX),
        Obj::int(i64::MIN),
        Obj::float(-0.0),
        Obj::str(""),
        runtime.bool(false),
        runtime.none(),
    ] {
        let v = convert(&original, &mut script, &mut variant);
        let back = convert(&v, &mut variant, &mut script);
        assert_eq!(back, original, "via {v:?}");
    }
}
