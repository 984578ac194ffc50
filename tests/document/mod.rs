// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg(test)]

use anyhow::Result;
use deepeq::document::{self, Decoder};
use deepeq::*;

fn decode_json(json: &str) -> Result<Value> {
    Ok(document::decode(&Value::from_json_str(json)?)?)
}

#[test]
fn sets_and_maps() -> Result<()> {
    let v = decode_json(r#"{"set!": [1, 2, 1, [3]]}"#)?;
    let set = v.as_set()?;
    assert_eq!(set.len(), 3);
    assert!(set.contains(&Value::from(2)));

    let v = decode_json(r##"{"map!": [{"key": {"set!": []}, "value": "#undefined"}]}"##)?;
    let (key, value) = v.as_map()?.first().unwrap();
    assert!(key.as_set()?.is_empty());
    assert!(value.is_undefined());
    Ok(())
}

#[test]
fn objects_with_hidden_properties_and_prototype() -> Result<()> {
    let v = decode_json(
        r#"{
            "object!": [
                {"key": "a", "value": 1},
                {"key": {"symbol!": "s"}, "value": 2},
                {"key": "h", "value": 3, "enumerable": false}
            ],
            "prototype!": {"p": 4}
        }"#,
    )?;
    let o = v.as_object()?;
    assert_eq!(o.len(), 2);
    assert_eq!(o.properties().count(), 3);
    assert_eq!(o.get(&"p".into()), Some(&Value::from(4)));
    assert!(o.prototype().is_some());
    assert!(matches!(o.keys().nth(1), Some(PropertyKey::Symbol(_))));
    Ok(())
}

#[test]
fn bigints() -> Result<()> {
    let v = decode_json(r#"[{"bigint!": "123n"}, {"bigint!": -5}, {"bigint!": "1_000"}]"#)?;
    assert_eq!(v[0usize].as_bigint()?, &BigInt::from(123));
    assert_eq!(v[1usize].as_bigint()?, &BigInt::from(-5));
    assert_eq!(v[2usize].as_bigint()?, &BigInt::from(1000));
    Ok(())
}

#[test]
fn symbols_and_functions_are_interned_per_decoder() -> Result<()> {
    let raw = Value::from_json_str(
        r#"[{"symbol!": "s"}, {"symbol!": "s"}, {"symbol!": null}, {"function!": "f"}, {"function!": "f"}]"#,
    )?;
    let mut decoder = Decoder::new();
    let v = decoder.decode(&raw)?;
    assert_eq!(v[0usize], v[1usize]);
    assert_ne!(v[0usize], v[2usize]);
    assert_eq!(v[2usize].as_symbol()?.description(), None);
    assert_eq!(v[3usize], v[4usize]);

    // The same decoder keeps handing out the same identities.
    assert_eq!(Value::from(decoder.symbol(Some("s"))), v[0usize]);
    assert_eq!(Value::from(decoder.function("f")), v[3usize]);

    // A fresh decoder does not.
    let w = document::decode(&raw)?;
    assert_ne!(v[0usize], w[0usize]);
    assert!(!is_deep_equal(&v, &w));
    Ok(())
}

#[test]
fn malformed_documents() -> Result<()> {
    let cases = [
        (r#"{"set!": {}}"#, "malformed `set!` tag: expected an array"),
        (
            r#"{"map!": [{"key": 1}]}"#,
            "malformed `map!` tag: expected entries with `key` and `value` fields",
        ),
        (
            r#"{"object!": [{"key": 1, "value": 1}]}"#,
            "malformed `object!` tag: expected string or symbol keys",
        ),
        (
            r#"{"object!": [{"key": "a", "value": 1, "enumerable": "yes"}]}"#,
            "malformed `object!` tag: expected a boolean `enumerable` field",
        ),
        (
            r#"{"object!": [], "prototype!": 1}"#,
            "malformed `prototype!` tag: expected an object",
        ),
        (r#"{"bigint!": "abc"}"#, "invalid bigint literal: abc"),
        (r#"{"bigint!": true}"#, "malformed `bigint!` tag: expected a string or an integer"),
        (r#"{"symbol!": 1}"#, "malformed `symbol!` tag: expected a string or null"),
        (r#"{"function!": null}"#, "malformed `function!` tag: expected a string"),
    ];
    for (json, message) in cases {
        let err = decode_json(json).unwrap_err();
        assert_eq!(err.to_string(), message, "{json}");
    }
    Ok(())
}

#[test]
fn nested_tags_inside_plain_values() -> Result<()> {
    let v = decode_json(r##"{"a": [{"set!": ["#nan"]}], "b": {"c": "#-inf"}}"##)?;
    assert!(v["a"][0usize].as_set()?.contains(&Value::from(f64::NAN)));
    assert_eq!(v["b"]["c"], Value::from(f64::NEG_INFINITY));
    Ok(())
}

#[cfg(feature = "yaml")]
#[test]
fn load_yaml_and_json() -> Result<()> {
    let mut decoder = Decoder::new();
    let left = decoder.load("tests/document/data/left.yaml")?;
    let right = decoder.load("tests/document/data/right.json")?;
    assert_eq!(first_mismatch(&left, &right), None);
    assert!(is_deep_equal(&left, &right));
    assert_eq!(left["owner"]["kind"], Value::from("user"));
    Ok(())
}

#[test]
fn load_errors() {
    let err = document::load("tests/document/data/missing.json").unwrap_err();
    assert!(err.to_string().contains("failed to read"), "{err}");

    let err = document::load("tests/document/mod.rs").unwrap_err();
    assert!(err.to_string().contains("unsupported document format"), "{err}");
}
