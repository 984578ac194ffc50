// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg(test)]

use anyhow::{bail, Result};
use deepeq::document::Decoder;
use deepeq::*;
use serde::Deserialize;
use test_generator::test_resources;

#[derive(Deserialize, Debug)]
struct TestCase {
    note: String,
    left: Value,
    right: Option<Value>,
    // Compare `left` with a clone of itself (same reference).
    same: Option<bool>,
    want: bool,
    mismatch: Option<String>,
}

#[derive(Deserialize, Debug)]
struct YamlTest {
    cases: Vec<TestCase>,
}

fn yaml_test_impl(file: &str) -> Result<()> {
    let yaml_str = std::fs::read_to_string(file)?;
    let test: YamlTest = serde_yaml::from_str(&yaml_str)?;

    println!("running {file}");

    for case in test.cases {
        print!("case {} ", case.note);

        // One decoder per case so that symbols and functions match across sides.
        let mut decoder = Decoder::new();
        let left = decoder.decode(&case.left)?;
        let right = match (case.same, &case.right) {
            (Some(true), _) => left.clone(),
            (_, Some(right)) => decoder.decode(right)?,
            // `right: null` reads as a missing field.
            (_, None) => Value::Null,
        };

        let forward = is_deep_equal(&left, &right);
        let backward = is_deep_equal(&right, &left);
        if forward != case.want {
            bail!(
                "case '{}': expected {}, got {forward}\nleft:  {left:?}\nright: {right:?}",
                case.note,
                case.want
            );
        }
        if forward != backward {
            bail!("case '{}': comparison is not symmetric", case.note);
        }

        let found = first_mismatch(&left, &right);
        if found.is_some() == forward {
            bail!("case '{}': mismatch report disagrees with result", case.note);
        }
        if let Some(expected) = &case.mismatch {
            let actual = found.map(|m| m.to_string()).unwrap_or_default();
            if &actual != expected {
                println!("{}", prettydiff::diff_chars(expected, &actual));
                bail!("case '{}': unexpected mismatch report", case.note);
            }
        }

        println!("passed");
    }

    println!("{file} passed");
    Ok(())
}

fn yaml_test(file: &str) -> Result<()> {
    match yaml_test_impl(file) {
        Ok(_) => Ok(()),
        Err(e) => {
            // If Err is returned, it doesn't always get printed by cargo test.
            // Therefore, panic with the error.
            panic!("{}", e);
        }
    }
}

#[test_resources("tests/equality/cases/*.yaml")]
fn run(path: &str) {
    yaml_test(path).unwrap()
}

#[test]
fn case_notes_are_unique_within_each_file() -> Result<()> {
    for entry in walkdir::WalkDir::new("tests/equality/cases")
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("yaml") {
            continue;
        }
        let test: YamlTest = serde_yaml::from_str(&std::fs::read_to_string(path)?)?;
        let mut seen = std::collections::HashSet::new();
        for case in &test.cases {
            if !seen.insert(case.note.as_str()) {
                bail!("{}: duplicate case '{}'", path.display(), case.note);
            }
        }
    }
    Ok(())
}

fn samples() -> Vec<Value> {
    let object = Value::from_object([("a", Value::from(1))]);
    vec![
        Value::Undefined,
        Value::Null,
        Value::from(false),
        Value::from(0),
        Value::from(f64::NAN),
        Value::from(""),
        Value::from("0"),
        Value::from(BigInt::from(0)),
        Value::new_symbol(Some("s")),
        Value::new_function("f"),
        Value::new_array(),
        Value::new_set(),
        Value::new_map(),
        Value::new_object(),
        Value::from(vec![Value::from(1)]),
        Value::from_set([Value::from(1)]),
        Value::from_map([(Value::from("a"), Value::from(1))]),
        object.clone(),
        Value::from(vec![object]),
    ]
}

#[test]
fn reflexive() {
    for v in samples() {
        assert!(is_deep_equal(&v, &v), "{v:?}");
        assert!(is_deep_equal(&v, &v.clone()), "{v:?}");
    }
}

#[test]
fn distinct_samples_are_unequal_both_ways() {
    let samples = samples();
    for (i, a) in samples.iter().enumerate() {
        for (j, b) in samples.iter().enumerate() {
            if i != j {
                assert!(!is_deep_equal(a, b), "{a:?} vs {b:?}");
                assert!(!is_deep_equal(b, a), "{b:?} vs {a:?}");
            }
        }
    }
}

#[test]
fn categories_are_exclusive() {
    for v in samples() {
        let hits = [
            is_sequence(&v),
            is_keyed_set(&v),
            is_keyed_map(&v),
            is_plain_mapping(&v) && !is_keyed_set(&v) && !is_keyed_map(&v),
        ]
        .iter()
        .filter(|hit| **hit)
        .count();
        assert!(hits <= 1, "{v:?}");
    }
}

#[test]
fn symbols_with_same_description_differ() {
    let a = Value::new_symbol(Some("id"));
    let b = Value::new_symbol(Some("id"));
    assert!(!is_deep_equal(&a, &b));
    assert!(is_deep_equal(&a, &a.clone()));
}

#[test]
fn functions_with_same_name_differ() {
    let f = Function::new("handler");
    let g = Function::new("handler");
    let a = Value::from_object([("on", Value::from(f.clone()))]);
    let b = Value::from_object([("on", Value::from(f))]);
    let c = Value::from_object([("on", Value::from(g))]);
    assert!(is_deep_equal(&a, &b));
    assert!(!is_deep_equal(&a, &c));
}

#[test]
fn structurally_equal_set_members_are_distinct() -> Result<()> {
    let member = Value::from(vec![Value::from(1)]);
    let a = Value::from_set([member.clone()]);
    let b = Value::from_set([member]);
    let c = Value::from_set([Value::from(vec![Value::from(1)])]);
    assert!(is_deep_equal(&a, &b));
    assert!(!is_deep_equal(&a, &c));

    let m = first_mismatch(&a, &c).unwrap();
    assert_eq!(m.kind, MismatchKind::MissingElement(a.as_set()?[0].clone()));
    Ok(())
}

#[test]
fn hidden_and_inherited_properties() -> Result<()> {
    let mut prototype = Object::new();
    prototype.insert("inherited", Value::from(1));

    let mut a = Object::with_prototype(prototype);
    a.insert("x", Value::from(1));
    a.insert_hidden("secret", Value::from("a"));

    let mut b = Object::new();
    b.insert("x", Value::from(1));
    b.insert_hidden("secret", Value::from("b"));

    let (a, b) = (Value::from(a), Value::from(b));
    assert!(is_deep_equal(&a, &b));
    assert_eq!(a["inherited"], Value::from(1));
    assert!(b["inherited"].is_undefined());
    Ok(())
}

#[test]
fn mutation_after_clone_copies_on_write() -> Result<()> {
    let a = Value::from_json_str(r#"{"a": [1, 2]}"#)?;
    let mut b = a.clone();
    assert!(is_deep_equal(&a, &b));

    b.as_object_mut()?.insert("a", Value::from(vec![Value::from(1)]));
    assert!(!is_deep_equal(&a, &b));
    assert_eq!(a["a"].as_array()?.len(), 2);
    Ok(())
}

#[test]
fn deep_nesting() {
    let build = |leaf: i32| {
        let mut v = Value::from(leaf);
        for depth in 0..500 {
            v = if depth % 2 == 0 {
                Value::from(vec![v])
            } else {
                Value::from_object([("next", v)])
            };
        }
        v
    };
    assert!(is_deep_equal(&build(1), &build(1)));
    assert!(!is_deep_equal(&build(1), &build(2)));

    let m = first_mismatch(&build(1), &build(2)).unwrap();
    assert_eq!(m.path.len(), 500);
    assert_eq!(m.kind, MismatchKind::Unequal);
}

#[test]
fn size_mismatch_short_circuits() -> Result<()> {
    let a = Value::from_json_str(r#"[{"a": 1}, {"b": 2}, {"c": 3}]"#)?;
    let b = Value::from_json_str(r#"[{"a": 1}, {"b": 2}]"#)?;
    let mut counter = VisitCounter::new();
    assert!(!is_deep_equal_with(&a, &b, &mut counter));
    assert_eq!(counter.total(), 1);

    let a = Value::from_map([(Value::from(1), Value::from(1))]);
    let b = Value::from_map([
        (Value::from(1), Value::from(1)),
        (Value::from(2), Value::from(2)),
    ]);
    let mut counter = VisitCounter::new();
    assert!(!is_deep_equal_with(&a, &b, &mut counter));
    assert_eq!(counter.total(), 1);
    assert_eq!(counter.get(Category::KeyedMap), 1);
    Ok(())
}

#[test]
fn visits_every_pair_when_equal() -> Result<()> {
    let a = Value::from_json_str(r#"{"a": [1, 2], "b": {"c": null}}"#)?;
    let b = Value::from_json_str(r#"{"b": {"c": null}, "a": [1, 2]}"#)?;
    let mut counter = VisitCounter::new();
    assert!(is_deep_equal_with(&a, &b, &mut counter));
    assert_eq!(counter.get(Category::PlainMapping), 2);
    assert_eq!(counter.get(Category::Sequence), 1);
    assert_eq!(counter.get(Category::Primitive), 2);
    assert_eq!(counter.get(Category::Nullish), 1);
    assert_eq!(counter.total(), 6);
    Ok(())
}

#[derive(Default)]
struct Trace {
    events: Vec<String>,
}

impl Observer for Trace {
    fn visit(&mut self, left: &Value, _right: &Value) {
        self.events.push(format!("visit {left}"));
    }

    fn enter(&mut self, segment: Segment<'_>) {
        self.events.push(format!("enter {}", PathSegment::from(segment)));
    }

    fn leave(&mut self) {
        self.events.push("leave".to_string());
    }

    fn mismatch(&mut self, _left: &Value, _right: &Value, kind: MismatchKind) {
        self.events.push(format!("mismatch {kind}"));
    }
}

#[test]
fn observer_events() -> Result<()> {
    let a = Value::from_json_str(r#"{"a": [1, 2]}"#)?;
    let b = Value::from_json_str(r#"{"a": [1, 3]}"#)?;
    let mut trace = Trace::default();
    assert!(!is_deep_equal_with(&a, &b, &mut trace));
    assert_eq!(
        trace.events,
        vec![
            r#"visit {"a":[1,2]}"#,
            "enter .a",
            "visit [1,2]",
            "enter [0]",
            "visit 1",
            "leave",
            "enter [1]",
            "visit 2",
            "mismatch values differ",
            "leave",
            "leave",
        ]
    );
    Ok(())
}

#[test]
fn mismatch_details() -> Result<()> {
    let a = Value::from_json_str(r#"{"list": [1, {"x": "abc"}]}"#)?;
    let b = Value::from_json_str(r#"{"list": [1, {"x": "abd"}]}"#)?;
    let m = first_mismatch(&a, &b).unwrap();
    assert_eq!(
        m.path,
        vec![
            PathSegment::Property("list".into()),
            PathSegment::Index(1),
            PathSegment::Property("x".into()),
        ]
    );
    assert_eq!(m.location(), "$.list[1].x");
    assert_eq!(m.left, Value::from("abc"));
    assert_eq!(m.right, Value::from("abd"));
    assert_eq!(m.kind, MismatchKind::Unequal);
    Ok(())
}

#[test]
fn type_tag_and_category_mismatches() {
    let m = first_mismatch(&Value::from(1), &Value::from(BigInt::from(1))).unwrap();
    assert_eq!(
        m.kind,
        MismatchKind::TypeTag {
            left: TypeTag::Number,
            right: TypeTag::BigInt
        }
    );

    let m = first_mismatch(&Value::new_set(), &Value::new_object()).unwrap();
    assert_eq!(
        m.kind,
        MismatchKind::Category {
            left: Category::KeyedSet,
            right: Category::PlainMapping
        }
    );
}
