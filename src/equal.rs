// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Deep structural equality.

use crate::checker::{classify, type_of};
use crate::mismatch::MismatchKind;
use crate::object::Object;
use crate::observer::{Observer, Segment};
use crate::value::Value;

use indexmap::{IndexMap, IndexSet};

/// Borrowed view of a value's structure.
///
/// Arms are exclusive and correspond, in order, to the sequence, keyed set,
/// keyed map and plain mapping categories.
enum Shape<'a> {
    Sequence(&'a [Value]),
    KeyedSet(&'a IndexSet<Value>),
    KeyedMap(&'a IndexMap<Value, Value>),
    PlainMapping(&'a Object),
    Other,
}

impl<'a> Shape<'a> {
    fn of(v: &'a Value) -> Shape<'a> {
        match v {
            Value::Array(a) => Shape::Sequence(a),
            Value::Set(s) => Shape::KeyedSet(s),
            Value::Map(m) => Shape::KeyedMap(m),
            Value::Object(o) => Shape::PlainMapping(o),
            _ => Shape::Other,
        }
    }
}

/// Whether two values are structurally equal.
///
/// Sequences compare position by position, keyed sets by membership, keyed
/// maps by key then value, and plain mappings by their own enumerable
/// properties. Values of different categories are never equal. NaN equals
/// NaN. Symbols and functions are equal only to themselves.
///
/// The comparison recurses once per nesting level, so very deeply nested
/// values (thousands of levels) can exhaust the thread stack.
pub fn is_deep_equal(a: &Value, b: &Value) -> bool {
    compare(a, b, &mut ())
}

/// [`is_deep_equal`] reporting its progress to `observer`.
pub fn is_deep_equal_with<O: Observer>(a: &Value, b: &Value, observer: &mut O) -> bool {
    compare(a, b, observer)
}

fn compare<O: Observer>(a: &Value, b: &Value, observer: &mut O) -> bool {
    observer.visit(a, b);

    if a.strict_equals(b) {
        return true;
    }

    if a.is_nullish() || b.is_nullish() {
        observer.mismatch(a, b, MismatchKind::Nullish);
        return false;
    }

    let (left, right) = (type_of(a), type_of(b));
    if left != right {
        observer.mismatch(a, b, MismatchKind::TypeTag { left, right });
        return false;
    }

    if let (Value::Number(x), Value::Number(y)) = (a, b) {
        if x.is_nan() && y.is_nan() {
            return true;
        }
    }

    match (Shape::of(a), Shape::of(b)) {
        (Shape::Sequence(x), Shape::Sequence(y)) => compare_sequences(a, b, x, y, observer),
        (Shape::KeyedSet(x), Shape::KeyedSet(y)) => compare_sets(a, b, x, y, observer),
        (Shape::KeyedMap(x), Shape::KeyedMap(y)) => compare_maps(a, b, x, y, observer),
        (Shape::PlainMapping(x), Shape::PlainMapping(y)) => compare_objects(a, b, x, y, observer),
        (Shape::Other, Shape::Other) => {
            observer.mismatch(a, b, MismatchKind::Unequal);
            false
        }
        _ => {
            let kind = MismatchKind::Category {
                left: classify(a),
                right: classify(b),
            };
            observer.mismatch(a, b, kind);
            false
        }
    }
}

fn descend<O: Observer>(
    segment: Segment<'_>,
    left: &Value,
    right: &Value,
    observer: &mut O,
) -> bool {
    observer.enter(segment);
    let equal = compare(left, right, observer);
    observer.leave();
    equal
}

fn compare_sequences<O: Observer>(
    a: &Value,
    b: &Value,
    x: &[Value],
    y: &[Value],
    observer: &mut O,
) -> bool {
    if x.len() != y.len() {
        let kind = MismatchKind::Length {
            left: x.len(),
            right: y.len(),
        };
        observer.mismatch(a, b, kind);
        return false;
    }
    x.iter()
        .zip(y)
        .enumerate()
        .all(|(idx, (l, r))| descend(Segment::Index(idx), l, r, observer))
}

fn compare_sets<O: Observer>(
    a: &Value,
    b: &Value,
    x: &IndexSet<Value>,
    y: &IndexSet<Value>,
    observer: &mut O,
) -> bool {
    if x.len() != y.len() {
        let kind = MismatchKind::Size {
            left: x.len(),
            right: y.len(),
        };
        observer.mismatch(a, b, kind);
        return false;
    }
    // Membership uses key equality; elements are not compared structurally.
    match x.iter().find(|e| !y.contains(*e)) {
        Some(missing) => {
            observer.mismatch(a, b, MismatchKind::MissingElement(missing.clone()));
            false
        }
        None => true,
    }
}

fn compare_maps<O: Observer>(
    a: &Value,
    b: &Value,
    x: &IndexMap<Value, Value>,
    y: &IndexMap<Value, Value>,
    observer: &mut O,
) -> bool {
    if x.len() != y.len() {
        let kind = MismatchKind::Size {
            left: x.len(),
            right: y.len(),
        };
        observer.mismatch(a, b, kind);
        return false;
    }
    for (key, l) in x {
        match y.get(key) {
            Some(r) => {
                if !descend(Segment::Entry(key), l, r, observer) {
                    return false;
                }
            }
            None => {
                observer.mismatch(a, b, MismatchKind::MissingKey(key.clone()));
                return false;
            }
        }
    }
    true
}

fn compare_objects<O: Observer>(
    a: &Value,
    b: &Value,
    x: &Object,
    y: &Object,
    observer: &mut O,
) -> bool {
    let (left, right) = (x.len(), y.len());
    if left != right {
        observer.mismatch(a, b, MismatchKind::PropertyCount { left, right });
        return false;
    }
    for (key, l) in x.entries() {
        match y.get_own_enumerable(key) {
            Some(r) => {
                if !descend(Segment::Property(key), l, r, observer) {
                    return false;
                }
            }
            None => {
                observer.mismatch(a, b, MismatchKind::MissingProperty(key.clone()));
                return false;
            }
        }
    }
    true
}
