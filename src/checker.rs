// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Type tags and category predicates.

use crate::value::Value;

use core::fmt;

/// The primitive type tag of a value, as reported by `typeof`.
///
/// Null is tagged `Object`; the nullish check always runs before tags are compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Undefined,
    Object,
    Boolean,
    Number,
    BigInt,
    String,
    Symbol,
    Function,
}

impl TypeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Undefined => "undefined",
            TypeTag::Object => "object",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::BigInt => "bigint",
            TypeTag::String => "string",
            TypeTag::Symbol => "symbol",
            TypeTag::Function => "function",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural category used to pick a comparison strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Nullish,
    Primitive,
    Callable,
    Sequence,
    KeyedSet,
    KeyedMap,
    PlainMapping,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Nullish => "nullish",
            Category::Primitive => "primitive",
            Category::Callable => "function",
            Category::Sequence => "sequence",
            Category::KeyedSet => "keyed set",
            Category::KeyedMap => "keyed map",
            Category::PlainMapping => "plain mapping",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn type_of(v: &Value) -> TypeTag {
    match v {
        Value::Undefined => TypeTag::Undefined,
        Value::Null | Value::Array(_) | Value::Set(_) | Value::Map(_) | Value::Object(_) => {
            TypeTag::Object
        }
        Value::Bool(_) => TypeTag::Boolean,
        Value::Number(_) => TypeTag::Number,
        Value::BigInt(_) => TypeTag::BigInt,
        Value::String(_) => TypeTag::String,
        Value::Symbol(_) => TypeTag::Symbol,
        Value::Function(_) => TypeTag::Function,
    }
}

pub fn is_nullish(v: &Value) -> bool {
    matches!(v, Value::Null | Value::Undefined)
}

pub fn is_not_nullish(v: &Value) -> bool {
    !is_nullish(v)
}

pub fn is_sequence(v: &Value) -> bool {
    matches!(v, Value::Array(_))
}

pub fn is_keyed_set(v: &Value) -> bool {
    matches!(v, Value::Set(_))
}

pub fn is_keyed_map(v: &Value) -> bool {
    matches!(v, Value::Map(_))
}

/// Whether the value is a non-nullish, non-sequence value with object semantics.
///
/// Keyed sets and keyed maps pass this test as well, so callers that need
/// exclusive categories must rule those out first (see [`classify`]).
pub fn is_plain_mapping(v: &Value) -> bool {
    is_not_nullish(v) && type_of(v) == TypeTag::Object && !is_sequence(v)
}

/// Same test as [`is_plain_mapping`].
pub fn is_object(v: &Value) -> bool {
    is_plain_mapping(v)
}

/// Assigns the single category of a value.
///
/// The order of the checks matters: sets and maps also satisfy
/// [`is_plain_mapping`] and must be recognized before it.
pub fn classify(v: &Value) -> Category {
    if is_nullish(v) {
        Category::Nullish
    } else if is_sequence(v) {
        Category::Sequence
    } else if is_keyed_set(v) {
        Category::KeyedSet
    } else if is_keyed_map(v) {
        Category::KeyedMap
    } else if is_plain_mapping(v) {
        Category::PlainMapping
    } else if type_of(v) == TypeTag::Function {
        Category::Callable
    } else {
        Category::Primitive
    }
}
