// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::checker::{self, TypeTag};
use crate::error::ValueError;
use crate::identity::{Function, Symbol};
use crate::number;
use crate::object::{Object, PropertyKey};
use crate::Rc;

use core::fmt;
use core::hash::{Hash, Hasher};
use std::ops;

use anyhow::{Context, Result};
use indexmap::{IndexMap, IndexSet};
use num_bigint::BigInt;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// A dynamically typed value.
///
/// `==` on values is key equality (SameValueZero): primitives compare by value,
/// with NaN equal to NaN; symbols and functions by identity; arrays, sets, maps
/// and objects by reference. This is the membership rule of [`Value::Set`] and
/// the key rule of [`Value::Map`]. Structural comparison is
/// [`crate::is_deep_equal`].
#[derive(Debug, Clone)]
pub enum Value {
    // Absent value.
    Undefined,

    Null,
    Bool(bool),
    Number(f64),
    // Exact-size integer. Never equal to a Number.
    BigInt(Rc<BigInt>),
    String(Rc<str>),
    Symbol(Symbol),
    Function(Function),

    Array(Rc<Vec<Value>>),
    Set(Rc<IndexSet<Value>>),
    Map(Rc<IndexMap<Value, Value>>),
    Object(Rc<Object>),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => number::same_value_zero(*a, *b),
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Set(a), Value::Set(b)) => Rc::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Value::Undefined | Value::Null => (),
            Value::Bool(b) => b.hash(state),
            Value::Number(n) => number::hash_number(*n, state),
            Value::BigInt(n) => n.hash(state),
            Value::String(s) => s.hash(state),
            Value::Symbol(s) => s.hash(state),
            Value::Function(f) => f.hash(state),
            Value::Array(a) => core::ptr::hash(Rc::as_ptr(a), state),
            Value::Set(s) => core::ptr::hash(Rc::as_ptr(s), state),
            Value::Map(m) => core::ptr::hash(Rc::as_ptr(m), state),
            Value::Object(o) => core::ptr::hash(Rc::as_ptr(o), state),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::Error;
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => number::serialize_number(*n, serializer),
            Value::BigInt(n) => serializer.collect_str(&format_args!("{n}n")),
            Value::String(s) => serializer.serialize_str(s.as_ref()),
            Value::Symbol(s) => serializer.collect_str(s),
            Value::Function(f) => serializer.collect_str(f),
            Value::Array(a) => a.serialize(serializer),

            // display set as an array
            Value::Set(s) => serializer.collect_seq(s.iter()),

            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries.iter() {
                    match k {
                        Value::String(_) => map.serialize_entry(k, v)?,
                        _ => {
                            let key_str = serde_json::to_string(k).map_err(Error::custom)?;
                            map.serialize_entry(&key_str, v)?
                        }
                    }
                }
                map.end()
            }

            Value::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (k, v) in fields.entries() {
                    match k {
                        PropertyKey::String(s) => map.serialize_entry(s.as_ref(), v)?,
                        PropertyKey::Symbol(s) => map.serialize_entry(&s.to_string(), v)?,
                    }
                }
                map.end()
            }

            // display undefined as a special string
            Value::Undefined => serializer.serialize_str("<undefined>"),
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a value")
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Bool(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::from(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::from(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::from(v))
    }

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::from(s))
    }

    fn visit_string<E>(self, s: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::from(s))
    }

    fn visit_seq<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let mut arr = vec![];
        while let Some(v) = visitor.next_element()? {
            arr.push(v);
        }
        Ok(Value::from(arr))
    }

    fn visit_map<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut object = Object::new();
        while let Some((key, value)) = visitor.next_entry::<Value, Value>()? {
            object.insert(PropertyKey::from(&key), value);
        }
        Ok(Value::from(object))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(s) => write!(f, "{s}"),
            Err(_e) => Err(fmt::Error),
        }
    }
}

impl Value {
    pub fn new_object() -> Value {
        Value::from(Object::new())
    }

    pub fn new_set() -> Value {
        Value::from(IndexSet::new())
    }

    pub fn new_map() -> Value {
        Value::from(IndexMap::new())
    }

    pub fn new_array() -> Value {
        Value::from(vec![])
    }

    pub fn new_symbol(description: Option<&str>) -> Value {
        Value::Symbol(Symbol::new(description))
    }

    pub fn new_function(name: &str) -> Value {
        Value::Function(Function::new(name))
    }

    pub fn from_json_str(json: &str) -> Result<Value> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_str(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_file(path: &str) -> Result<Value> {
        let contents =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
        Self::from_json_str(&contents)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(yaml: &str) -> Result<Value> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_file(path: &str) -> Result<Value> {
        let contents =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
        Self::from_yaml_str(&contents)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

#[allow(clippy::as_conversions)]
impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

#[allow(clippy::as_conversions)]
impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n as f64)
    }
}

#[allow(clippy::as_conversions)]
impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::BigInt(Rc::new(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

impl From<Vec<Value>> for Value {
    fn from(a: Vec<Value>) -> Self {
        Value::Array(Rc::new(a))
    }
}

impl From<IndexSet<Value>> for Value {
    fn from(s: IndexSet<Value>) -> Self {
        Value::Set(Rc::new(s))
    }
}

impl From<IndexMap<Value, Value>> for Value {
    fn from(m: IndexMap<Value, Value>) -> Self {
        Value::Map(Rc::new(m))
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(Rc::new(o))
    }
}

impl Value {
    pub fn from_array(a: Vec<Value>) -> Value {
        Value::from(a)
    }

    pub fn from_set(s: impl IntoIterator<Item = Value>) -> Value {
        Value::from(s.into_iter().collect::<IndexSet<Value>>())
    }

    pub fn from_map(m: impl IntoIterator<Item = (Value, Value)>) -> Value {
        Value::from(m.into_iter().collect::<IndexMap<Value, Value>>())
    }

    pub fn from_object<K: Into<PropertyKey>>(o: impl IntoIterator<Item = (K, Value)>) -> Value {
        Value::from(o.into_iter().collect::<Object>())
    }

    pub fn type_of(&self) -> TypeTag {
        checker::type_of(self)
    }

    /// Short name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Function(_) => "function",
            Value::Array(_) => "array",
            Value::Set(_) => "set",
            Value::Map(_) => "map",
            Value::Object(_) => "object",
        }
    }

    /// Strict equality (`===`): key equality, except that NaN is unequal to everything.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            _ => self == other,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_nullish(&self) -> bool {
        checker::is_nullish(self)
    }

    pub fn is_empty_object(&self) -> bool {
        matches!(self, Value::Object(o) if o.is_empty())
    }

    fn mismatch(&self, expected: &'static str) -> ValueError {
        ValueError::TypeMismatch {
            expected,
            found: self.kind_name(),
        }
    }

    pub fn as_bool(&self) -> Result<bool, ValueError> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(self.mismatch("bool")),
        }
    }

    pub fn as_number(&self) -> Result<f64, ValueError> {
        match self {
            Value::Number(n) => Ok(*n),
            _ => Err(self.mismatch("number")),
        }
    }

    pub fn as_bigint(&self) -> Result<&BigInt, ValueError> {
        match self {
            Value::BigInt(n) => Ok(n),
            _ => Err(self.mismatch("bigint")),
        }
    }

    pub fn as_string(&self) -> Result<&Rc<str>, ValueError> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch("string")),
        }
    }

    pub fn as_symbol(&self) -> Result<&Symbol, ValueError> {
        match self {
            Value::Symbol(s) => Ok(s),
            _ => Err(self.mismatch("symbol")),
        }
    }

    pub fn as_array(&self) -> Result<&Vec<Value>, ValueError> {
        match self {
            Value::Array(a) => Ok(a),
            _ => Err(self.mismatch("array")),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Vec<Value>, ValueError> {
        match self {
            Value::Array(a) => Ok(Rc::make_mut(a)),
            _ => Err(self.mismatch("array")),
        }
    }

    pub fn as_set(&self) -> Result<&IndexSet<Value>, ValueError> {
        match self {
            Value::Set(s) => Ok(s),
            _ => Err(self.mismatch("set")),
        }
    }

    pub fn as_set_mut(&mut self) -> Result<&mut IndexSet<Value>, ValueError> {
        match self {
            Value::Set(s) => Ok(Rc::make_mut(s)),
            _ => Err(self.mismatch("set")),
        }
    }

    pub fn as_map(&self) -> Result<&IndexMap<Value, Value>, ValueError> {
        match self {
            Value::Map(m) => Ok(m),
            _ => Err(self.mismatch("map")),
        }
    }

    pub fn as_map_mut(&mut self) -> Result<&mut IndexMap<Value, Value>, ValueError> {
        match self {
            Value::Map(m) => Ok(Rc::make_mut(m)),
            _ => Err(self.mismatch("map")),
        }
    }

    pub fn as_object(&self) -> Result<&Object, ValueError> {
        match self {
            Value::Object(o) => Ok(o),
            _ => Err(self.mismatch("object")),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut Object, ValueError> {
        match self {
            Value::Object(o) => Ok(Rc::make_mut(o)),
            _ => Err(self.mismatch("object")),
        }
    }
}

impl ops::Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        match self.as_array() {
            Ok(a) if index < a.len() => &a[index],
            _ => &Value::Undefined,
        }
    }
}

impl ops::Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Self::Output {
        match self {
            Value::Object(o) => match o.get(&PropertyKey::from(key)) {
                Some(v) => v,
                _ => &Value::Undefined,
            },
            _ => &self[&Value::from(key)],
        }
    }
}

impl ops::Index<&Value> for Value {
    type Output = Value;

    fn index(&self, key: &Value) -> &Self::Output {
        match (self, key) {
            (Value::Map(m), _) => match m.get(key) {
                Some(v) => v,
                _ => &Value::Undefined,
            },
            (Value::Object(o), _) => match o.get(&PropertyKey::from(key)) {
                Some(v) => v,
                _ => &Value::Undefined,
            },
            (Value::Array(a), Value::Number(n)) if n.fract() == 0.0 && *n >= 0.0 => {
                #[allow(clippy::as_conversions)]
                let index = *n as usize;
                match a.get(index) {
                    Some(v) => v,
                    _ => &Value::Undefined,
                }
            }
            _ => &Value::Undefined,
        }
    }
}
