// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::identity::Symbol;
use crate::value::Value;
use crate::Rc;

use core::fmt;

use indexmap::IndexMap;

/// Name of an object property.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    String(Rc<str>),
    Symbol(Symbol),
}

impl PropertyKey {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyKey::String(s) => Some(s),
            PropertyKey::Symbol(_) => None,
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PropertyKey::String(s) => f.write_str(s),
            PropertyKey::Symbol(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        PropertyKey::String(s.into())
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        PropertyKey::String(s.into())
    }
}

impl From<Rc<str>> for PropertyKey {
    fn from(s: Rc<str>) -> Self {
        PropertyKey::String(s)
    }
}

impl From<Symbol> for PropertyKey {
    fn from(s: Symbol) -> Self {
        PropertyKey::Symbol(s)
    }
}

impl From<&Value> for PropertyKey {
    // Mirrors property-key coercion: strings and symbols are used as is,
    // everything else by its textual form.
    fn from(v: &Value) -> Self {
        match v {
            Value::String(s) => PropertyKey::String(s.clone()),
            Value::Symbol(s) => PropertyKey::Symbol(s.clone()),
            _ => PropertyKey::String(v.to_string().into()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Property {
    pub value: Value,
    pub enumerable: bool,
}

/// A plain mapping: a table of own properties plus an optional prototype.
///
/// Only own enumerable properties are visible to [`Object::len`],
/// [`Object::keys`], [`Object::entries`] and to deep equality. Hidden and
/// inherited properties are reachable through [`Object::get_own`] and
/// [`Object::get`].
#[derive(Clone, Debug, Default)]
pub struct Object {
    properties: IndexMap<PropertyKey, Property>,
    prototype: Option<Rc<Object>>,
}

impl Object {
    pub fn new() -> Object {
        Object::default()
    }

    pub fn with_prototype(prototype: Object) -> Object {
        Object {
            properties: IndexMap::new(),
            prototype: Some(Rc::new(prototype)),
        }
    }

    pub fn prototype(&self) -> Option<&Object> {
        self.prototype.as_deref()
    }

    /// Sets an enumerable property, returning the previous own value.
    pub fn insert(&mut self, key: impl Into<PropertyKey>, value: Value) -> Option<Value> {
        self.define(key, value, true)
    }

    /// Sets a non-enumerable property, returning the previous own value.
    pub fn insert_hidden(&mut self, key: impl Into<PropertyKey>, value: Value) -> Option<Value> {
        self.define(key, value, false)
    }

    pub fn define(
        &mut self,
        key: impl Into<PropertyKey>,
        value: Value,
        enumerable: bool,
    ) -> Option<Value> {
        self.properties
            .insert(key.into(), Property { value, enumerable })
            .map(|p| p.value)
    }

    pub fn remove(&mut self, key: &PropertyKey) -> Option<Value> {
        self.properties.shift_remove(key).map(|p| p.value)
    }

    /// Own property, enumerable or not.
    pub fn get_own(&self, key: &PropertyKey) -> Option<&Value> {
        self.properties.get(key).map(|p| &p.value)
    }

    pub fn get_own_enumerable(&self, key: &PropertyKey) -> Option<&Value> {
        match self.properties.get(key) {
            Some(p) if p.enumerable => Some(&p.value),
            _ => None,
        }
    }

    /// Property lookup through the prototype chain.
    pub fn get(&self, key: &PropertyKey) -> Option<&Value> {
        let mut object = Some(self);
        while let Some(o) = object {
            if let Some(v) = o.get_own(key) {
                return Some(v);
            }
            object = o.prototype();
        }
        None
    }

    pub fn property(&self, key: &PropertyKey) -> Option<&Property> {
        self.properties.get(key)
    }

    pub fn contains_key(&self, key: &PropertyKey) -> bool {
        self.get_own_enumerable(key).is_some()
    }

    /// Number of own enumerable properties.
    pub fn len(&self) -> usize {
        self.properties.values().filter(|p| p.enumerable).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn keys(&self) -> impl Iterator<Item = &PropertyKey> {
        self.entries().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries().map(|(_, v)| v)
    }

    /// Own enumerable properties in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&PropertyKey, &Value)> {
        self.properties
            .iter()
            .filter(|(_, p)| p.enumerable)
            .map(|(k, p)| (k, &p.value))
    }

    /// All own properties, hidden ones included.
    pub fn properties(&self) -> impl Iterator<Item = (&PropertyKey, &Property)> {
        self.properties.iter()
    }

    /// New object with the same own enumerable keys and transformed values.
    pub fn map_values<F>(&self, mut f: F) -> Object
    where
        F: FnMut(&Value, &PropertyKey) -> Value,
    {
        self.entries()
            .map(|(k, v)| (k.clone(), f(v, k)))
            .collect()
    }
}

impl<K: Into<PropertyKey>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut object = Object::new();
        for (k, v) in iter {
            object.insert(k, v);
        }
        object
    }
}

impl<K: Into<PropertyKey>> Extend<(K, Value)> for Object {
    fn extend<I: IntoIterator<Item = (K, Value)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}
