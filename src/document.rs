// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Tagged JSON/YAML documents.
//!
//! Plain JSON and YAML have no way to write sets, maps, `undefined`, NaN,
//! bigints, symbols or functions. Documents spell them with tags:
//!
//! ```yaml
//! - "#undefined"            # undefined
//! - "#nan"                  # also "#inf" and "#-inf"
//! - set!: [1, 2]
//! - map!:
//!     - key: {set!: []}
//!       value: 1
//! - object!:
//!     - key: {symbol!: id}
//!       value: 1
//!     - key: hidden
//!       value: 2
//!       enumerable: false
//!   prototype!: {inherited: 3}
//! - bigint!: "12345678901234567890n"
//! - symbol!: id             # null for a symbol without description
//! - function!: handler
//! ```
//!
//! Within one [`Decoder`], symbols with the same description and functions
//! with the same name decode to the same identity.

use crate::error::DocumentError;
use crate::identity::{Function, Symbol};
use crate::number::parse_bigint;
use crate::object::{Object, PropertyKey};
use crate::utils::format_bytes;
use crate::value::Value;

use std::path::Path;

use anyhow::{bail, Context, Result};
use indexmap::{IndexMap, IndexSet};
use num_bigint::BigInt;
use num_traits::FromPrimitive;

const SET: &str = "set!";
const MAP: &str = "map!";
const OBJECT: &str = "object!";
const PROTOTYPE: &str = "prototype!";
const BIGINT: &str = "bigint!";
const SYMBOL: &str = "symbol!";
const FUNCTION: &str = "function!";

fn malformed(tag: &'static str, expected: &'static str) -> DocumentError {
    DocumentError::MalformedTag { tag, expected }
}

/// Rewrites decoded documents, resolving tags into values.
#[derive(Debug, Default)]
pub struct Decoder {
    symbols: IndexMap<Option<String>, Symbol>,
    functions: IndexMap<String, Function>,
}

impl Decoder {
    pub fn new() -> Decoder {
        Decoder::default()
    }

    /// Symbol for `description`, created on first use.
    pub fn symbol(&mut self, description: Option<&str>) -> Symbol {
        self.symbols
            .entry(description.map(String::from))
            .or_insert_with(|| Symbol::new(description))
            .clone()
    }

    /// Function named `name`, created on first use.
    pub fn function(&mut self, name: &str) -> Function {
        self.functions
            .entry(name.to_string())
            .or_insert_with(|| Function::new(name))
            .clone()
    }

    pub fn decode(&mut self, v: &Value) -> Result<Value, DocumentError> {
        match v {
            Value::String(s) => Ok(match s.as_ref() {
                "#undefined" => Value::Undefined,
                "#nan" => Value::Number(f64::NAN),
                "#inf" => Value::Number(f64::INFINITY),
                "#-inf" => Value::Number(f64::NEG_INFINITY),
                _ => v.clone(),
            }),
            Value::Array(items) => Ok(Value::from(
                items
                    .iter()
                    .map(|item| self.decode(item))
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            Value::Object(fields) => match self.decode_tag(fields)? {
                Some(value) => Ok(value),
                None => {
                    let mut object = Object::new();
                    for (key, value) in fields.properties() {
                        object.define(
                            key.clone(),
                            self.decode(&value.value)?,
                            value.enumerable,
                        );
                    }
                    Ok(Value::from(object))
                }
            },
            _ => Ok(v.clone()),
        }
    }

    fn decode_tag(&mut self, fields: &Object) -> Result<Option<Value>, DocumentError> {
        let tag = |name: &str| fields.get_own_enumerable(&PropertyKey::from(name));
        let value = match fields.len() {
            1 => {
                if let Some(items) = tag(SET) {
                    self.decode_set(items)?
                } else if let Some(entries) = tag(MAP) {
                    self.decode_map(entries)?
                } else if let Some(properties) = tag(OBJECT) {
                    self.decode_object(properties, None)?
                } else if let Some(literal) = tag(BIGINT) {
                    Value::from(decode_bigint(literal)?)
                } else if let Some(description) = tag(SYMBOL) {
                    Value::from(self.decode_symbol(description)?)
                } else if let Some(name) = tag(FUNCTION) {
                    match name {
                        Value::String(name) => Value::from(self.function(name)),
                        _ => return Err(malformed(FUNCTION, "a string")),
                    }
                } else {
                    return Ok(None);
                }
            }
            2 => match (tag(OBJECT), tag(PROTOTYPE)) {
                (Some(properties), Some(prototype)) => {
                    self.decode_object(properties, Some(prototype))?
                }
                _ => return Ok(None),
            },
            _ => return Ok(None),
        };
        Ok(Some(value))
    }

    fn decode_set(&mut self, items: &Value) -> Result<Value, DocumentError> {
        let Value::Array(items) = items else {
            return Err(malformed(SET, "an array"));
        };
        let mut set = IndexSet::new();
        for item in items.iter() {
            set.insert(self.decode(item)?);
        }
        Ok(Value::from(set))
    }

    fn decode_map(&mut self, entries: &Value) -> Result<Value, DocumentError> {
        let Value::Array(entries) = entries else {
            return Err(malformed(MAP, "an array"));
        };
        let mut map = IndexMap::new();
        for entry in entries.iter() {
            let (key, value) = entry_parts(entry).ok_or_else(|| {
                malformed(MAP, "entries with `key` and `value` fields")
            })?;
            map.insert(self.decode(key)?, self.decode(value)?);
        }
        Ok(Value::from(map))
    }

    fn decode_object(
        &mut self,
        properties: &Value,
        prototype: Option<&Value>,
    ) -> Result<Value, DocumentError> {
        let Value::Array(properties) = properties else {
            return Err(malformed(OBJECT, "an array"));
        };
        let mut object = match prototype {
            Some(prototype) => match self.decode(prototype)? {
                Value::Object(prototype) => Object::with_prototype((*prototype).clone()),
                _ => return Err(malformed(PROTOTYPE, "an object")),
            },
            None => Object::new(),
        };
        for property in properties.iter() {
            let (key, value) = entry_parts(property).ok_or_else(|| {
                malformed(OBJECT, "properties with `key` and `value` fields")
            })?;
            let enumerable = match property.as_object()?.get_own(&"enumerable".into()) {
                None => true,
                Some(Value::Bool(b)) => *b,
                Some(_) => return Err(malformed(OBJECT, "a boolean `enumerable` field")),
            };
            let key = match self.decode(key)? {
                key @ (Value::String(_) | Value::Symbol(_)) => PropertyKey::from(&key),
                _ => return Err(malformed(OBJECT, "string or symbol keys")),
            };
            object.define(key, self.decode(value)?, enumerable);
        }
        Ok(Value::from(object))
    }

    fn decode_symbol(&mut self, description: &Value) -> Result<Symbol, DocumentError> {
        match description {
            Value::Null => Ok(self.symbol(None)),
            Value::String(s) => Ok(self.symbol(Some(s.as_ref()))),
            _ => Err(malformed(SYMBOL, "a string or null")),
        }
    }

    /// Reads and decodes a `.json` document, or a `.yaml`/`.yml` one when
    /// YAML support is enabled.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<Value> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        #[allow(clippy::as_conversions)]
        let size = format_bytes(contents.len() as f64);
        log::debug!("loaded {} ({size})", path.display());

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let raw = match extension {
            "json" => Value::from_json_str(&contents),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Value::from_yaml_str(&contents),
            _ => bail!("unsupported document format: {}", path.display()),
        }
        .with_context(|| format!("failed to parse {}", path.display()))?;

        self.decode(&raw)
            .with_context(|| format!("failed to decode {}", path.display()))
    }
}

fn entry_parts(entry: &Value) -> Option<(&Value, &Value)> {
    let Value::Object(fields) = entry else {
        return None;
    };
    Some((
        fields.get_own(&"key".into())?,
        fields.get_own(&"value".into())?,
    ))
}

fn decode_bigint(literal: &Value) -> Result<BigInt, DocumentError> {
    match literal {
        Value::String(s) => {
            parse_bigint(s).ok_or_else(|| DocumentError::InvalidBigInt(s.to_string()))
        }
        Value::Number(n) if n.fract() == 0.0 => {
            BigInt::from_f64(*n).ok_or_else(|| DocumentError::InvalidBigInt(n.to_string()))
        }
        Value::Number(n) => Err(DocumentError::InvalidBigInt(n.to_string())),
        _ => Err(malformed(BIGINT, "a string or an integer")),
    }
}

/// Decodes `v` with a fresh [`Decoder`].
pub fn decode(v: &Value) -> Result<Value, DocumentError> {
    Decoder::new().decode(v)
}

/// Loads `path` with a fresh [`Decoder`]. See [`Decoder::load`].
pub fn load(path: impl AsRef<Path>) -> Result<Value> {
    Decoder::new().load(path)
}
