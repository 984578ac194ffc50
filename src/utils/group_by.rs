// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::DefaultMap;
use crate::object::{Object, PropertyKey};
use crate::value::Value;

use core::hash::Hash;

use indexmap::IndexMap;

/// Groups items by the key `key_of(item, index)` returns.
///
/// Keys keep the order in which they were first produced and each group keeps
/// the order of its items.
pub fn map_group_by<K, T, I, F>(items: I, mut key_of: F) -> IndexMap<K, Vec<T>>
where
    K: Hash + Eq,
    I: IntoIterator<Item = T>,
    F: FnMut(&T, usize) -> K,
{
    let mut groups: DefaultMap<K, Vec<T>> = DefaultMap::new(Vec::new);
    for (index, item) in items.into_iter().enumerate() {
        groups.get(key_of(&item, index)).push(item);
    }
    groups.into_inner()
}

/// Like [`map_group_by`], producing an object whose properties are arrays.
pub fn object_group_by<I, F>(values: I, key_of: F) -> Object
where
    I: IntoIterator<Item = Value>,
    F: FnMut(&Value, usize) -> PropertyKey,
{
    map_group_by(values, key_of)
        .into_iter()
        .map(|(key, group)| (key, Value::from(group)))
        .collect()
}
