// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use core::hash::Hash;

use indexmap::IndexMap;

/// Insertion-ordered map that fills in missing entries from a factory on access.
#[derive(Clone, Debug)]
pub struct DefaultMap<K, V, F = fn() -> V> {
    entries: IndexMap<K, V>,
    factory: F,
}

impl<K, V, F> DefaultMap<K, V, F>
where
    K: Hash + Eq,
    F: Fn() -> V,
{
    pub fn new(factory: F) -> Self {
        DefaultMap {
            entries: IndexMap::new(),
            factory,
        }
    }

    pub fn with_entries(factory: F, entries: impl IntoIterator<Item = (K, V)>) -> Self {
        DefaultMap {
            entries: entries.into_iter().collect(),
            factory,
        }
    }

    /// Value for `key`, inserting `factory()` first when the key is missing.
    pub fn get(&mut self, key: K) -> &mut V {
        let factory = &self.factory;
        self.entries.entry(key).or_insert_with(factory)
    }

    /// Lookup that never inserts.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }

    pub fn into_inner(self) -> IndexMap<K, V> {
        self.entries
    }
}
