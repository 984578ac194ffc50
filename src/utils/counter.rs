// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use core::hash::Hash;

use indexmap::IndexMap;

/// Insertion-ordered occurrence counts. Missing keys count as zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Counter<K: Hash + Eq> {
    counts: IndexMap<K, i64>,
}

impl<K: Hash + Eq> Default for Counter<K> {
    fn default() -> Self {
        Counter {
            counts: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq> Counter<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &K) -> i64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn set(&mut self, key: K, count: i64) {
        self.counts.insert(key, count);
    }

    pub fn increment(&mut self, key: K) {
        self.increment_by(key, 1);
    }

    pub fn increment_by(&mut self, key: K, amount: i64) {
        *self.counts.entry(key).or_insert(0) += amount;
    }

    pub fn decrement(&mut self, key: K) {
        self.increment_by(key, -1);
    }

    pub fn decrement_by(&mut self, key: K, amount: i64) {
        self.increment_by(key, -amount);
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.counts.contains_key(key)
    }

    pub fn remove(&mut self, key: &K) -> Option<i64> {
        self.counts.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.counts.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.counts.values().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, i64)> {
        self.counts.iter().map(|(k, v)| (k, *v))
    }
}

impl<K: Hash + Eq> FromIterator<(K, i64)> for Counter<K> {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Counter {
            counts: iter.into_iter().collect(),
        }
    }
}
