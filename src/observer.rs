// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::checker::{classify, Category};
use crate::mismatch::MismatchKind;
use crate::object::PropertyKey;
use crate::utils::Counter;
use crate::value::Value;

/// Step taken when the comparison descends into a pair of children.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment<'a> {
    /// Position in a sequence.
    Index(usize),
    /// Key of a keyed map.
    Entry(&'a Value),
    /// Own enumerable property of a plain mapping.
    Property(&'a PropertyKey),
}

/// Hooks into a deep comparison.
///
/// `visit` fires for every compared pair, the root included. `enter` and
/// `leave` bracket every descent into children. `mismatch` fires only where a
/// pair is decided unequal on its own, never for a parent that merely inherits
/// a child's result. All hooks default to doing nothing.
pub trait Observer {
    fn visit(&mut self, _left: &Value, _right: &Value) {}

    fn enter(&mut self, _segment: Segment<'_>) {}

    fn leave(&mut self) {}

    fn mismatch(&mut self, _left: &Value, _right: &Value, _kind: MismatchKind) {}
}

impl Observer for () {}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn visit(&mut self, left: &Value, right: &Value) {
        (**self).visit(left, right)
    }

    fn enter(&mut self, segment: Segment<'_>) {
        (**self).enter(segment)
    }

    fn leave(&mut self) {
        (**self).leave()
    }

    fn mismatch(&mut self, left: &Value, right: &Value, kind: MismatchKind) {
        (**self).mismatch(left, right, kind)
    }
}

/// Counts compared pairs by the category of their left side.
#[derive(Clone, Debug, Default)]
pub struct VisitCounter {
    counts: Counter<Category>,
}

impl VisitCounter {
    pub fn new() -> VisitCounter {
        VisitCounter::default()
    }

    pub fn get(&self, category: Category) -> i64 {
        self.counts.get(&category)
    }

    pub fn total(&self) -> i64 {
        self.counts.values().sum()
    }

    /// Counts in the order categories were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (Category, i64)> + '_ {
        self.counts.iter().map(|(c, n)| (*c, n))
    }
}

impl Observer for VisitCounter {
    fn visit(&mut self, left: &Value, _right: &Value) {
        self.counts.increment(classify(left));
    }
}
