// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Explains why two values are not deeply equal.

use crate::checker::{Category, TypeTag};
use crate::equal::is_deep_equal_with;
use crate::object::PropertyKey;
use crate::observer::{Observer, Segment};
use crate::value::Value;

use core::fmt;

/// Reason a pair of values was found unequal.
#[derive(Clone, Debug, PartialEq)]
pub enum MismatchKind {
    /// Same category but different values.
    Unequal,
    /// One side is null or undefined and the other is not the same value.
    Nullish,
    TypeTag {
        left: TypeTag,
        right: TypeTag,
    },
    Category {
        left: Category,
        right: Category,
    },
    Length {
        left: usize,
        right: usize,
    },
    Size {
        left: usize,
        right: usize,
    },
    PropertyCount {
        left: usize,
        right: usize,
    },
    MissingElement(Value),
    MissingKey(Value),
    MissingProperty(PropertyKey),
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MismatchKind::Unequal => f.write_str("values differ"),
            MismatchKind::Nullish => f.write_str("null or undefined on one side"),
            MismatchKind::TypeTag { left, right } => write!(f, "type {left} vs {right}"),
            MismatchKind::Category { left, right } => write!(f, "{left} vs {right}"),
            MismatchKind::Length { left, right } => write!(f, "length {left} vs {right}"),
            MismatchKind::Size { left, right } => write!(f, "size {left} vs {right}"),
            MismatchKind::PropertyCount { left, right } => {
                write!(f, "property count {left} vs {right}")
            }
            MismatchKind::MissingElement(v) => write!(f, "element {v} missing on the right"),
            MismatchKind::MissingKey(v) => write!(f, "key {v} missing on the right"),
            MismatchKind::MissingProperty(k) => write!(f, "property {k} missing on the right"),
        }
    }
}

/// Owned counterpart of [`Segment`].
#[derive(Clone, Debug, PartialEq)]
pub enum PathSegment {
    Index(usize),
    Entry(Value),
    Property(PropertyKey),
}

impl From<Segment<'_>> for PathSegment {
    fn from(segment: Segment<'_>) -> Self {
        match segment {
            Segment::Index(idx) => PathSegment::Index(idx),
            Segment::Entry(key) => PathSegment::Entry(key.clone()),
            Segment::Property(key) => PathSegment::Property(key.clone()),
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathSegment::Index(idx) => write!(f, "[{idx}]"),
            PathSegment::Entry(key) => write!(f, ".get({key})"),
            PathSegment::Property(PropertyKey::String(name)) if is_identifier(name) => {
                write!(f, ".{name}")
            }
            PathSegment::Property(PropertyKey::String(name)) => {
                write!(f, "[{}]", Value::from(name.as_ref()))
            }
            PathSegment::Property(PropertyKey::Symbol(s)) => write!(f, "[{s}]"),
        }
    }
}

/// First point at which two values were found to differ.
#[derive(Clone, Debug, PartialEq)]
pub struct Mismatch {
    /// Steps from the roots to the differing pair.
    pub path: Vec<PathSegment>,
    pub kind: MismatchKind,
    pub left: Value,
    pub right: Value,
}

impl Mismatch {
    /// The path written as `$`, followed by one accessor per step.
    pub fn location(&self) -> String {
        let mut location = String::from("$");
        for segment in &self.path {
            location.push_str(&segment.to_string());
        }
        location
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.location(), self.kind)
    }
}

#[derive(Default)]
struct Recorder {
    path: Vec<PathSegment>,
    found: Option<Mismatch>,
}

impl Observer for Recorder {
    fn enter(&mut self, segment: Segment<'_>) {
        self.path.push(segment.into());
    }

    fn leave(&mut self) {
        self.path.pop();
    }

    fn mismatch(&mut self, left: &Value, right: &Value, kind: MismatchKind) {
        if self.found.is_none() {
            self.found = Some(Mismatch {
                path: self.path.clone(),
                kind,
                left: left.clone(),
                right: right.clone(),
            });
        }
    }
}

/// Where and why `a` and `b` differ, or `None` when they are deeply equal.
pub fn first_mismatch(a: &Value, b: &Value) -> Option<Mismatch> {
    let mut recorder = Recorder::default();
    if is_deep_equal_with(a, b, &mut recorder) {
        return None;
    }
    if let Some(m) = &recorder.found {
        log::debug!("values differ at {}: {}", m.location(), m.kind);
    }
    recorder.found
}
