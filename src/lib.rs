// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

// Use README.md as crate documentation.
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

#[cfg(feature = "arc")]
pub(crate) use std::sync::Arc as Rc;
#[cfg(not(feature = "arc"))]
pub(crate) use std::rc::Rc;

mod checker;
pub mod document;
mod equal;
mod error;
mod identity;
mod mismatch;
mod number;
mod object;
mod observer;
pub mod utils;
mod value;

pub use checker::{
    classify, is_keyed_map, is_keyed_set, is_not_nullish, is_nullish, is_object,
    is_plain_mapping, is_sequence, type_of, Category, TypeTag,
};
pub use equal::{is_deep_equal, is_deep_equal_with};
pub use error::{DocumentError, ValueError};
pub use identity::{Function, Symbol};
pub use mismatch::{first_mismatch, Mismatch, MismatchKind, PathSegment};
pub use object::{Object, Property, PropertyKey};
pub use observer::{Observer, Segment, VisitCounter};
pub use value::Value;

pub use indexmap::{IndexMap, IndexSet};
pub use num_bigint::BigInt;
