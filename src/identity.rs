// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Values that are equal only to themselves.
//!
//! A [`Symbol`] or [`Function`] carries a process-unique id. Clones share the id,
//! so a clone is the "same reference"; two separately created handles never
//! compare equal, whatever their description or name.

use crate::utils::next_id;
use crate::Rc;

use core::fmt;
use core::hash::{Hash, Hasher};

#[derive(Clone)]
pub struct Symbol {
    id: u64,
    description: Option<Rc<str>>,
}

impl Symbol {
    pub fn new(description: Option<&str>) -> Symbol {
        Symbol {
            id: next_id(),
            description: description.map(Rc::from),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or_default())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}#{}", self.id)
    }
}

/// An opaque callable. Only its identity takes part in comparisons.
#[derive(Clone)]
pub struct Function {
    id: u64,
    name: Rc<str>,
}

impl Function {
    pub fn new(name: &str) -> Function {
        Function {
            id: next_id(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Function {}

impl Hash for Function {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.name.is_empty() {
            f.write_str("[Function (anonymous)]")
        } else {
            write!(f, "[Function: {}]", self.name)
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}#{}", self.id)
    }
}
