// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// Error type for typed accessors on [`crate::Value`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// The value is not of the requested kind
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

/// Error type for decoding tagged documents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// A tag object whose payload has the wrong shape
    #[error("malformed `{tag}` tag: expected {expected}")]
    MalformedTag {
        tag: &'static str,
        expected: &'static str,
    },
    /// A bigint payload that is not a decimal integer
    #[error("invalid bigint literal: {0}")]
    InvalidBigInt(String),
    #[error(transparent)]
    Value(#[from] ValueError),
}
