// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::number::MAX_SAFE_INTEGER;

use core::sync::atomic::{AtomicU64, Ordering};

static LAST_ID: AtomicU64 = AtomicU64::new(0);

fn successor(id: u64) -> u64 {
    id % MAX_SAFE_INTEGER + 1
}

/// Process-wide positive id, distinct from the previous one.
///
/// Ids count up from 1 and wrap back to 1 after `MAX_SAFE_INTEGER`.
pub fn next_id() -> u64 {
    let previous = LAST_ID
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |id| {
            Some(successor(id))
        })
        .unwrap_or_else(|id| id);
    successor(previous)
}
