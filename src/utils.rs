// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Small collection and formatting helpers.

mod counter;
mod default_map;
mod format_bytes;
mod group_by;
mod id;

pub use counter::Counter;
pub use default_map::DefaultMap;
pub use format_bytes::format_bytes;
pub use group_by::{map_group_by, object_group_by};
pub use id::next_id;
