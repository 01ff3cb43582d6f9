// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod snapshot;
mod tracker;

pub mod stub;

pub use snapshot::{ErrorDetail, ErrorEntry, ErrorSet, FieldSnapshot};
pub use tracker::{FieldStatusTracker, SnapshotSink};
