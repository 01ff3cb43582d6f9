// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::VisibilityConfig;
use crate::field::FieldSnapshot;

/// Decide whether any message should be shown for a snapshot.
///
/// Pure and total: no errors means nothing to show, regardless of flags or
/// config; otherwise each enabled gate must pass.
pub fn should_show(snapshot: &FieldSnapshot, config: &VisibilityConfig) -> bool {
    if snapshot.errors.is_empty() {
        return false;
    }
    (!config.require_touched || snapshot.touched) && (!config.require_dirty || snapshot.dirty)
}
