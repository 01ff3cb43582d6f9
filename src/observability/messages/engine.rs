// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for engine lifecycle and snapshot processing events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Engine attached to a field and received its initial snapshot.
///
/// # Log Level
/// `debug!` - Lifecycle event
///
/// # Example
/// ```
/// use fieldhint::observability::messages::engine::EngineAttached;
/// use fieldhint::observability::messages::StructuredLog;
///
/// EngineAttached { epoch: 1 }.log();
/// ```
pub struct EngineAttached {
    pub epoch: u64,
}

impl Display for EngineAttached {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Engine attached to field (epoch {})", self.epoch)
    }
}

impl StructuredLog for EngineAttached {
    fn log(&self) {
        tracing::debug!(epoch = self.epoch, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("engine_attached", span_name = name, epoch = self.epoch)
    }
}

/// Engine detached from its field; the listener was released.
///
/// # Log Level
/// `debug!` - Lifecycle event
pub struct EngineDetached {
    pub epoch: u64,
}

impl Display for EngineDetached {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Engine detached from field (epoch {})", self.epoch)
    }
}

impl StructuredLog for EngineDetached {
    fn log(&self) {
        tracing::debug!(epoch = self.epoch, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("engine_detached", span_name = name, epoch = self.epoch)
    }
}

/// A field snapshot was processed into a display update.
///
/// # Log Level
/// `trace!` - High-frequency reactive event
///
/// # Example
/// ```
/// use fieldhint::observability::messages::engine::SnapshotProcessed;
/// use fieldhint::observability::messages::StructuredLog;
///
/// let msg = SnapshotProcessed {
///     error_count: 1,
///     touched: true,
///     dirty: false,
///     visible: true,
/// };
///
/// msg.log();
/// ```
pub struct SnapshotProcessed {
    pub error_count: usize,
    pub touched: bool,
    pub dirty: bool,
    pub visible: bool,
}

impl Display for SnapshotProcessed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processed snapshot: {} errors, touched={}, dirty={}, visible={}",
            self.error_count, self.touched, self.dirty, self.visible
        )
    }
}

impl StructuredLog for SnapshotProcessed {
    fn log(&self) {
        tracing::trace!(
            error_count = self.error_count,
            touched = self.touched,
            dirty = self.dirty,
            visible = self.visible,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "snapshot_processed",
            span_name = name,
            error_count = self.error_count,
            visible = self.visible,
        )
    }
}
