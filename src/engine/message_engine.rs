// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::VisibilityConfig;
use crate::errors::AttachError;
use crate::field::{FieldSnapshot, FieldStatusTracker, SnapshotSink};
use crate::observability::messages::engine::{EngineAttached, EngineDetached, SnapshotProcessed};
use crate::observability::messages::StructuredLog;
use crate::registry::{GlobalMessages, MessageLayer, MessageRegistry, MessageTemplate};
use crate::traits::{BindableField, FieldGroup};

use super::{resolve_message, should_show};

/// The presentation boundary: what the rendering layer consumes.
///
/// `text` is blank whenever `visible` is false; a hidden message never
/// carries stale text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageDisplay {
    pub visible: bool,
    pub text: String,
}

/// Push callback invoked with the display pair on every processed snapshot.
pub type DisplaySink = Arc<dyn Fn(&MessageDisplay) + Send + Sync>;

/// The validation message resolution engine.
///
/// One engine instance binds to exactly one field and moves through
/// `Detached` → `Attached` → `Detached`. While attached, every snapshot
/// published by the field status tracker is gated by the visibility policy
/// and, when visible, resolved against the layered message registry; the
/// resulting `(visible, text)` pair is readable via [`display`] and pushed
/// to an optional sink.
///
/// Configuration changes (`override_message`, `set_visibility`, global
/// registrations) do not trigger recomputation on their own; they take
/// effect on the next snapshot. Instance overrides registered before the
/// first attach are therefore always visible on the first post-attach
/// snapshot.
///
/// All work happens synchronously inside the field's notification callback
/// or inside direct calls; snapshots are processed strictly in emission
/// order. Notifications from a listener registered under a previous
/// attachment are discarded via an attachment epoch, so a misbehaving
/// field that keeps firing after `off` cannot resurrect a torn-down
/// subscription.
///
/// [`display`]: MessageEngine::display
pub struct MessageEngine {
    inner: Arc<Mutex<EngineInner>>,
}

struct EngineInner {
    registry: MessageRegistry,
    config: VisibilityConfig,
    tracker: FieldStatusTracker,
    latest: Option<FieldSnapshot>,
    display: MessageDisplay,
    sink: Option<DisplaySink>,
    epoch: u64,
}

impl EngineInner {
    /// Recompute the display pair from a snapshot. Returns the sink and
    /// the fresh display so the caller can publish after unlocking.
    fn apply(&mut self, snapshot: FieldSnapshot) -> Option<(DisplaySink, MessageDisplay)> {
        let visible = should_show(&snapshot, &self.config);
        let text = if visible {
            resolve_message(&snapshot.errors, &self.registry)
        } else {
            String::new()
        };

        SnapshotProcessed {
            error_count: snapshot.errors.len(),
            touched: snapshot.touched,
            dirty: snapshot.dirty,
            visible,
        }
        .log();

        self.display = MessageDisplay { visible, text };
        self.latest = Some(snapshot);
        self.sink
            .as_ref()
            .map(|sink| (Arc::clone(sink), self.display.clone()))
    }
}

impl MessageEngine {
    /// Create a detached engine sharing the given application-wide message
    /// layer, with default visibility gates.
    pub fn new(global: Arc<GlobalMessages>) -> Self {
        Self::with_config(global, VisibilityConfig::default())
    }

    /// Create a detached engine with explicit visibility gates
    pub fn with_config(global: Arc<GlobalMessages>, config: VisibilityConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(EngineInner {
                registry: MessageRegistry::new(global),
                config,
                tracker: FieldStatusTracker::new(),
                latest: None,
                display: MessageDisplay::default(),
                sink: None,
                epoch: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, EngineInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Add or replace a per-instance message override. Takes effect on the
    /// next snapshot; registered before attach it is visible from the
    /// first snapshot on.
    pub fn override_message(
        &self,
        kind: impl Into<String>,
        template: impl Into<MessageTemplate>,
    ) {
        self.lock().registry.override_message(kind, template);
    }

    /// Merge a whole layer of instance overrides
    pub fn override_layer(&self, layer: MessageLayer) {
        self.lock().registry.override_layer(layer);
    }

    /// Replace the visibility gates; takes effect on the next snapshot
    pub fn set_visibility(&self, config: VisibilityConfig) {
        self.lock().config = config;
    }

    pub fn visibility(&self) -> VisibilityConfig {
        self.lock().config
    }

    /// Install the push sink for display updates. The sink fires on every
    /// processed snapshot and must not call back into this engine.
    pub fn set_sink(&self, sink: impl Fn(&MessageDisplay) + Send + Sync + 'static) {
        self.lock().sink = Some(Arc::new(sink));
    }

    /// Current display pair for the presentation layer
    pub fn display(&self) -> MessageDisplay {
        self.lock().display.clone()
    }

    /// The most recently processed snapshot, if any
    pub fn latest_snapshot(&self) -> Option<FieldSnapshot> {
        self.lock().latest.clone()
    }

    pub fn is_attached(&self) -> bool {
        self.lock().tracker.is_attached()
    }

    /// Attach to a field directly. Publishes the initial snapshot before
    /// returning. Fails with [`AttachError::AlreadyAttached`] if a
    /// subscription already exists.
    pub fn attach(&self, field: Arc<dyn BindableField>) -> Result<(), AttachError> {
        let (epoch, publish) = self.begin_attach()?;
        let mut tracker = FieldStatusTracker::new();
        tracker.attach(field, publish)?;
        self.finish_attach(epoch, tracker);
        Ok(())
    }

    /// Attach to the named sub-control of a group.
    ///
    /// An unknown name is a configuration error: it is logged, returned as
    /// [`AttachError::FieldNotFound`], and the engine stays inert with
    /// `visible` false.
    pub fn attach_named(&self, group: &dyn FieldGroup, name: &str) -> Result<(), AttachError> {
        let (epoch, publish) = self.begin_attach()?;
        let mut tracker = FieldStatusTracker::new();
        tracker.attach_named(group, name, publish)?;
        self.finish_attach(epoch, tracker);
        Ok(())
    }

    /// Tear down the subscription. The listener is released before this
    /// returns; no snapshot is processed afterward. Idempotent, and the
    /// engine may be re-attached later as if fresh.
    pub fn detach(&self) {
        let (tracker, epoch) = {
            let mut inner = self.lock();
            if !inner.tracker.is_attached() {
                return;
            }
            inner.epoch += 1;
            inner.latest = None;
            (std::mem::take(&mut inner.tracker), inner.epoch)
        };
        let mut tracker = tracker;
        tracker.detach();
        EngineDetached { epoch }.log();
    }

    /// Reserve a new attachment epoch and build its snapshot sink.
    ///
    /// The lock is not held across the tracker attach that follows: the
    /// initial snapshot flows through the sink synchronously, and the sink
    /// takes the lock itself.
    fn begin_attach(&self) -> Result<(u64, SnapshotSink), AttachError> {
        let epoch = {
            let mut inner = self.lock();
            if inner.tracker.is_attached() {
                return Err(AttachError::AlreadyAttached);
            }
            inner.epoch += 1;
            inner.epoch
        };

        let weak = Arc::downgrade(&self.inner);
        let publish: SnapshotSink = Arc::new(move |snapshot| {
            let Some(inner) = weak.upgrade() else {
                return; // engine already dropped
            };
            let published = {
                let mut guard = inner.lock().unwrap_or_else(|e| e.into_inner());
                if guard.epoch != epoch {
                    return; // stale listener from a previous attachment
                }
                guard.apply(snapshot)
            };
            if let Some((sink, display)) = published {
                sink(&display);
            }
        });

        Ok((epoch, publish))
    }

    fn finish_attach(&self, epoch: u64, tracker: FieldStatusTracker) {
        self.lock().tracker = tracker;
        EngineAttached { epoch }.log();
    }
}
