// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::errors::AttachError;
use crate::observability::messages::tracker::{FieldLookupFailed, ListenerReleased};
use crate::observability::messages::StructuredLog;
use crate::traits::{BindableField, FieldGroup, ListenerHandle};

use super::FieldSnapshot;

/// Receives each normalized snapshot the tracker publishes.
pub type SnapshotSink = Arc<dyn Fn(FieldSnapshot) + Send + Sync>;

/// Adapts an external bindable field into a stream of [`FieldSnapshot`]s.
///
/// On attach the tracker registers a listener on the field's status-change
/// stream and synchronously publishes an initial snapshot, so no update is
/// missed between construction and first subscription. Every subsequent
/// firing re-reads field state and publishes a fresh snapshot, strictly in
/// emission order. `detach` unregisters the listener on the same call; no
/// snapshot is published afterward.
#[derive(Default)]
pub struct FieldStatusTracker {
    subscription: Option<Subscription>,
}

struct Subscription {
    field: Arc<dyn BindableField>,
    handle: ListenerHandle,
}

impl FieldStatusTracker {
    /// Create a new detached tracker
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Attach to a field: register the change listener, then publish the
    /// initial snapshot. Attaching twice without detaching is a programmer
    /// error and returns [`AttachError::AlreadyAttached`] with no state
    /// change.
    pub fn attach(
        &mut self,
        field: Arc<dyn BindableField>,
        publish: SnapshotSink,
    ) -> Result<(), AttachError> {
        if self.subscription.is_some() {
            return Err(AttachError::AlreadyAttached);
        }

        let listener_field = Arc::clone(&field);
        let listener_publish = Arc::clone(&publish);
        let handle = field.on_status_change(Box::new(move || {
            listener_publish(read(listener_field.as_ref()));
        }));
        self.subscription = Some(Subscription {
            field: Arc::clone(&field),
            handle,
        });

        // Initial state, published synchronously before attach returns
        publish(read(field.as_ref()));
        Ok(())
    }

    /// Resolve `name` inside `group` and attach to the resulting field.
    ///
    /// A name that does not resolve to a sub-control is a configuration
    /// error: it is logged once and returned as
    /// [`AttachError::FieldNotFound`], leaving the tracker inert.
    pub fn attach_named(
        &mut self,
        group: &dyn FieldGroup,
        name: &str,
        publish: SnapshotSink,
    ) -> Result<(), AttachError> {
        if self.subscription.is_some() {
            return Err(AttachError::AlreadyAttached);
        }

        let field = match group.field(name) {
            Some(field) => field,
            None => {
                FieldLookupFailed { name }.log();
                return Err(AttachError::FieldNotFound {
                    name: name.to_string(),
                });
            }
        };
        self.attach(field, publish)
    }

    /// Release the listener. Idempotent; safe to call while detached.
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.field.off(subscription.handle);
            ListenerReleased.log();
        }
    }
}

fn read(field: &dyn BindableField) -> FieldSnapshot {
    FieldSnapshot {
        errors: field.errors(),
        touched: field.is_touched(),
        dirty: field.is_dirty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::stub::{StubField, StubForm};
    use serde_json::json;
    use std::sync::Mutex;

    fn collecting_sink() -> (SnapshotSink, Arc<Mutex<Vec<FieldSnapshot>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink_seen = Arc::clone(&seen);
        let sink: SnapshotSink = Arc::new(move |snapshot| {
            sink_seen.lock().unwrap().push(snapshot);
        });
        (sink, seen)
    }

    #[test]
    fn attach_publishes_initial_snapshot_synchronously() {
        let field = Arc::new(StubField::new());
        field.set_touched(true);
        field.set_errors(
            vec![("required".to_string(), json!({}))]
                .into_iter()
                .collect(),
        );

        let (sink, seen) = collecting_sink();
        let mut tracker = FieldStatusTracker::new();
        tracker.attach(field, sink).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].touched);
        assert!(seen[0].errors.contains("required"));
    }

    #[test]
    fn republishes_on_every_status_change() {
        let field = Arc::new(StubField::new());
        let (sink, seen) = collecting_sink();
        let mut tracker = FieldStatusTracker::new();
        tracker.attach(Arc::clone(&field) as Arc<dyn BindableField>, sink)
            .unwrap();

        field.set_dirty(true);
        field.set_errors(vec![("email".to_string(), json!({}))].into_iter().collect());

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3); // initial + two changes
        assert!(seen[2].dirty);
        assert!(seen[2].errors.contains("email"));
    }

    #[test]
    fn attach_twice_is_rejected_without_state_change() {
        let field = Arc::new(StubField::new());
        let (sink, seen) = collecting_sink();
        let mut tracker = FieldStatusTracker::new();
        tracker
            .attach(Arc::clone(&field) as Arc<dyn BindableField>, Arc::clone(&sink))
            .unwrap();

        let result = tracker.attach(field, sink);
        assert_eq!(result, Err(AttachError::AlreadyAttached));
        assert_eq!(seen.lock().unwrap().len(), 1); // only the first initial snapshot
    }

    #[test]
    fn detach_stops_publication() {
        let field = Arc::new(StubField::new());
        let (sink, seen) = collecting_sink();
        let mut tracker = FieldStatusTracker::new();
        tracker.attach(Arc::clone(&field) as Arc<dyn BindableField>, sink)
            .unwrap();
        tracker.detach();

        field.set_touched(true);
        field.fire();

        assert_eq!(seen.lock().unwrap().len(), 1);
        assert_eq!(field.listener_count(), 0);
    }

    #[test]
    fn detach_is_idempotent() {
        let mut tracker = FieldStatusTracker::new();
        tracker.detach();
        assert!(!tracker.is_attached());
    }

    #[test]
    fn unknown_name_reports_field_not_found() {
        let form = StubForm::new();
        let (sink, seen) = collecting_sink();
        let mut tracker = FieldStatusTracker::new();

        let result = tracker.attach_named(&form, "missing", sink);
        assert_eq!(
            result,
            Err(AttachError::FieldNotFound {
                name: "missing".to_string()
            })
        );
        assert!(!tracker.is_attached());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn attach_named_resolves_sub_control() {
        let mut form = StubForm::new();
        let field = form.add("email");
        field.set_errors(vec![("email".to_string(), json!({}))].into_iter().collect());

        let (sink, seen) = collecting_sink();
        let mut tracker = FieldStatusTracker::new();
        tracker.attach_named(&form, "email", sink).unwrap();

        assert!(tracker.is_attached());
        assert!(seen.lock().unwrap()[0].errors.contains("email"));
    }
}
