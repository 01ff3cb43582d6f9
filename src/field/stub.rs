// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Stub bindable fields for testing and demo purposes.
//!
//! `StubField` plays the role of the external validation engine: tests and
//! the demo binary mutate its state and it fires its status-change
//! listeners the way a real engine would.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::traits::{BindableField, FieldGroup, ListenerHandle, StatusListener};

use super::ErrorSet;

/// A simulated bindable field with directly settable status.
///
/// Every `set_*` call fires the registered listeners, mimicking a
/// validation engine that re-validates on each state change. `fire` is also
/// public for driving notifications manually.
#[derive(Default)]
pub struct StubField {
    state: Mutex<StubState>,
    listeners: Mutex<HashMap<u64, Arc<dyn Fn() + Send + Sync>>>,
    next_listener: AtomicU64,
}

#[derive(Default)]
struct StubState {
    errors: ErrorSet,
    touched: bool,
    dirty: bool,
}

impl StubField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_errors(&self, errors: ErrorSet) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).errors = errors;
        self.fire();
    }

    pub fn set_touched(&self, touched: bool) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).touched = touched;
        self.fire();
    }

    pub fn set_dirty(&self, dirty: bool) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).dirty = dirty;
        self.fire();
    }

    /// Fire all registered listeners.
    ///
    /// Listeners are cloned out before invocation so a listener may call
    /// back into this field without deadlocking.
    pub fn fire(&self) {
        let listeners: Vec<Arc<dyn Fn() + Send + Sync>> = self
            .listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .cloned()
            .collect();
        for listener in listeners {
            listener();
        }
    }

    /// Number of currently registered listeners. Lets tests assert that
    /// detach actually released the subscription.
    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

impl BindableField for StubField {
    fn errors(&self) -> ErrorSet {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .errors
            .clone()
    }

    fn is_touched(&self) -> bool {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).touched
    }

    fn is_dirty(&self) -> bool {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).dirty
    }

    fn on_status_change(&self, listener: StatusListener) -> ListenerHandle {
        let id = self.next_listener.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id, Arc::from(listener));
        ListenerHandle::new(id)
    }

    fn off(&self, handle: ListenerHandle) {
        self.listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&handle.raw());
    }
}

/// A simulated form: a group of named stub fields.
#[derive(Default)]
pub struct StubForm {
    fields: HashMap<String, Arc<StubField>>,
}

impl StubForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named field, returning a handle for driving its state
    pub fn add(&mut self, name: impl Into<String>) -> Arc<StubField> {
        let field = Arc::new(StubField::new());
        self.fields.insert(name.into(), Arc::clone(&field));
        field
    }
}

impl FieldGroup for StubForm {
    fn field(&self, name: &str) -> Option<Arc<dyn BindableField>> {
        self.fields
            .get(name)
            .map(|field| Arc::clone(field) as Arc<dyn BindableField>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn listeners_fire_on_state_changes() {
        let field = StubField::new();
        let fired = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&fired);
        field.on_status_change(Box::new(move || {
            counter.fetch_add(1, Ordering::Relaxed);
        }));

        field.set_touched(true);
        field.set_errors(
            vec![("required".to_string(), json!({}))]
                .into_iter()
                .collect(),
        );

        assert_eq!(fired.load(Ordering::Relaxed), 2);
        assert!(field.is_touched());
        assert!(field.errors().contains("required"));
    }

    #[test]
    fn off_unregisters_the_listener() {
        let field = StubField::new();
        let fired = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&fired);
        let handle = field.on_status_change(Box::new(move || {
            counter.fetch_add(1, Ordering::Relaxed);
        }));

        field.off(handle);
        field.fire();

        assert_eq!(fired.load(Ordering::Relaxed), 0);
        assert_eq!(field.listener_count(), 0);
    }

    #[test]
    fn form_resolves_only_known_names() {
        let mut form = StubForm::new();
        form.add("email");

        assert!(form.field("email").is_some());
        assert!(form.field("password").is_none());
    }
}
