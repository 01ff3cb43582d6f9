// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::observability::messages::registry::GlobalMessagesRegistered;
use crate::observability::messages::StructuredLog;

use super::{default_messages, MessageTemplate};

/// One precedence tier of the message registry: a mapping from error-kind
/// name to template. Kind lookup order inside a layer is irrelevant; only
/// the layer stacking carries precedence.
#[derive(Debug, Clone, Default)]
pub struct MessageLayer(HashMap<String, MessageTemplate>);

impl MessageLayer {
    /// Create a new empty layer
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the template for a kind
    pub fn insert(&mut self, kind: impl Into<String>, template: impl Into<MessageTemplate>) {
        self.0.insert(kind.into(), template.into());
    }

    /// Merge another layer into this one; later entries win per key.
    /// Merging the same layer twice is a no-op the second time.
    pub fn merge(&mut self, other: MessageLayer) {
        self.0.extend(other.0);
    }

    /// Get the template for a kind, if this layer defines it
    pub fn get(&self, kind: &str) -> Option<&MessageTemplate> {
        self.0.get(kind)
    }

    pub fn contains_kind(&self, kind: &str) -> bool {
        self.0.contains_key(kind)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, MessageTemplate)> for MessageLayer {
    fn from_iter<I: IntoIterator<Item = (String, MessageTemplate)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The application-wide message layer, shared across engine instances.
///
/// Passed into each engine by `Arc` at construction rather than living in
/// a hidden process-wide singleton; "configure once, read everywhere" is
/// preserved by sharing the same instance. Read-mostly: `register` is
/// expected once at startup, and callers serialize configuration-time
/// writes. The `RwLock` makes reads from many engines safe regardless.
#[derive(Debug, Default)]
pub struct GlobalMessages {
    layer: RwLock<MessageLayer>,
}

impl GlobalMessages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or override application-wide messages. Merges into the
    /// existing layer; later registrations win per key.
    pub fn register(&self, layer: MessageLayer) {
        let registered = layer.len();
        let total = {
            let mut guard = self.layer.write().unwrap_or_else(|e| e.into_inner());
            guard.merge(layer);
            guard.len()
        };
        GlobalMessagesRegistered { registered, total }.log();
    }

    /// The template this layer defines for a kind, if any
    pub fn resolve(&self, kind: &str) -> Option<MessageTemplate> {
        self.layer
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(kind)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.layer.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The layered template registry owned by one engine instance.
///
/// Layers in increasing precedence: seeded system defaults, the shared
/// application-wide layer, per-instance overrides. The effective template
/// for a kind comes from the highest-precedence layer defining it;
/// [`resolve`](MessageRegistry::resolve) returns `None` only when no layer
/// at all defines the kind — the resolver then synthesizes a fallback, so
/// resolution stays total without assuming the defaults are complete.
#[derive(Debug)]
pub struct MessageRegistry {
    defaults: MessageLayer,
    global: Arc<GlobalMessages>,
    overrides: MessageLayer,
}

impl MessageRegistry {
    /// Create a registry sharing the given application-wide layer, with
    /// the defaults seeded and no instance overrides.
    pub fn new(global: Arc<GlobalMessages>) -> Self {
        Self {
            defaults: default_messages(),
            global,
            overrides: MessageLayer::new(),
        }
    }

    /// Add or replace a single instance override
    pub fn override_message(&mut self, kind: impl Into<String>, template: impl Into<MessageTemplate>) {
        self.overrides.insert(kind, template);
    }

    /// Merge a whole layer of instance overrides; later merges win per key
    pub fn override_layer(&mut self, layer: MessageLayer) {
        self.overrides.merge(layer);
    }

    /// Highest-precedence template for a kind: instance overrides, then
    /// the application layer, then defaults.
    pub fn resolve(&self, kind: &str) -> Option<MessageTemplate> {
        self.overrides
            .get(kind)
            .cloned()
            .or_else(|| self.global.resolve(kind))
            .or_else(|| self.defaults.get(kind).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(template: Option<MessageTemplate>) -> String {
        template
            .expect("expected a template")
            .render(&json!({}))
            .expect("expected render to succeed")
    }

    #[test]
    fn resolve_favors_instance_then_application_then_defaults() {
        let global = Arc::new(GlobalMessages::new());
        let mut app_layer = MessageLayer::new();
        app_layer.insert("required", "App says: required");
        global.register(app_layer);

        let mut registry = MessageRegistry::new(Arc::clone(&global));

        // Defaults only
        assert_eq!(render(registry.resolve("pattern")), "Invalid format");
        // Application layer beats defaults
        assert_eq!(render(registry.resolve("required")), "App says: required");
        // Instance override beats both
        registry.override_message("required", "Instance says: required");
        assert_eq!(render(registry.resolve("required")), "Instance says: required");
    }

    #[test]
    fn unknown_kind_resolves_to_none() {
        let registry = MessageRegistry::new(Arc::new(GlobalMessages::new()));
        assert!(registry.resolve("customRule").is_none());
    }

    #[test]
    fn merging_the_same_layer_twice_is_idempotent() {
        let global = GlobalMessages::new();
        let mut layer = MessageLayer::new();
        layer.insert("required", "Fill this in");
        layer.insert("email", "Bad email");

        global.register(layer.clone());
        let after_once = global.len();
        global.register(layer);

        assert_eq!(global.len(), after_once);
        assert_eq!(
            global
                .resolve("required")
                .unwrap()
                .render(&json!({}))
                .unwrap(),
            "Fill this in"
        );
    }

    #[test]
    fn later_registrations_win_per_key() {
        let global = GlobalMessages::new();
        let mut first = MessageLayer::new();
        first.insert("required", "first");
        let mut second = MessageLayer::new();
        second.insert("required", "second");

        global.register(first);
        global.register(second);

        assert_eq!(
            global
                .resolve("required")
                .unwrap()
                .render(&json!({}))
                .unwrap(),
            "second"
        );
    }

    #[test]
    fn registration_is_visible_to_registries_sharing_the_layer() {
        let global = Arc::new(GlobalMessages::new());
        let registry = MessageRegistry::new(Arc::clone(&global));

        let mut layer = MessageLayer::new();
        layer.insert("required", "Registered later");
        global.register(layer);

        assert_eq!(render(registry.resolve("required")), "Registered later");
    }
}
