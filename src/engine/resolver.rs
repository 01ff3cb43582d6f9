// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::field::ErrorSet;
use crate::observability::messages::registry::TemplateRenderFailed;
use crate::observability::messages::StructuredLog;
use crate::registry::MessageRegistry;

/// The synthesized message for a kind no layer defines
pub fn fallback_text(kind: &str) -> String {
    format!("Error: {kind}")
}

/// Resolve the display text for an error set.
///
/// Selects the first error in the set's canonical (report) order and
/// renders its effective template. Resolution is total and never panics:
/// an undefined kind gets the synthesized fallback, and a failing rendered
/// template is caught, logged, and replaced by the same fallback.
///
/// An empty set resolves to an empty string; the visibility policy keeps
/// that from ever being displayed.
pub fn resolve_message(errors: &ErrorSet, registry: &MessageRegistry) -> String {
    let Some(entry) = errors.first() else {
        return String::new();
    };

    match registry.resolve(&entry.kind) {
        Some(template) => match template.render(&entry.detail) {
            Ok(text) => text,
            Err(error) => {
                TemplateRenderFailed {
                    kind: &entry.kind,
                    error: &error,
                }
                .log();
                fallback_text(&entry.kind)
            }
        },
        None => fallback_text(&entry.kind),
    }
}
