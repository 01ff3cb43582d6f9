// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::{detail_field, MessageLayer, MessageTemplate};

/// Default set of error messages seeded into every registry.
///
/// These cover the common validation kinds and are used when no
/// application-wide or instance override is registered. The exact texts are
/// an external contract; changing them breaks hosting applications that
/// assert on displayed messages.
pub fn default_messages() -> MessageLayer {
    let mut layer = MessageLayer::new();
    layer.insert("required", MessageTemplate::text("This field is required"));
    layer.insert(
        "email",
        MessageTemplate::text("Please enter a valid email address"),
    );
    layer.insert(
        "minlength",
        MessageTemplate::rendered(|detail| {
            Ok(format!(
                "Minimum length is {} characters",
                detail_field(detail, "requiredLength")?
            ))
        }),
    );
    layer.insert(
        "maxlength",
        MessageTemplate::rendered(|detail| {
            Ok(format!(
                "Maximum length is {} characters",
                detail_field(detail, "requiredLength")?
            ))
        }),
    );
    layer.insert("pattern", MessageTemplate::text("Invalid format"));
    layer.insert(
        "min",
        MessageTemplate::rendered(|detail| {
            Ok(format!("Minimum value is {}", detail_field(detail, "min")?))
        }),
    );
    layer.insert(
        "max",
        MessageTemplate::rendered(|detail| {
            Ok(format!("Maximum value is {}", detail_field(detail, "max")?))
        }),
    );
    layer
}
