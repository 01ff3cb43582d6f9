// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::Arc;

use crate::errors::RenderError;
use crate::field::ErrorDetail;

/// A function-valued template, rendering text from an error's detail.
///
/// Fallible by design: an `Err` is the Rust rendering of "the template
/// threw" and is caught by the resolver, never propagated.
pub type RenderFn = Arc<dyn Fn(&ErrorDetail) -> Result<String, RenderError> + Send + Sync>;

/// A message template: static text or a function of the error detail.
///
/// The variant is tagged explicitly rather than duck-typed; dispatch
/// happens in [`MessageTemplate::render`].
#[derive(Clone)]
pub enum MessageTemplate {
    Static(String),
    Rendered(RenderFn),
}

impl MessageTemplate {
    /// Build a static-text template
    pub fn text(text: impl Into<String>) -> Self {
        Self::Static(text.into())
    }

    /// Build a function-valued template
    pub fn rendered<F>(render: F) -> Self
    where
        F: Fn(&ErrorDetail) -> Result<String, RenderError> + Send + Sync + 'static,
    {
        Self::Rendered(Arc::new(render))
    }

    /// Render to display text given the error's detail payload.
    ///
    /// Static text is returned verbatim; rendered templates are invoked
    /// with the detail.
    pub fn render(&self, detail: &ErrorDetail) -> Result<String, RenderError> {
        match self {
            Self::Static(text) => Ok(text.clone()),
            Self::Rendered(render) => render(detail),
        }
    }
}

impl fmt::Debug for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Self::Rendered(_) => f.debug_tuple("Rendered").field(&"<fn>").finish(),
        }
    }
}

impl From<&str> for MessageTemplate {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for MessageTemplate {
    fn from(text: String) -> Self {
        Self::Static(text)
    }
}

/// Pull a named field out of an error detail payload for interpolation.
///
/// Strings render unquoted, numbers and booleans render bare, anything
/// nested renders as JSON. A missing field is a render failure.
///
/// # Example
/// ```
/// use fieldhint::registry::detail_field;
/// use serde_json::json;
///
/// let detail = json!({"requiredLength": 8});
/// assert_eq!(detail_field(&detail, "requiredLength").unwrap(), "8");
/// ```
pub fn detail_field(detail: &ErrorDetail, field: &str) -> Result<String, RenderError> {
    let value = detail.get(field).ok_or_else(|| RenderError::MissingDetail {
        field: field.to_string(),
    })?;
    Ok(match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn static_template_renders_verbatim() {
        let template = MessageTemplate::text("This field is required");
        assert_eq!(
            template.render(&json!({})).unwrap(),
            "This field is required"
        );
    }

    #[test]
    fn rendered_template_receives_detail() {
        let template = MessageTemplate::rendered(|detail| {
            Ok(format!("Need {}+", detail_field(detail, "requiredLength")?))
        });
        assert_eq!(
            template.render(&json!({"requiredLength": 8})).unwrap(),
            "Need 8+"
        );
    }

    #[test]
    fn missing_detail_field_is_a_render_error() {
        let template = MessageTemplate::rendered(|detail| {
            Ok(format!("Need {}+", detail_field(detail, "requiredLength")?))
        });
        assert_eq!(
            template.render(&json!({})),
            Err(RenderError::MissingDetail {
                field: "requiredLength".to_string()
            })
        );
    }

    #[test]
    fn detail_field_formats_values_bare() {
        let detail = json!({"n": 8, "s": "abc", "b": true});
        assert_eq!(detail_field(&detail, "n").unwrap(), "8");
        assert_eq!(detail_field(&detail, "s").unwrap(), "abc");
        assert_eq!(detail_field(&detail, "b").unwrap(), "true");
    }
}
