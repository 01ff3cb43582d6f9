// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for template registration and rendering events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A template failed to render and the fallback text was substituted.
///
/// # Log Level
/// `warn!` - Degraded output, not fatal
///
/// # Example
/// ```
/// use fieldhint::observability::messages::registry::TemplateRenderFailed;
/// use fieldhint::observability::messages::StructuredLog;
/// use fieldhint::errors::RenderError;
///
/// let error = RenderError::MissingDetail { field: "requiredLength".to_string() };
/// let msg = TemplateRenderFailed {
///     kind: "minlength",
///     error: &error,
/// };
///
/// msg.log();
/// ```
pub struct TemplateRenderFailed<'a> {
    pub kind: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for TemplateRenderFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Template for '{}' failed to render, falling back: {}",
            self.kind, self.error
        )
    }
}

impl StructuredLog for TemplateRenderFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            kind = self.kind,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "template_render_failed",
            span_name = name,
            kind = self.kind,
            error = %self.error,
        )
    }
}

/// Application-wide messages were registered.
///
/// # Log Level
/// `info!` - Configuration event, expected once at startup
pub struct GlobalMessagesRegistered {
    pub registered: usize,
    pub total: usize,
}

impl Display for GlobalMessagesRegistered {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Registered {} global messages ({} total)",
            self.registered, self.total
        )
    }
}

impl StructuredLog for GlobalMessagesRegistered {
    fn log(&self) {
        tracing::info!(
            registered = self.registered,
            total = self.total,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "global_messages_registered",
            span_name = name,
            registered = self.registered,
            total = self.total,
        )
    }
}
