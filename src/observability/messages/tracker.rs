// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for field lookup and subscription lifecycle events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A named sub-control lookup failed during attach.
///
/// # Log Level
/// `warn!` - Configuration error; the engine stays inert
///
/// # Example
/// ```
/// use fieldhint::observability::messages::tracker::FieldLookupFailed;
/// use fieldhint::observability::messages::StructuredLog;
///
/// FieldLookupFailed { name: "email" }.log();
/// ```
pub struct FieldLookupFailed<'a> {
    pub name: &'a str,
}

impl Display for FieldLookupFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "No field found with name '{}'", self.name)
    }
}

impl StructuredLog for FieldLookupFailed<'_> {
    fn log(&self) {
        tracing::warn!(name = self.name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("field_lookup_failed", span_name = name, field = self.name)
    }
}

/// A status-change listener was released on detach.
///
/// # Log Level
/// `trace!` - Lifecycle detail
pub struct ListenerReleased;

impl Display for ListenerReleased {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Status-change listener released")
    }
}

impl StructuredLog for ListenerReleased {
    fn log(&self) {
        tracing::trace!("{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!("listener_released", span_name = name)
    }
}
