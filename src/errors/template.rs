// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for message template rendering.

use thiserror::Error;

/// A rendered template failed to produce text.
///
/// Never reaches the presentation boundary: the resolver catches it, logs
/// it, and substitutes the synthesized `"Error: <kind>"` fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The error detail payload lacks a field the template needs
    #[error("error detail is missing field '{field}'")]
    MissingDetail { field: String },

    /// The template function reported a failure of its own
    #[error("template failed to render: {reason}")]
    Failed { reason: String },
}
