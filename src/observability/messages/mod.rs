// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] for emission through `tracing` with structured fields.

use tracing::Span;

pub mod engine;
pub mod registry;
pub mod tracker;

/// Emission interface for structured log messages.
///
/// `log` emits the message at its intended level with structured fields;
/// `span` builds a span carrying the same fields for wrapping related work.
pub trait StructuredLog {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}
