// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for engine attachment and subscription lifecycle.

use thiserror::Error;

/// Errors that can occur while attaching an engine to a field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachError {
    /// Attach was called twice without an intervening detach. Reported
    /// synchronously to the caller; the existing attachment is untouched.
    #[error("engine is already attached to a field; detach it first")]
    AlreadyAttached,

    /// The bound group exposes no sub-control under the given name. The
    /// engine stays inert and nothing is ever displayed.
    #[error("no field named '{name}' was found in the bound group")]
    FieldNotFound { name: String },
}
