// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for application config loading and validation.

use thiserror::Error;

/// Errors that can occur while loading the YAML application config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A message override maps a kind to an empty string
    #[error("message override for '{kind}' is empty")]
    EmptyMessage { kind: String },

    /// A message override uses an empty error-kind name
    #[error("message override has an empty error-kind name")]
    EmptyKind,
}
