// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::consts::{DEFAULT_REQUIRE_DIRTY, DEFAULT_REQUIRE_TOUCHED};
use crate::errors::ConfigError;
use crate::registry::{GlobalMessages, MessageLayer, MessageTemplate};

/// Gates controlling when a resolved message is actually shown.
///
/// Static per engine instance: set at construction, reconfigurable, but
/// not itself reactive to field state. A change takes effect on the next
/// snapshot.
///
/// # Fields
/// * `require_touched` - only show once the field was focused and blurred
/// * `require_dirty` - only show once the value changed from its initial
///
/// # Example
/// ```yaml
/// visibility:
///   require_touched: true
///   require_dirty: false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityConfig {
    #[serde(default = "default_require_touched")]
    pub require_touched: bool,
    #[serde(default = "default_require_dirty")]
    pub require_dirty: bool,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            require_touched: DEFAULT_REQUIRE_TOUCHED,
            require_dirty: DEFAULT_REQUIRE_DIRTY,
        }
    }
}

fn default_require_touched() -> bool {
    DEFAULT_REQUIRE_TOUCHED
}

fn default_require_dirty() -> bool {
    DEFAULT_REQUIRE_DIRTY
}

/// Application-level configuration, typically loaded from a YAML file at
/// startup: default visibility gates plus static message overrides for the
/// application-wide layer. Function-valued templates cannot be expressed
/// in YAML; those are registered in code.
///
/// # Example
/// ```yaml
/// visibility:
///   require_touched: true
///   require_dirty: false
/// messages:
///   required: "Don't leave this empty"
///   email: "That doesn't look like an email address"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub visibility: VisibilityConfig,
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

impl AppConfig {
    /// The configured message overrides as a registry layer
    pub fn message_layer(&self) -> MessageLayer {
        self.messages
            .iter()
            .map(|(kind, text)| (kind.clone(), MessageTemplate::text(text)))
            .collect()
    }

    /// Register the configured overrides into the application-wide layer
    pub fn apply(&self, global: &GlobalMessages) {
        global.register(self.message_layer());
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: AppConfig = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file
///
/// Validation rejects message overrides with empty kind names or empty
/// texts; either one silently blanks a message at runtime, which is far
/// harder to diagnose than a startup failure.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let cfg = load_config(path)?;

    for (kind, text) in &cfg.messages {
        if kind.trim().is_empty() {
            return Err(ConfigError::EmptyKind);
        }
        if text.trim().is_empty() {
            return Err(ConfigError::EmptyMessage { kind: kind.clone() });
        }
    }

    Ok(cfg)
}
