// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod attach;
mod config;
mod template;

pub use attach::AttachError;
pub use config::ConfigError;
pub use template::RenderError;
