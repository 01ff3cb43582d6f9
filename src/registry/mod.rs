// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod defaults;
mod layers;
mod template;

pub use defaults::default_messages;
pub use layers::{GlobalMessages, MessageLayer, MessageRegistry};
pub use template::{detail_field, MessageTemplate, RenderFn};
