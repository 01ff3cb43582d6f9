// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod message_engine;
mod resolver;
mod visibility;


pub use message_engine::{DisplaySink, MessageDisplay, MessageEngine};
pub use resolver::{fallback_text, resolve_message};
pub use visibility::should_show;
