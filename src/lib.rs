// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // config + global message registration
pub mod engine;     // message resolution engine
pub mod errors;     // error handling
pub mod field;      // field snapshots + status tracking
pub mod observability;
pub mod registry;   // layered message templates
pub mod traits;     // unified abstractions
