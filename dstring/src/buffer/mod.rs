// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod dstring_config;
pub mod dstring_core;
pub mod dstring_fmt;
pub mod dstring_traits;

// Re-export.
pub use dstring_config::*;
pub use dstring_core::*;
pub use dstring_fmt::*;
