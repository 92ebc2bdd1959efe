// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Text operations on [`crate::DString`]. These modules extend `DString` through
//! inherent method impls, built only on the buffer engine's reads and in-place
//! mutations. They never allocate.

// Attach sources.
pub mod edit;
pub mod search;
pub mod trim;

// Re-export.
pub use trim::is_c_space;
