// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Path operations on [`crate::DString`]. The content is treated as a path string
//! delimited by a [`PathSeparator`] that is passed in, never detected.
//!
//! - [`PathView`] answers read only questions (filename, extension, dirname).
//! - [`PathEditor`] rewrites the tail of the path (append a segment, set the filename,
//!   set the extension).
//! - `DString` has shorthands for both that use [`PathSeparator::NATIVE`].

// Attach sources.
pub mod path_editor;
pub mod path_separator;
pub mod path_view;

// Re-export.
pub use path_editor::*;
pub use path_separator::*;
pub use path_view::*;
