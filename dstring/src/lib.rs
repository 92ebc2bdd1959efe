// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_dstring
//!
//! A growable byte string buffer that is always null-terminated, so its content can be
//! handed to C as a `const char *` at any time, and that can be edited in place as text
//! or as a filesystem path.
//!
//! There are three layers:
//!
//! 1. [`buffer`]: the [`DString`] engine. It owns the storage, grows it exactly (no
//!    doubling), and keeps `storage[length] == '\0'` after every operation. Growth is
//!    fallible and has the strong guarantee: on [`DStringError::AllocationError`] the
//!    buffer is unchanged.
//! 2. [`text_ops`]: trim, search, replace, and remove. These never allocate.
//! 3. [`path_ops`]: join path segments, get or set the filename and the extension. The
//!    separator is injected via [`PathSeparator`].
//!
//! ```
//! use r3bl_dstring::{DString, PathSeparator};
//!
//! let mut dstr = DString::initialize(0).unwrap();
//! let mut path = dstr.path(PathSeparator::Slash);
//! path.path_append("foo").unwrap();
//! path.path_append("bar").unwrap();
//! path.path_append("baz").unwrap();
//! path.ext_set(".c").unwrap();
//! assert_eq!(dstr, "foo/bar/baz.c");
//!
//! dstr.path(PathSeparator::Slash).filename_set("a.out").unwrap();
//! assert_eq!(dstr, "foo/bar/a.out");
//! assert_eq!(dstr.as_c_str().to_bytes(), b"foo/bar/a.out");
//! ```
//!
//! # Errors
//!
//! All fallible operations return [`DStringResult`]. The library never logs, prints, or
//! panics on failure. The [`log`] module and [`setup_default_miette_global_report_handler`]
//! are for binaries (see `src/bin/dstring_demo.rs`).

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod buffer;
pub mod common;
pub mod log;
pub mod path_ops;
pub mod text_ops;

// Re-export.
pub use buffer::*;
pub use common::*;
pub use log::*;
pub use path_ops::*;
pub use text_ops::*;
