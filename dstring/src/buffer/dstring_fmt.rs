// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Formatted append. There are two ways in:
//!
//! 1. [`DString::append_fmt()`] (and the [`crate::dstr_append!`] macro) render into a
//!    fixed size scratch area of [`FMT_SCRATCH_SIZE`] bytes, then hand the result to
//!    [`DString::append()`]. Output that doesn't fit in the scratch area is dropped, and
//!    the returned [`FmtAppendOutcome`] says so.
//! 2. [`std::fmt::Write`] for [`DString`] is unbounded: a [write!] renders all of its
//!    pieces into a heap `String` first, then appends them w/ a single
//!    [`DString::append()`]. Use it when truncation is not acceptable. A failed
//!    [write!] leaves the buffer as it was.

use std::fmt::{self, Write};

use smallvec::SmallVec;

use super::{DString, FMT_SCRATCH_SIZE};
use crate::{DStringError, DStringResult, ok};

/// Inline scratch storage for [`DString::append_fmt()`]. Sized so that it never spills
/// to the heap.
pub type FmtScratch = SmallVec<[u8; FMT_SCRATCH_SIZE]>;

/// Result of a bounded formatted append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FmtAppendOutcome {
    /// Number of bytes that were appended to the buffer.
    pub appended: usize,
    /// `true` if the rendered output was longer than [`FMT_SCRATCH_SIZE`].
    pub truncated: bool,
}

#[derive(Default)]
struct BoundedScratch {
    acc: FmtScratch,
    truncated: bool,
}

impl Write for BoundedScratch {
    fn write_str(&mut self, text: &str) -> fmt::Result {
        let room = FMT_SCRATCH_SIZE - self.acc.len();
        let bytes = text.as_bytes();
        if bytes.len() > room {
            self.acc.extend_from_slice(&bytes[..room]);
            self.truncated = true;
        } else {
            self.acc.extend_from_slice(bytes);
        }
        Ok(())
    }
}

impl DString {
    /// Render `args` into a scratch area bounded by [`FMT_SCRATCH_SIZE`] bytes, and
    /// append the result. Truncation is byte based, so it may split a multi byte UTF-8
    /// sequence.
    ///
    /// # Errors
    ///
    /// - [`DStringError::InvalidArgument`] if a [`std::fmt::Display`] impl in `args`
    ///   returns an error. Nothing is appended.
    /// - Otherwise the same errors as [`DString::append()`].
    pub fn append_fmt(
        &mut self,
        args: fmt::Arguments<'_>,
    ) -> DStringResult<FmtAppendOutcome> {
        let mut scratch = BoundedScratch::default();
        fmt::write(&mut scratch, args).map_err(|_| {
            DStringError::invalid_argument("a formatting trait implementation failed")
        })?;

        self.append(scratch.acc.as_slice())?;

        ok!(FmtAppendOutcome {
            appended: scratch.acc.len(),
            truncated: scratch.truncated,
        })
    }
}

impl Write for DString {
    fn write_str(&mut self, text: &str) -> fmt::Result {
        self.append(text).map_err(|_| fmt::Error)
    }

    /// All or nothing. Nothing is appended unless every piece renders and fits.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        let mut rendered = String::new();
        rendered.write_fmt(args)?;
        self.write_str(&rendered)
    }
}
