// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Read only path queries. The content of a [`DString`] is treated as a path whose
//! components are delimited by a single [`PathSeparator`] byte.
//!
//! ```text
//! foo/bar/baz.tar.gz
//! ├─────┘ ├────────┘
//! dirname filename
//!                ├─┘
//!                ext (from the last `.` that is not before the last separator)
//! ```

use std::ops::Range;

use super::PathSeparator;
use crate::{DOT_BYTE, DString};

/// Borrowed path view over a byte slice.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PathView<'a> {
    pub bytes: &'a [u8],
    pub separator: PathSeparator,
}

impl<'a> PathView<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8], separator: PathSeparator) -> Self {
        Self { bytes, separator }
    }

    /// Everything after the last separator, or the whole path if there isn't one.
    /// [`None`] if the path is empty or ends w/ a separator.
    #[must_use]
    pub fn filename_get(&self) -> Option<&'a [u8]> {
        self.filename_range().map(|range| &self.bytes[range])
    }

    /// The extension, including its leading `.`. [`None`] if there is no `.` after the
    /// last separator, or if the only `.` starts the filename (a dotfile).
    #[must_use]
    pub fn ext_get(&self) -> Option<&'a [u8]> {
        self.ext_range().map(|range| &self.bytes[range])
    }

    /// Everything before the last separator. A file directly under the root gets the
    /// root separator itself. [`None`] if there is no separator.
    #[must_use]
    pub fn dirname_get(&self) -> Option<&'a [u8]> {
        self.dirname_range().map(|range| &self.bytes[range])
    }

    #[must_use]
    pub fn filename_range(&self) -> Option<Range<usize>> {
        let sep = self.separator.as_byte();
        match self.bytes.last() {
            None => None,
            Some(&last) if last == sep => None,
            Some(_) => {
                let start = self
                    .bytes
                    .iter()
                    .rposition(|&it| it == sep)
                    .map_or(0, |index| index + 1);
                Some(start..self.bytes.len())
            }
        }
    }

    /// Backward scan from the end that stops at the first separator or at the start of
    /// the buffer.
    #[must_use]
    pub fn ext_range(&self) -> Option<Range<usize>> {
        let sep = self.separator.as_byte();
        for (index, &byte) in self.bytes.iter().enumerate().rev() {
            if byte == sep {
                return None;
            }
            if byte == DOT_BYTE {
                let starts_filename = index == 0 || self.bytes[index - 1] == sep;
                if starts_filename {
                    return None;
                }
                return Some(index..self.bytes.len());
            }
        }
        None
    }

    #[must_use]
    pub fn dirname_range(&self) -> Option<Range<usize>> {
        let sep = self.separator.as_byte();
        let last_sep = self.bytes.iter().rposition(|&it| it == sep)?;
        Some(0..last_sep.max(1))
    }
}

impl DString {
    #[must_use]
    pub fn path_view(&self, separator: PathSeparator) -> PathView<'_> {
        PathView::new(self.as_bytes(), separator)
    }
}
