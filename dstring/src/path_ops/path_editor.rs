// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Path mutations. Every setter computes the final length first and grows the buffer
//! (if needed) before truncating anything, so a failed allocation leaves the path as it
//! was.

use super::{PathSeparator, PathView};
use crate::{DOT_BYTE, DString, DStringResult};

/// Mutable path editor over a [`DString`], using an explicit [`PathSeparator`].
///
/// ```
/// use r3bl_dstring::{DString, PathSeparator};
///
/// let mut dstr = DString::initialize(0).unwrap();
/// let mut path = dstr.path(PathSeparator::Backslash);
/// path.path_append("C:").unwrap();
/// path.path_append("Users").unwrap();
/// path.filename_set("nadia").unwrap();
/// assert_eq!(dstr, r"C:\nadia");
/// ```
#[derive(Debug)]
pub struct PathEditor<'a> {
    dstr: &'a mut DString,
    separator: PathSeparator,
}

impl<'a> PathEditor<'a> {
    #[must_use]
    pub fn new(dstr: &'a mut DString, separator: PathSeparator) -> Self {
        Self { dstr, separator }
    }

    #[must_use]
    pub fn view(&self) -> PathView<'_> {
        PathView::new(self.dstr.as_bytes(), self.separator)
    }

    #[must_use]
    pub fn filename_get(&self) -> Option<&[u8]> { self.view().filename_get() }

    #[must_use]
    pub fn ext_get(&self) -> Option<&[u8]> { self.view().ext_get() }

    #[must_use]
    pub fn dirname_get(&self) -> Option<&[u8]> { self.view().dirname_get() }

    /// Join `segment` onto the path w/ exactly one separator between them.
    ///
    /// - Empty path: `segment` is appended as is (so `/usr` stays absolute).
    /// - Otherwise: leading separators of `segment` are skipped, and a separator is
    ///   added only if the path doesn't already end w/ one. This deliberately differs
    ///   from a plain "append one separator, then append `segment`": `foo` joined w/
    ///   `/bar` is `foo/bar`, not `foo//bar`, and `foo/` joined w/ `bar` is `foo/bar`.
    ///
    /// Duplicate separators that are already in the path are left alone.
    ///
    /// # Errors
    ///
    /// Same as [`DString::append()`]. The path is unchanged on error.
    pub fn path_append(&mut self, arg_segment: impl AsRef<[u8]>) -> DStringResult<()> {
        let segment = arg_segment.as_ref();
        let sep = self.separator.as_byte();

        let Some(last) = self.dstr.last_byte() else {
            return self.dstr.append(segment);
        };

        let skip = segment.iter().take_while(|&&it| it == sep).count();
        let segment = &segment[skip..];
        let end = self.dstr.len();

        if last == sep {
            self.dstr.splice_tail(end, &[segment])
        } else {
            self.dstr.splice_tail(end, &[&[sep], segment])
        }
    }

    /// Replace the filename (the last component) w/ `name`. If there is no filename
    /// (empty path, or it ends w/ a separator) `name` is simply appended.
    ///
    /// # Errors
    ///
    /// Same as [`DString::append()`]. The path is unchanged on error.
    pub fn filename_set(&mut self, arg_name: impl AsRef<[u8]>) -> DStringResult<()> {
        let cut_at = self
            .view()
            .filename_range()
            .map_or(self.dstr.len(), |range| range.start);
        self.dstr.splice_tail(cut_at, &[arg_name.as_ref()])
    }

    /// Replace the extension w/ `ext`. A `.` is added if `ext` is non empty and doesn't
    /// already start w/ one. An empty `ext` removes the current extension.
    ///
    /// # Errors
    ///
    /// Same as [`DString::append()`]. The path is unchanged on error.
    pub fn ext_set(&mut self, arg_ext: impl AsRef<[u8]>) -> DStringResult<()> {
        let ext = arg_ext.as_ref();
        let cut_at = self
            .view()
            .ext_range()
            .map_or(self.dstr.len(), |range| range.start);

        let needs_dot = ext.first().is_some_and(|&first| first != DOT_BYTE);
        if needs_dot {
            self.dstr.splice_tail(cut_at, &[&[DOT_BYTE], ext])
        } else {
            self.dstr.splice_tail(cut_at, &[ext])
        }
    }
}

impl DString {
    /// Edit this buffer as a path delimited by `separator`.
    pub fn path(&mut self, separator: PathSeparator) -> PathEditor<'_> {
        PathEditor::new(self, separator)
    }
}

/// Shorthands that use [`PathSeparator::NATIVE`].
impl DString {
    /// See [`PathEditor::path_append()`].
    ///
    /// # Errors
    ///
    /// Same as [`DString::append()`].
    pub fn path_append(&mut self, segment: impl AsRef<[u8]>) -> DStringResult<()> {
        self.path(PathSeparator::NATIVE).path_append(segment)
    }

    /// See [`PathEditor::filename_set()`].
    ///
    /// # Errors
    ///
    /// Same as [`DString::append()`].
    pub fn filename_set(&mut self, name: impl AsRef<[u8]>) -> DStringResult<()> {
        self.path(PathSeparator::NATIVE).filename_set(name)
    }

    /// See [`PathEditor::ext_set()`].
    ///
    /// # Errors
    ///
    /// Same as [`DString::append()`].
    pub fn ext_set(&mut self, ext: impl AsRef<[u8]>) -> DStringResult<()> {
        self.path(PathSeparator::NATIVE).ext_set(ext)
    }

    #[must_use]
    pub fn filename_get(&self) -> Option<&[u8]> {
        self.path_view(PathSeparator::NATIVE).filename_get()
    }

    #[must_use]
    pub fn ext_get(&self) -> Option<&[u8]> {
        self.path_view(PathSeparator::NATIVE).ext_get()
    }

    #[must_use]
    pub fn dirname_get(&self) -> Option<&[u8]> {
        self.path_view(PathSeparator::NATIVE).dirname_get()
    }
}
