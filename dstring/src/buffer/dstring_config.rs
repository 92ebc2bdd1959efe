// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tuning constants and the per-buffer [`DStringConfig`].

pub mod dstring_constants {
    /// Terminator written at `storage[length]`, and used to pad fresh capacity.
    pub const NULL_BYTE: u8 = b'\0';

    /// Extension delimiter for [`crate::PathView::ext_get()`].
    pub const DOT_BYTE: u8 = b'.';

    /// Largest content capacity a buffer may request by default. One byte below
    /// [`isize::MAX`] so that `capacity + 1` (the terminator) is still a valid
    /// allocation size.
    #[allow(clippy::cast_sign_loss)]
    pub const DEFAULT_MAX_CAPACITY: usize = isize::MAX as usize - 1;

    /// Upper bound on the rendered output of [`crate::DString::append_fmt()`]. Anything
    /// past this many bytes is dropped.
    pub const FMT_SCRATCH_SIZE: usize = 1024;
}

pub use dstring_constants::*;

/// Configuration carried by each [`crate::DString`].
///
/// `max_capacity` is a ceiling on content capacity. A request above it fails with
/// [`crate::DStringError::AllocationError`] just like an allocator refusal would, and
/// the buffer is left untouched.
///
/// ```
/// use r3bl_dstring::{DString, DStringConfig};
///
/// let config = DStringConfig::default().max_capacity(4);
/// let mut dstr = DString::initialize_with_config(2, config).unwrap();
/// dstr.append("abcd").unwrap();
/// assert!(dstr.append("e").is_err());
/// assert_eq!(dstr, "abcd");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DStringConfig {
    pub max_capacity: usize,
}

impl Default for DStringConfig {
    fn default() -> Self {
        Self {
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }
}

impl DStringConfig {
    #[must_use]
    pub fn max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity.min(DEFAULT_MAX_CAPACITY);
        self
    }
}
