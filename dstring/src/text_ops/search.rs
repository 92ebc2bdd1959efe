// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte and substring search. Everything here is a linear scan, and "not found" is
//! [`None`], not an error.
//!
//! The empty needle matches at offset `0` of every buffer (including an empty or
//! released one), so [`DString::contains()`] and [`DString::icontains()`] return `true`
//! for it.

use crate::DString;

impl DString {
    /// Offset of the first `byte`, leftmost match wins.
    #[must_use]
    pub fn index_of(&self, byte: u8) -> Option<usize> {
        self.as_bytes().iter().position(|&it| it == byte)
    }

    /// Offset of the last `byte`.
    #[must_use]
    pub fn rindex_of(&self, byte: u8) -> Option<usize> {
        self.as_bytes().iter().rposition(|&it| it == byte)
    }

    /// Offset of the leftmost occurrence of `needle`.
    #[must_use]
    pub fn find(&self, needle: impl AsRef<[u8]>) -> Option<usize> {
        find_with(self.as_bytes(), needle.as_ref(), |lhs, rhs| lhs == rhs)
    }

    /// Same as [`Self::find()`], comparing w/ ASCII case folding.
    #[must_use]
    pub fn ifind(&self, needle: impl AsRef<[u8]>) -> Option<usize> {
        find_with(self.as_bytes(), needle.as_ref(), <[u8]>::eq_ignore_ascii_case)
    }

    #[must_use]
    pub fn contains(&self, needle: impl AsRef<[u8]>) -> bool {
        self.find(needle).is_some()
    }

    #[must_use]
    pub fn icontains(&self, needle: impl AsRef<[u8]>) -> bool {
        self.ifind(needle).is_some()
    }
}

fn find_with(
    haystack: &[u8],
    needle: &[u8],
    is_match: impl Fn(&[u8], &[u8]) -> bool,
) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| is_match(window, needle))
}
