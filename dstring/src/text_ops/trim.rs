// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Whitespace trimming. None of these reallocate; they only move the terminator, and
//! [`DString::trim_left()`] shifts the remaining content down to offset `0`.

use crate::DString;

/// The C `isspace()` set in the "C" locale. This differs from
/// [`u8::is_ascii_whitespace()`], which leaves out vertical tab (`\x0B`).
#[must_use]
pub fn is_c_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0B' | b'\x0C')
}

impl DString {
    /// Drop trailing whitespace.
    pub fn trim_right(&mut self) {
        let keep = self
            .as_bytes()
            .iter()
            .rposition(|&byte| !is_c_space(byte))
            .map_or(0, |last_non_space| last_non_space + 1);
        self.truncate_to(keep);
    }

    /// Drop leading whitespace, shifting the rest of the content to offset `0`.
    pub fn trim_left(&mut self) {
        let leading = self
            .as_bytes()
            .iter()
            .take_while(|&&byte| is_c_space(byte))
            .count();
        if leading == 0 {
            return;
        }

        let new_length = self.len() - leading;
        // Overlapping regions are fine w/ copy_within.
        self.content_mut().copy_within(leading.., 0);
        self.truncate_to(new_length);
    }

    /// Drop whitespace from both ends. Right first, so the left shift moves less.
    pub fn trim(&mut self) {
        self.trim_right();
        self.trim_left();
    }
}
