// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use clap::ValueEnum;

/// The single byte that delimits path components. It is a value that gets passed in to
/// [`crate::PathView`] and [`crate::PathEditor`], rather than something detected at
/// runtime. [`Self::NATIVE`] is picked at build time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum PathSeparator {
    /// `/`
    Slash,
    /// `\`
    Backslash,
}

impl PathSeparator {
    #[cfg(windows)]
    pub const NATIVE: Self = Self::Backslash;
    #[cfg(not(windows))]
    pub const NATIVE: Self = Self::Slash;

    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Slash => b'/',
            Self::Backslash => b'\\',
        }
    }
}

impl Default for PathSeparator {
    fn default() -> Self { Self::NATIVE }
}

impl Display for PathSeparator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", char::from(self.as_byte()))
    }
}
