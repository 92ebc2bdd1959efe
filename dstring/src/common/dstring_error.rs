// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types for [`DString`] operations. See [`DStringError`] for details.
//!
//! "Not found" results (eg: [`DString::index_of()`], [`DString::filename_get()`]) are
//! not errors. They are returned as [`None`] and are a normal control flow branch.
//!
//! [`DString`]: crate::DString
//! [`DString::index_of()`]: crate::DString::index_of
//! [`DString::filename_get()`]: crate::DString::filename_get

/// Type alias to make it easy to work with [`DStringError`].
pub type DStringResult<T> = Result<T, DStringError>;

/// Errors from fallible [`DString`] operations.
///
/// Every variant leaves the buffer in the exact state it was in before the call. The
/// caller decides what to do with the error; the buffer never logs, prints, or panics.
///
/// | Variant               | Cause                                                    | Recoverable? |
/// | :-------------------- | :------------------------------------------------------- | :----------- |
/// | [`AllocationError`]   | Allocator refused, or request is above `max_capacity`    | Yes          |
/// | [`CapacityOverflow`]  | `length + additional` does not fit in a [`usize`]        | Yes          |
/// | [`InvalidArgument`]   | Malformed input, eg: a length longer than its slice      | Yes          |
/// | [`InvalidUtf8`]       | Content requested as `&str` is not valid UTF-8           | Yes          |
///
/// [`AllocationError`]: Self::AllocationError
/// [`CapacityOverflow`]: Self::CapacityOverflow
/// [`DString`]: crate::DString
/// [`InvalidArgument`]: Self::InvalidArgument
/// [`InvalidUtf8`]: Self::InvalidUtf8
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum DStringError {
    /// Storage for `requested` content bytes (plus the terminator) could not be
    /// allocated.
    #[error("Failed to allocate storage for {requested} bytes (limit: {limit})")]
    #[diagnostic(
        code(r3bl_dstring::allocation),
        help(
            "The buffer is unchanged. Free some memory, or raise \
             `DStringConfig::max_capacity` if the limit is too low"
        )
    )]
    AllocationError { requested: usize, limit: usize },

    /// The capacity computation itself overflowed.
    #[error("Capacity overflow: {length} + {additional} does not fit in usize")]
    #[diagnostic(code(r3bl_dstring::capacity_overflow))]
    CapacityOverflow { length: usize, additional: usize },

    /// Malformed input.
    #[error("Invalid argument: {reason}")]
    #[diagnostic(code(r3bl_dstring::invalid_argument))]
    InvalidArgument { reason: String },

    /// Content is not valid UTF-8. Use [`DString::to_string_lossy()`] if that is ok.
    ///
    /// [`DString::to_string_lossy()`]: crate::DString::to_string_lossy
    #[error("Content is not valid UTF-8")]
    #[diagnostic(
        code(r3bl_dstring::invalid_utf8),
        help("Use `DString::as_bytes()` or `DString::to_string_lossy()` instead")
    )]
    InvalidUtf8 {
        #[source]
        source: std::str::Utf8Error,
    },
}

impl DStringError {
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Returns `true` for [`Self::AllocationError`] and [`Self::CapacityOverflow`], the
    /// two ways that growing the buffer can fail.
    #[must_use]
    pub fn is_allocation_failure(&self) -> bool {
        matches!(
            self,
            Self::AllocationError { .. } | Self::CapacityOverflow { .. }
        )
    }
}
