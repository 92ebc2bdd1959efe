// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`DString`] buffer engine. This is the only code that owns storage, decides when
//! to grow it, and writes the terminator.
//!
//! # Storage layout
//!
//! ```text
//! capacity = 8, length = 5
//!
//! index:   0   1   2   3   4   5    6    7    8
//! storage: [h] [e] [l] [l] [o] [\0] [\0] [\0] [\0]
//!                              ↑ terminator       ↑ storage[capacity]
//! ```
//!
//! - `storage.len()` is always `capacity + 1` while the buffer is initialized, and `0`
//!   once it has been released.
//! - `storage[length]` is always [`NULL_BYTE`].
//! - Freshly grown capacity is filled with [`NULL_BYTE`]. Bytes between the terminator
//!   and `storage[capacity]` may be stale after a shrinking edit (trim, remove,
//!   truncate), and are never exposed by accessors.
//!
//! # Growth policy
//!
//! Growth is exact: when `length + n > capacity`, the new capacity is `length + n`, not
//! a doubling. Growth goes through [`Vec::try_reserve_exact`], so an allocator refusal
//! is reported as [`DStringError::AllocationError`] and the buffer is left exactly as it
//! was (storage, length, and capacity).

use std::{borrow::Cow, ffi::CStr};

use super::{DStringConfig, NULL_BYTE};
use crate::{DStringError, DStringResult, ok};

/// Growable, always null-terminated byte string.
///
/// ```
/// use r3bl_dstring::DString;
///
/// let mut dstr = DString::initialize(10).unwrap();
/// dstr.append("foo").unwrap();
/// dstr.append("bar").unwrap();
/// assert_eq!(dstr, "foobar");
/// assert_eq!(dstr.capacity(), 10);
/// assert_eq!(dstr.as_bytes_with_nul(), b"foobar\0");
/// ```
#[derive(Clone)]
pub struct DString {
    storage: Vec<u8>,
    length: usize,
    capacity: usize,
    config: DStringConfig,
}

impl Default for DString {
    fn default() -> Self { Self::new_released(DStringConfig::default()) }
}

// Lifecycle.
impl DString {
    /// A buffer in the released state: no storage, zero length, zero capacity. Calling
    /// [`Self::append()`] or [`Self::resize()`] on it allocates fresh storage.
    #[must_use]
    pub fn new_released(config: DStringConfig) -> Self {
        Self {
            storage: Vec::new(),
            length: 0,
            capacity: 0,
            config,
        }
    }

    /// Allocate `capacity + 1` bytes, set the length to `0`, and write the terminator.
    ///
    /// # Errors
    ///
    /// Returns [`DStringError::AllocationError`] if the storage can't be allocated.
    pub fn initialize(capacity: usize) -> DStringResult<Self> {
        Self::initialize_with_config(capacity, DStringConfig::default())
    }

    /// Same as [`Self::initialize()`] w/ a specific [`DStringConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`DStringError::AllocationError`] if the storage can't be allocated, or
    /// if `capacity` is above [`DStringConfig::max_capacity`].
    pub fn initialize_with_config(
        capacity: usize,
        config: DStringConfig,
    ) -> DStringResult<Self> {
        let mut it = Self::new_released(config);
        it.resize(capacity)?;
        ok!(it)
    }

    /// Reallocate storage to hold exactly `new_capacity` content bytes.
    ///
    /// Content up to `min(length, new_capacity)` is preserved. If `new_capacity` is
    /// smaller than the current length, the content is silently truncated.
    ///
    /// # Errors
    ///
    /// Returns [`DStringError::AllocationError`] or [`DStringError::CapacityOverflow`].
    /// In both cases the buffer is unchanged.
    pub fn resize(&mut self, new_capacity: usize) -> DStringResult<()> {
        let new_storage_len = self.check_capacity_request(new_capacity)?;
        let old_storage_len = self.storage.len();

        if new_storage_len > old_storage_len {
            self.storage
                .try_reserve_exact(new_storage_len - old_storage_len)
                .map_err(|_| DStringError::AllocationError {
                    requested: new_capacity,
                    limit: self.config.max_capacity,
                })?;
            // Can't reallocate, the space was reserved above.
            self.storage.resize(new_storage_len, NULL_BYTE);
        } else {
            self.storage.truncate(new_storage_len);
            self.storage.shrink_to_fit();
        }

        self.capacity = new_capacity;
        self.length = self.length.min(new_capacity);
        self.storage[self.length] = NULL_BYTE;

        ok!()
    }

    /// Free the storage and return to the released state. Safe to call any number of
    /// times.
    pub fn release(&mut self) {
        self.storage = Vec::new();
        self.length = 0;
        self.capacity = 0;
    }

    /// Set the length to `0` w/out giving back any capacity. No-op on a released buffer.
    pub fn clear(&mut self) { self.truncate_to(0); }

    /// Append `bytes` at the end, growing to exactly `length + bytes.len()` if needed.
    /// Appending nothing is a no-op that always succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`DStringError::AllocationError`] or [`DStringError::CapacityOverflow`]
    /// if growing fails. The buffer is unchanged in that case.
    pub fn append(&mut self, arg_bytes: impl AsRef<[u8]>) -> DStringResult<()> {
        let bytes = arg_bytes.as_ref();
        if bytes.is_empty() {
            return ok!();
        }
        self.splice_tail(self.length, &[bytes])
    }

    /// Append the first `len` bytes of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`DStringError::InvalidArgument`] if `len` is past the end of `bytes`,
    /// otherwise the same errors as [`Self::append()`].
    pub fn append_n(&mut self, bytes: &[u8], len: usize) -> DStringResult<()> {
        match bytes.get(..len) {
            Some(prefix) => self.append(prefix),
            None => Err(DStringError::invalid_argument(format!(
                "len {len} is out of range for a slice of {} bytes",
                bytes.len()
            ))),
        }
    }
}

// Crate internal mutation primitives, used by the text and path operations.
impl DString {
    /// Shrink the length to `new_length` and rewrite the terminator. Never reallocates.
    /// Does nothing if `new_length` is not smaller than the current length.
    pub(crate) fn truncate_to(&mut self, new_length: usize) {
        if new_length > self.length || self.storage.is_empty() {
            return;
        }
        self.length = new_length;
        self.storage[new_length] = NULL_BYTE;
    }

    /// Mutable view of the content bytes (excludes the terminator).
    pub(crate) fn content_mut(&mut self) -> &mut [u8] {
        if self.storage.is_empty() {
            return &mut [];
        }
        &mut self.storage[..self.length]
    }

    /// Replace everything from `cut_at` to the end w/ the concatenation of `parts`.
    ///
    /// Any growth happens **before** the truncation, so a failed allocation leaves the
    /// buffer untouched rather than half edited.
    pub(crate) fn splice_tail(
        &mut self,
        cut_at: usize,
        parts: &[&[u8]],
    ) -> DStringResult<()> {
        let cut_at = cut_at.min(self.length);

        let mut required = cut_at;
        for part in parts {
            required = required.checked_add(part.len()).ok_or(
                DStringError::CapacityOverflow {
                    length: required,
                    additional: part.len(),
                },
            )?;
        }

        if required > self.capacity || self.storage.is_empty() {
            self.resize(required.max(self.length))?;
        }

        self.truncate_to(cut_at);
        for part in parts {
            let end = self.length + part.len();
            self.storage[self.length..end].copy_from_slice(part);
            self.length = end;
        }
        self.storage[self.length] = NULL_BYTE;

        ok!()
    }

    /// Returns the storage length (`new_capacity + 1`) if the request is allowed.
    fn check_capacity_request(&self, new_capacity: usize) -> DStringResult<usize> {
        if new_capacity > self.config.max_capacity {
            return Err(DStringError::AllocationError {
                requested: new_capacity,
                limit: self.config.max_capacity,
            });
        }
        new_capacity
            .checked_add(1)
            .ok_or(DStringError::CapacityOverflow {
                length: new_capacity,
                additional: 1,
            })
    }
}

// Accessors.
impl DString {
    /// Number of content bytes, excluding the terminator.
    #[must_use]
    pub fn len(&self) -> usize { self.length }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.length == 0 }

    /// Number of content bytes the storage can hold w/out reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    /// `false` after [`Self::release()`] (or for [`Self::default()`]).
    #[must_use]
    pub fn is_initialized(&self) -> bool { !self.storage.is_empty() }

    #[must_use]
    pub fn config(&self) -> DStringConfig { self.config }

    /// The content bytes. Length is authoritative, so this may contain interior NUL
    /// bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        if self.storage.is_empty() {
            return &[];
        }
        &self.storage[..self.length]
    }

    /// The content bytes followed by the terminator.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        if self.storage.is_empty() {
            return &[NULL_BYTE];
        }
        &self.storage[..=self.length]
    }

    /// View for C style consumers. This stops at the first NUL byte, so interior NULs
    /// in the content shorten the result.
    #[must_use]
    pub fn as_c_str(&self) -> &CStr {
        CStr::from_bytes_until_nul(self.as_bytes_with_nul()).unwrap_or_default()
    }

    /// # Errors
    ///
    /// Returns [`DStringError::InvalidUtf8`] if the content is not valid UTF-8.
    pub fn to_str(&self) -> DStringResult<&str> {
        std::str::from_utf8(self.as_bytes())
            .map_err(|source| DStringError::InvalidUtf8 { source })
    }

    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    #[must_use]
    pub fn last_byte(&self) -> Option<u8> { self.as_bytes().last().copied() }

    /// Consistency check of the buffer: `length <= capacity`, the storage holds exactly
    /// `capacity + 1` bytes, and `storage[length]` is the null terminator. A released
    /// buffer has no storage and zero length and capacity.
    ///
    /// Always `true` for a buffer that was only changed through this API, including
    /// after a failed call.
    #[must_use]
    pub fn invariants_hold(&self) -> bool {
        if self.storage.is_empty() {
            return self.length == 0 && self.capacity == 0;
        }
        self.length <= self.capacity
            && self.storage.len() == self.capacity + 1
            && self.storage[self.length] == NULL_BYTE
    }
}
