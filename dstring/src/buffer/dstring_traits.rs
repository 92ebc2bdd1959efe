// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Standard trait impls for [`DString`]. Equality only looks at the content bytes, never
//! at capacity or at whatever is left in storage past the terminator.

use std::fmt::{Debug, Display, Formatter, Result};

use super::DString;
use crate::{DStringError, DStringResult};

impl Debug for DString {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("DString")
            .field("content", &self.to_string_lossy())
            .field("length", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl Display for DString {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl PartialEq for DString {
    fn eq(&self, other: &Self) -> bool { self.as_bytes() == other.as_bytes() }
}

impl Eq for DString {}

impl PartialEq<[u8]> for DString {
    fn eq(&self, other: &[u8]) -> bool { self.as_bytes() == other }
}

impl PartialEq<&[u8]> for DString {
    fn eq(&self, other: &&[u8]) -> bool { self.as_bytes() == *other }
}

impl PartialEq<str> for DString {
    fn eq(&self, other: &str) -> bool { self.as_bytes() == other.as_bytes() }
}

impl PartialEq<&str> for DString {
    fn eq(&self, other: &&str) -> bool { self.as_bytes() == other.as_bytes() }
}

impl AsRef<[u8]> for DString {
    fn as_ref(&self) -> &[u8] { self.as_bytes() }
}

/// Capacity is exactly the length of the input.
impl TryFrom<&[u8]> for DString {
    type Error = DStringError;

    fn try_from(bytes: &[u8]) -> DStringResult<Self> {
        let mut it = DString::initialize(bytes.len())?;
        it.append(bytes)?;
        Ok(it)
    }
}

/// Capacity is exactly the length of the input.
impl TryFrom<&str> for DString {
    type Error = DStringError;

    fn try_from(text: &str) -> DStringResult<Self> { Self::try_from(text.as_bytes()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_eq_ignores_capacity() {
        let lhs = DString::try_from("foo").unwrap();
        let mut rhs = DString::initialize(64).unwrap();
        rhs.append("foo").unwrap();
        assert_eq2!(lhs, rhs);
        assert_eq2!(lhs, "foo");
        assert!(lhs == *"foo");
        assert!(lhs == b"foo"[..]);
    }

    #[test]
    fn test_eq_ignores_stale_bytes() {
        let mut lhs = DString::try_from("foobar").unwrap();
        lhs.truncate_to(3);
        let rhs = DString::try_from("foo").unwrap();
        assert_eq2!(lhs, rhs);
    }

    #[test]
    fn test_debug_and_display() {
        let dstr = DString::try_from("foo").unwrap();
        assert_eq2!(format!("{dstr}"), "foo");
        assert_eq2!(
            format!("{dstr:?}"),
            r#"DString { content: "foo", length: 3, capacity: 3 }"#
        );
    }

    #[test]
    fn test_try_from_sets_exact_capacity() {
        let dstr = DString::try_from("hello").unwrap();
        assert_eq2!(dstr.len(), 5);
        assert_eq2!(dstr.capacity(), 5);

        let empty = DString::try_from("").unwrap();
        assert!(empty.is_initialized());
        assert_eq2!(empty.capacity(), 0);
    }
}
