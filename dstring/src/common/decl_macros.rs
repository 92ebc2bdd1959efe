// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Syntactic sugar for `Ok(())` or `Ok($value)`.
///
/// ```
/// use r3bl_dstring::{DStringResult, ok};
///
/// fn no_value() -> DStringResult<()> { ok!() }
/// fn with_value() -> DStringResult<u8> { ok!(42) }
///
/// assert_eq!(no_value(), Ok(()));
/// assert_eq!(with_value(), Ok(42));
/// ```
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Append formatted text to a [`crate::DString`]. This is whatever you would pass to
/// [format!] or [write!]. The rendered output is bounded by
/// [`crate::FMT_SCRATCH_SIZE`] bytes, see [`crate::DString::append_fmt()`].
///
/// ```
/// use r3bl_dstring::{DString, dstr_append};
///
/// let mut dstr = DString::initialize(0).unwrap();
/// let outcome = dstr_append!(dstr, "{}-{}", "foo", 42).unwrap();
/// assert_eq!(dstr, "foo-42");
/// assert!(!outcome.truncated);
/// ```
#[macro_export]
macro_rules! dstr_append {
    (
        $dstr:expr, $($format:tt)*
    ) => {{
        $dstr.append_fmt(format_args!($($format)*))
    }};
}
