// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run mixed sequences of operations through the public API and check the buffer
//! invariants after every single call.

use r3bl_dstring::{DString, DStringConfig, DStringError, PathSeparator, assert_eq2,
                   dstr_append};

enum Op {
    Append(&'static str),
    AppendN(&'static str, usize),
    Resize(usize),
    Clear,
    Release,
    Trim,
    Replace(u8, u8),
    Remove(u8),
    PathAppend(&'static str),
    FilenameSet(&'static str),
    ExtSet(&'static str),
    Fmt(usize),
}

fn apply(dstr: &mut DString, op: &Op) {
    match op {
        Op::Append(bytes) => dstr.append(bytes).unwrap(),
        Op::AppendN(bytes, len) => dstr.append_n(bytes.as_bytes(), *len).unwrap(),
        Op::Resize(capacity) => dstr.resize(*capacity).unwrap(),
        Op::Clear => dstr.clear(),
        Op::Release => dstr.release(),
        Op::Trim => dstr.trim(),
        Op::Replace(from, to) => {
            dstr.replace(*from, *to);
        }
        Op::Remove(target) => {
            dstr.remove(*target);
        }
        Op::PathAppend(segment) => {
            dstr.path(PathSeparator::Slash).path_append(segment).unwrap();
        }
        Op::FilenameSet(name) => {
            dstr.path(PathSeparator::Slash).filename_set(name).unwrap();
        }
        Op::ExtSet(ext) => dstr.path(PathSeparator::Slash).ext_set(ext).unwrap(),
        Op::Fmt(value) => {
            dstr_append!(dstr, "[{value}]").unwrap();
        }
    }
}

fn check(dstr: &DString) {
    assert!(dstr.invariants_hold(), "{dstr:?}");
    assert!(dstr.len() <= dstr.capacity());
    assert_eq2!(dstr.as_bytes_with_nul().last(), Some(&b'\0'));
    assert_eq2!(dstr.as_bytes_with_nul().len(), dstr.len() + 1);
}

#[test]
fn test_invariants_hold_after_every_operation() {
    let sequences: [&[Op]; 4] = [
        &[
            Op::Append("  foo "),
            Op::Append("bar\t"),
            Op::Trim,
            Op::Resize(2),
            Op::Append("xyz"),
            Op::Replace(b'x', b'y'),
            Op::Remove(b'y'),
            Op::Clear,
            Op::Append("again"),
        ],
        &[
            Op::Release,
            Op::Release,
            Op::Clear,
            Op::PathAppend("usr"),
            Op::PathAppend("lib"),
            Op::FilenameSet("libc.so"),
            Op::ExtSet("a"),
            Op::Trim,
            Op::Release,
            Op::Append("x"),
        ],
        &[
            Op::Resize(0),
            Op::AppendN("foobar", 3),
            Op::AppendN("foobar", 0),
            Op::Fmt(42),
            Op::Resize(1024),
            Op::Resize(1),
            Op::Remove(b'f'),
            Op::Remove(b'o'),
        ],
        &[
            Op::Append("   "),
            Op::Trim,
            Op::ExtSet("txt"),
            Op::PathAppend("/dir"),
            Op::Fmt(7),
            Op::Resize(3),
            Op::Clear,
            Op::Trim,
        ],
    ];

    for ops in sequences {
        let mut dstr = DString::initialize(4).unwrap();
        check(&dstr);
        for op in ops {
            apply(&mut dstr, op);
            check(&dstr);
        }
    }
}

#[test]
fn test_append_growth_is_exact() {
    let mut dstr = DString::initialize(4).unwrap();
    dstr.append("abc").unwrap();
    assert_eq2!(dstr.capacity(), 4);

    // 1 byte of room left, 5 needed.
    dstr.append("defgh").unwrap();
    assert_eq2!(dstr.capacity(), 8);
    assert_eq2!(dstr.len(), 8);

    // No room left, 1 needed.
    dstr.append("i").unwrap();
    assert_eq2!(dstr.capacity(), 9);
    assert_eq2!(dstr, "abcdefghi");
}

#[test]
fn test_resize_truncates_to_prefix() {
    let mut dstr = DString::try_from("foobarbazfoobarbaz").unwrap();
    dstr.resize(12).unwrap();
    assert_eq2!(dstr.len(), 12);
    assert_eq2!(dstr, "foobarbazfoo");
    assert_eq2!(dstr.as_c_str().to_bytes(), b"foobarbazfoo");
}

#[test]
fn test_release_is_idempotent() {
    let mut dstr = DString::try_from("foo").unwrap();
    for _ in 0..2 {
        dstr.release();
        assert!(!dstr.is_initialized());
        assert_eq2!(dstr.len(), 0);
        assert_eq2!(dstr.capacity(), 0);
        assert_eq2!(dstr.as_bytes(), b"");
        check(&dstr);
    }
}

#[test]
fn test_failures_leave_buffer_unchanged() {
    let config = DStringConfig::default().max_capacity(6);
    let mut dstr = DString::initialize_with_config(6, config).unwrap();
    dstr.append("foo").unwrap();
    let before = dstr.clone();

    let err = dstr.append("barbaz").unwrap_err();
    assert!(matches!(err, DStringError::AllocationError { requested: 9, limit: 6 }));
    assert_eq2!(dstr, before);
    assert_eq2!(dstr.capacity(), 6);

    assert!(dstr.resize(7).is_err());
    assert_eq2!(dstr, before);

    let err = dstr.append_n(b"ab", 3).unwrap_err();
    assert!(matches!(err, DStringError::InvalidArgument { .. }));
    assert_eq2!(dstr, before);

    check(&dstr);
}

#[test]
fn test_reference_text_operations() {
    let mut dstr = DString::try_from(" foo ").unwrap();
    dstr.trim();
    assert_eq2!(dstr, "foo");
    assert_eq2!(dstr.len(), 3);

    let mut dstr = DString::try_from("barbaz").unwrap();
    dstr.replace(b'a', b'o');
    assert_eq2!(dstr, "borboz");
    dstr.remove(b'o');
    assert_eq2!(dstr, "brbz");

    let dstr = DString::try_from("foobarfoo").unwrap();
    assert!(dstr.contains("bar"));
    assert!(!dstr.contains("baz"));
    assert!(DString::try_from("foo").unwrap().icontains("FOO"));
}
