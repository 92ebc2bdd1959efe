// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Random sequences of operations against a buffer w/ a small capacity ceiling, so that
//! both the success and the failure paths get exercised. After every call:
//! - the buffer invariants hold,
//! - a failed call left the buffer exactly as it was,
//! - the content matches a plain `Vec<u8>` model.

use std::fmt::Write;

use proptest::prelude::*;
use r3bl_dstring::{DString, DStringConfig, PathSeparator, dstr_append};

const MAX_CAPACITY: usize = 32;

/// Bytes that matter to the text and path operations, plus a couple of plain letters.
const ALPHABET: &[u8] = b"ab /.\t\n";

#[derive(Debug, Clone)]
enum Op {
    Append(Vec<u8>),
    AppendN(Vec<u8>, usize),
    Resize(usize),
    Clear,
    Release,
    Trim,
    Replace(u8, u8),
    Remove(u8),
    PathAppend(Vec<u8>),
    FilenameSet(Vec<u8>),
    ExtSet(Vec<u8>),
    Fmt(u32),
    Write(u32),
}

fn arb_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..12)
}

fn arb_byte() -> impl Strategy<Value = u8> { prop::sample::select(ALPHABET) }

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => arb_bytes().prop_map(Op::Append),
        2 => (arb_bytes(), 0usize..14).prop_map(|(bytes, len)| Op::AppendN(bytes, len)),
        2 => (0..MAX_CAPACITY + 8).prop_map(Op::Resize),
        1 => Just(Op::Clear),
        1 => Just(Op::Release),
        2 => Just(Op::Trim),
        2 => (arb_byte(), arb_byte()).prop_map(|(from, to)| Op::Replace(from, to)),
        2 => arb_byte().prop_map(Op::Remove),
        2 => arb_bytes().prop_map(Op::PathAppend),
        1 => arb_bytes().prop_map(Op::FilenameSet),
        1 => arb_bytes().prop_map(Op::ExtSet),
        1 => any::<u32>().prop_map(Op::Fmt),
        1 => any::<u32>().prop_map(Op::Write),
    ]
}

#[derive(Debug, PartialEq)]
struct Snapshot {
    content: Vec<u8>,
    capacity: usize,
    initialized: bool,
}

fn snapshot(dstr: &DString) -> Snapshot {
    Snapshot {
        content: dstr.as_bytes().to_vec(),
        capacity: dstr.capacity(),
        initialized: dstr.is_initialized(),
    }
}

fn is_c_space(byte: u8) -> bool { matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r') }

/// Apply `op` to both the buffer and the model. Returns `false` if the buffer call
/// failed, in which case the model is left alone.
fn apply(dstr: &mut DString, model: &mut Vec<u8>, op: &Op) -> bool {
    let res = match op {
        Op::Append(bytes) => dstr.append(bytes).map(|()| model.extend_from_slice(bytes)),
        Op::AppendN(bytes, len) => dstr
            .append_n(bytes, *len)
            .map(|()| model.extend_from_slice(&bytes[..*len])),
        Op::Resize(capacity) => dstr.resize(*capacity).map(|()| model.truncate(*capacity)),
        Op::Clear => {
            dstr.clear();
            model.clear();
            Ok(())
        }
        Op::Release => {
            dstr.release();
            model.clear();
            Ok(())
        }
        Op::Trim => {
            dstr.trim();
            let start = model.iter().position(|&it| !is_c_space(it));
            let end = model.iter().rposition(|&it| !is_c_space(it));
            *model = match (start, end) {
                (Some(start), Some(end)) => model[start..=end].to_vec(),
                _ => vec![],
            };
            Ok(())
        }
        Op::Replace(from, to) => {
            let count = dstr.replace(*from, *to);
            assert_eq!(count, model.iter().filter(|&&it| it == *from).count());
            for byte in model.iter_mut().filter(|it| **it == *from) {
                *byte = *to;
            }
            Ok(())
        }
        Op::Remove(target) => {
            let count = dstr.remove(*target);
            let before = model.len();
            model.retain(|it| it != target);
            assert_eq!(count, before - model.len());
            Ok(())
        }
        // Path edits are covered by their own tests, the model just follows along.
        Op::PathAppend(segment) => dstr.path(PathSeparator::Slash).path_append(segment),
        Op::FilenameSet(name) => dstr.path(PathSeparator::Slash).filename_set(name),
        Op::ExtSet(ext) => dstr.path(PathSeparator::Slash).ext_set(ext),
        Op::Fmt(value) => dstr_append!(dstr, "[{value}]")
            .map(|_| model.extend_from_slice(format!("[{value}]").as_bytes())),
        Op::Write(value) => {
            return match write!(dstr, "<{value}|{value}>") {
                Ok(()) => {
                    model.extend_from_slice(format!("<{value}|{value}>").as_bytes());
                    true
                }
                Err(_) => false,
            };
        }
    };

    if matches!(op, Op::PathAppend(_) | Op::FilenameSet(_) | Op::ExtSet(_)) && res.is_ok()
    {
        *model = dstr.as_bytes().to_vec();
    }

    res.is_ok()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_random_sequences_keep_invariants(
        initial_capacity in 0..=MAX_CAPACITY,
        ops in prop::collection::vec(arb_op(), 0..40),
    ) {
        let config = DStringConfig::default().max_capacity(MAX_CAPACITY);
        let mut dstr = DString::initialize_with_config(initial_capacity, config).unwrap();
        let mut model = vec![];
        prop_assert!(dstr.invariants_hold());

        for op in &ops {
            let before = snapshot(&dstr);
            let succeeded = apply(&mut dstr, &mut model, op);

            prop_assert!(dstr.invariants_hold(), "{op:?} broke {dstr:?}");
            prop_assert!(dstr.capacity() <= MAX_CAPACITY);
            prop_assert_eq!(dstr.as_bytes_with_nul().last(), Some(&b'\0'));
            if !succeeded {
                prop_assert_eq!(&snapshot(&dstr), &before, "{:?} failed but changed the buffer", op);
            }
            prop_assert_eq!(dstr.as_bytes(), model.as_slice(), "after {:?}", op);
        }
    }
}
