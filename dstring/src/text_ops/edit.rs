// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::DString;

impl DString {
    /// Rewrite every `from` byte to `to`, in place. Returns how many were rewritten.
    pub fn replace(&mut self, from: u8, to: u8) -> usize {
        let mut count = 0;
        for byte in self.content_mut().iter_mut().filter(|it| **it == from) {
            *byte = to;
            count += 1;
        }
        count
    }

    /// Delete every `target` byte, keeping the order of what's left. Single left to
    /// right compaction pass. Returns how many were removed.
    pub fn remove(&mut self, target: u8) -> usize {
        let content = self.content_mut();
        let old_length = content.len();

        let mut write_index = 0;
        for read_index in 0..old_length {
            let byte = content[read_index];
            if byte != target {
                content[write_index] = byte;
                write_index += 1;
            }
        }

        self.truncate_to(write_index);
        old_length - write_index
    }
}
