// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for test grouping
//!
//! Every record must point back at a line of the input.

#![no_main]

use libfuzzer_sys::fuzz_target;

use tap_core::parse;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let line_count = input.split('\n').count();
        for group in parse(input) {
            for record in &group.tests {
                assert!(record.line < line_count);
            }
        }
    }
});
