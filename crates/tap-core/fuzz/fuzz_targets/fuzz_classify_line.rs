// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the TAP line classifier
//!
//! Classification must accept any line without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;

use tap_core::classify_line;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        let _ = classify_line(line);
    }
});
