// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for fold region computation
//!
//! Runs both policies; regions must never be inverted.

#![no_main]

use libfuzzer_sys::fuzz_target;

use tap_core::{GroupingPolicy, compute_fold_regions};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        for policy in GroupingPolicy::ALL {
            for region in compute_fold_regions(input, policy) {
                assert!(region.end_line >= region.start_line);
            }
        }
    }
});
