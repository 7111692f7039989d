// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! tap-core: Test Anything Protocol parsing for editors
//!
//! This library crate turns TAP text into the structures an editor needs:
//! fold regions for collapsing plans, tests and YAML diagnostics, and a forest
//! of test groups and records for a results view. Everything here is a pure
//! function of the input text; reparse after every edit.
//!
//! # Example
//!
//! ```
//! use tap_core::{GroupingPolicy, compute_fold_regions, parse};
//!
//! let tap = "1..2\nok 1 - a\nnot ok 2 - b\n  ---\n  message: boom\n  ...\n";
//!
//! let groups = parse(tap);
//! assert_eq!(groups[0].tests.len(), 2);
//! assert_eq!(groups[0].tests[1].output.len(), 3);
//!
//! let folds = compute_fold_regions(tap, GroupingPolicy::PlanStack);
//! assert!(folds.iter().any(|f| f.is_region()));
//! ```

#![warn(missing_docs)]

pub mod classify;
pub mod error;
pub mod fold;
pub mod parser;
pub mod policy;
pub mod result;

pub use classify::{LineKind, TestPlanLine, TestResultLine, classify_line};
pub use error::TapError;
pub use fold::{FoldKind, FoldRegion, compute_fold_regions, sort_fold_regions};
pub use parser::{ParsedDocument, parse, parse_document};
pub use policy::GroupingPolicy;
pub use result::{GroupSummary, TestGroup, TestRecord};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::TapError;
    pub use crate::fold::{FoldRegion, compute_fold_regions};
    pub use crate::parser::{ParsedDocument, parse, parse_document};
    pub use crate::policy::GroupingPolicy;
    pub use crate::result::{TestGroup, TestRecord};
}
