// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! How a test record is shown in a results view
//!
//! | record | presentation |
//! |---|---|
//! | `# SKIP` | skipped, whatever the status |
//! | `# TODO`, `ok` | passed, or warning with [`PresentationOptions::strict_todo`] |
//! | `# TODO`, `not ok` | skipped (expected failure) |
//! | `ok` | passed |
//! | `not ok` | failed |

use serde::{Deserialize, Serialize};
use tap_core::TestRecord;

/// Knobs for [`present`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationOptions {
    /// Report TODO tests that unexpectedly pass as warnings
    pub strict_todo: bool,
}

/// Display state of one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Presentation {
    /// Test passed
    Passed,
    /// Test failed
    Failed {
        /// Captured output, or a generic message when there is none
        message: String,
    },
    /// Test was skipped or is an expected failure
    Skipped,
    /// TODO test passed while strict TODO handling is on
    Warning {
        /// Explanation shown with the warning
        message: String,
    },
}

impl Presentation {
    /// Short lowercase label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed { .. } => "failed",
            Self::Skipped => "skipped",
            Self::Warning { .. } => "warning",
        }
    }

    /// Message for failures and warnings
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } | Self::Warning { message } => Some(message),
            Self::Passed | Self::Skipped => None,
        }
    }

    /// Check if this is a failure
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Decide how a record is presented.
#[must_use]
pub fn present(record: &TestRecord, options: &PresentationOptions) -> Presentation {
    // Skip dominates when both directives are present.
    if record.has_skip {
        return Presentation::Skipped;
    }
    if record.has_todo {
        return match (record.passed, options.strict_todo) {
            (false, _) => Presentation::Skipped,
            (true, false) => Presentation::Passed,
            (true, true) => Presentation::Warning {
                message: format!("TODO test passed: {}", record.description),
            },
        };
    }
    if record.passed {
        return Presentation::Passed;
    }
    Presentation::Failed {
        message: record
            .output_text()
            .unwrap_or_else(|| format!("Test failed: {}", record.description)),
    }
}
