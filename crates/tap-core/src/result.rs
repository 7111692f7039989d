// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test group and test record types

use serde::{Deserialize, Serialize};

use crate::classify::TestResultLine;

/// One `ok` / `not ok` line and the output captured beneath it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRecord {
    /// Zero-based line index of the result line
    pub line: usize,
    /// Leading whitespace of the result line
    pub indent: usize,
    /// `ok` vs `not ok`
    pub passed: bool,
    /// Test number as written
    pub ordinal: u64,
    /// Cleaned description
    pub description: String,
    /// Duration in milliseconds, if the line reported one
    pub duration_ms: Option<f64>,
    /// `# TODO` directive present
    pub has_todo: bool,
    /// `# SKIP` directive present
    pub has_skip: bool,
    /// The result line as it appears in the document
    pub raw: String,
    /// Non-blank lines between this result and the next result or plan line
    pub output: Vec<String>,
}

impl TestRecord {
    /// Build a record from a classified result line
    #[must_use]
    pub fn from_line(line: usize, raw: &str, result: TestResultLine) -> Self {
        Self {
            line,
            indent: result.indent,
            passed: result.passed,
            ordinal: result.ordinal,
            description: result.description,
            duration_ms: result.duration_ms,
            has_todo: result.has_todo,
            has_skip: result.has_skip,
            raw: raw.to_string(),
            output: Vec::new(),
        }
    }

    /// Check if the record is a plain failure (no directive softens it)
    #[must_use]
    pub fn failed(&self) -> bool {
        !self.passed && !self.has_skip && !self.has_todo
    }

    /// Captured output joined with newlines, or `None` if nothing was captured
    #[must_use]
    pub fn output_text(&self) -> Option<String> {
        if self.output.is_empty() {
            None
        } else {
            Some(self.output.join("\n"))
        }
    }
}

/// A run of test records belonging to the same suite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestGroup {
    /// Display name, e.g. `Tests 1..4` or `Group 2`
    pub name: String,
    /// Line index where the group begins
    pub start_line: usize,
    /// Records in document order
    pub tests: Vec<TestRecord>,
}

impl TestGroup {
    /// Create an empty group
    #[must_use]
    pub fn new(name: impl Into<String>, start_line: usize) -> Self {
        Self {
            name: name.into(),
            start_line,
            tests: Vec::new(),
        }
    }

    /// Check if the group has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Number of records in the group
    #[must_use]
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Ordinal of the most recent record
    #[must_use]
    pub fn last_ordinal(&self) -> Option<u64> {
        self.tests.last().map(|t| t.ordinal)
    }

    /// Records that failed without a directive
    #[must_use]
    pub fn failing_tests(&self) -> Vec<&TestRecord> {
        self.tests.iter().filter(|t| t.failed()).collect()
    }

    /// Tally the group's records
    #[must_use]
    pub fn summary(&self) -> GroupSummary {
        let mut summary = GroupSummary::default();
        for test in &self.tests {
            summary.total += 1;
            if test.has_skip {
                summary.skipped += 1;
            } else if test.has_todo {
                summary.todo += 1;
            } else if test.passed {
                summary.passed += 1;
            } else {
                summary.failed += 1;
            }
            if let Some(ms) = test.duration_ms {
                summary.duration_ms += ms;
            }
        }
        summary
    }
}

/// Counts for one group
///
/// Each record lands in exactly one bucket; skip wins over todo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Records in the group
    pub total: usize,
    /// Passed without a directive
    pub passed: usize,
    /// Failed without a directive
    pub failed: usize,
    /// Carrying `# SKIP`
    pub skipped: usize,
    /// Carrying `# TODO` but not `# SKIP`
    pub todo: usize,
    /// Sum of reported durations
    pub duration_ms: f64,
}

impl GroupSummary {
    /// Check if nothing failed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl std::ops::AddAssign for GroupSummary {
    fn add_assign(&mut self, other: Self) {
        self.total += other.total;
        self.passed += other.passed;
        self.failed += other.failed;
        self.skipped += other.skipped;
        self.todo += other.todo;
        self.duration_ms += other.duration_ms;
    }
}
