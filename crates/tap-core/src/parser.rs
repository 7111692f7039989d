// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test grouping
//!
//! Builds the [`TestGroup`] / [`TestRecord`] forest from a TAP document.
//!
//! A group starts at every plan line, and also whenever a result's ordinal
//! does not increase over the previous one in the same group (a suite that
//! printed no plan). Non-blank lines following a result are captured as that
//! result's output until the next result or plan line.
//!
//! # Example
//!
//! ```
//! use tap_core::parser::parse;
//!
//! let groups = parse("1..2\nok 1 - a\nnot ok 2 - b # TODO later\n");
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].name, "Tests 1..2");
//! assert_eq!(groups[0].tests[1].description, "b");
//! assert!(groups[0].tests[1].has_todo);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::classify::{ClassifiedLine, LineKind, TestPlanLine, classify_lines};
use crate::fold::{FoldRegion, fold_lines};
use crate::policy::GroupingPolicy;
use crate::result::{GroupSummary, TestGroup, TestRecord};

/// Both structural views of one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// Policy the fold regions were computed with
    pub policy: GroupingPolicy,
    /// Fold regions in discovery order
    pub folds: Vec<FoldRegion>,
    /// Test groups in document order
    pub groups: Vec<TestGroup>,
}

impl ParsedDocument {
    /// Iterate every record across all groups
    pub fn records(&self) -> impl Iterator<Item = &TestRecord> {
        self.groups.iter().flat_map(|g| g.tests.iter())
    }

    /// Tally every group
    #[must_use]
    pub fn summary(&self) -> GroupSummary {
        let mut total = GroupSummary::default();
        for group in &self.groups {
            total += group.summary();
        }
        total
    }
}

/// Parse a TAP document into test groups.
#[must_use]
pub fn parse(text: &str) -> Vec<TestGroup> {
    group_lines(&classify_lines(text))
}

/// Classify once and produce both fold regions and test groups.
#[must_use]
pub fn parse_document(text: &str, policy: GroupingPolicy) -> ParsedDocument {
    let lines = classify_lines(text);
    ParsedDocument {
        policy,
        folds: fold_lines(&lines, policy),
        groups: group_lines(&lines),
    }
}

fn group_lines(lines: &[ClassifiedLine<'_>]) -> Vec<TestGroup> {
    let mut grouper = Grouper::default();
    for line in lines {
        match &line.kind {
            LineKind::TestPlan(plan) => grouper.plan(line.index, plan),
            LineKind::TestResult(result) => {
                grouper.result(TestRecord::from_line(line.index, line.text, result.clone()));
            }
            LineKind::YamlOpen | LineKind::YamlClose | LineKind::Plain => {
                grouper.output(line.text);
            }
        }
    }
    let groups = grouper.finish();
    debug!(
        lines = lines.len(),
        groups = groups.len(),
        records = groups.iter().map(TestGroup::len).sum::<usize>(),
        "Parsed TAP document"
    );
    groups
}

#[derive(Default)]
struct Grouper {
    groups: Vec<TestGroup>,
    current: Option<TestGroup>,
    /// Whether the last record of `current` still collects output
    collecting: bool,
}

impl Grouper {
    fn seal(&mut self) {
        if let Some(group) = self.current.take() {
            self.groups.push(group);
        }
        self.collecting = false;
    }

    fn open(&mut self, name: String, start_line: usize) {
        self.seal();
        self.current = Some(TestGroup::new(name, start_line));
    }

    fn next_group_name(&self) -> String {
        format!("Group {}", self.groups.len() + 1)
    }

    fn plan(&mut self, index: usize, plan: &TestPlanLine) {
        let name = format!("Tests {}..{}", plan.start_ordinal, plan.end_ordinal);
        self.open(name, index);
    }

    fn result(&mut self, record: TestRecord) {
        // An empty group has no last ordinal and never resets.
        let last_ordinal = self.current.as_ref().and_then(TestGroup::last_ordinal);
        let reset = last_ordinal.is_some_and(|last| record.ordinal <= last);
        if reset {
            trace!(
                line = record.line,
                ordinal = record.ordinal,
                ?last_ordinal,
                "Ordinal reset starts a new group"
            );
        }
        if reset || self.current.is_none() {
            // The sealed group counts toward the new name.
            self.seal();
            let name = self.next_group_name();
            self.current = Some(TestGroup::new(name, record.line));
        }

        self.collecting = true;
        if let Some(group) = self.current.as_mut() {
            group.tests.push(record);
        }
    }

    fn output(&mut self, text: &str) {
        if !self.collecting || text.trim().is_empty() {
            return;
        }
        if let Some(record) = self.current.as_mut().and_then(|g| g.tests.last_mut()) {
            record.output.push(text.to_string());
        }
    }

    fn finish(mut self) -> Vec<TestGroup> {
        self.seal();
        self.groups
    }
}
