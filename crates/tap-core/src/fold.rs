// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fold region computation
//!
//! Two kinds of region come out of this pass:
//!
//! - YAML side-blocks (`---` through the next `...`), tagged [`FoldKind::Region`]
//! - structural ranges derived from plan or result lines, depending on the
//!   [`GroupingPolicy`]
//!
//! Regions are returned in the order their closing condition is found. Use
//! [`sort_fold_regions`] when ordered output is needed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::{ClassifiedLine, LineKind, classify_lines};
use crate::policy::GroupingPolicy;

/// Kind tag for a fold region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoldKind {
    /// A delimited block (YAML diagnostics)
    Region,
}

/// A collapsible, inclusive line range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoldRegion {
    /// First line of the region
    pub start_line: usize,
    /// Last line of the region
    pub end_line: usize,
    /// `Some(Region)` for YAML blocks, `None` for structural ranges
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FoldKind>,
}

impl FoldRegion {
    /// Structural range without a kind tag
    #[must_use]
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line,
            end_line,
            kind: None,
        }
    }

    /// Delimited block tagged as [`FoldKind::Region`]
    #[must_use]
    pub fn region(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line,
            end_line,
            kind: Some(FoldKind::Region),
        }
    }

    /// Check if this is a YAML block region
    #[must_use]
    pub fn is_region(&self) -> bool {
        self.kind == Some(FoldKind::Region)
    }
}

/// Compute fold regions for a TAP document.
#[must_use]
pub fn compute_fold_regions(text: &str, policy: GroupingPolicy) -> Vec<FoldRegion> {
    fold_lines(&classify_lines(text), policy)
}

/// Sort regions by start line, then end line.
pub fn sort_fold_regions(regions: &mut [FoldRegion]) {
    regions.sort_by_key(|r| (r.start_line, r.end_line));
}

pub(crate) fn fold_lines(lines: &[ClassifiedLine<'_>], policy: GroupingPolicy) -> Vec<FoldRegion> {
    let closers = yaml_closers(lines);
    let mut folder = Folder::new(policy);

    for line in lines {
        match &line.kind {
            LineKind::YamlOpen => {
                if let Some(close) = closers[line.index] {
                    folder.regions.push(FoldRegion::region(line.index, close));
                }
            }
            LineKind::TestPlan(plan) => folder.plan(line.index, plan.indent),
            LineKind::TestResult(_) => folder.result(line.index),
            LineKind::YamlClose | LineKind::Plain => {}
        }
    }

    let last_line = lines.len().saturating_sub(1);
    let regions = folder.finish(last_line);
    debug!(%policy, lines = lines.len(), regions = regions.len(), "Computed fold regions");
    regions
}

/// For each line, the index of the first `...` strictly after it.
fn yaml_closers(lines: &[ClassifiedLine<'_>]) -> Vec<Option<usize>> {
    let mut closers = vec![None; lines.len()];
    let mut next = None;
    for line in lines.iter().rev() {
        closers[line.index] = next;
        if line.kind == LineKind::YamlClose {
            next = Some(line.index);
        }
    }
    closers
}

#[derive(Debug, Clone, Copy)]
struct PlanFrame {
    start_line: usize,
    indent: usize,
}

struct Folder {
    policy: GroupingPolicy,
    regions: Vec<FoldRegion>,
    plans: Vec<PlanFrame>,
    current_test: Option<usize>,
}

impl Folder {
    fn new(policy: GroupingPolicy) -> Self {
        Self {
            policy,
            regions: Vec::new(),
            plans: Vec::new(),
            current_test: None,
        }
    }

    /// Structural ranges must hide at least one line.
    fn close(&mut self, start_line: usize, end_line: usize) {
        if end_line > start_line {
            self.regions.push(FoldRegion::new(start_line, end_line));
        }
    }

    fn plan(&mut self, index: usize, indent: usize) {
        match self.policy {
            GroupingPolicy::PlanStack => {
                while let Some(frame) = self.plans.last().copied() {
                    if frame.indent < indent {
                        break;
                    }
                    self.plans.pop();
                    self.close(frame.start_line, index.saturating_sub(1));
                }
                self.plans.push(PlanFrame {
                    start_line: index,
                    indent,
                });
            }
            GroupingPolicy::CurrentTest => {
                if let Some(start) = self.current_test.take() {
                    self.close(start, index.saturating_sub(1));
                }
            }
        }
    }

    fn result(&mut self, index: usize) {
        if self.policy != GroupingPolicy::CurrentTest {
            return;
        }
        if let Some(start) = self.current_test.replace(index) {
            self.close(start, index.saturating_sub(1));
        }
    }

    fn finish(mut self, last_line: usize) -> Vec<FoldRegion> {
        while let Some(frame) = self.plans.pop() {
            self.close(frame.start_line, last_line);
        }
        if let Some(start) = self.current_test.take() {
            self.close(start, last_line);
        }
        self.regions
    }
}
