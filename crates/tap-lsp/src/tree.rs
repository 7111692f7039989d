// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Flat test-tree model for a results view

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tap_core::TestGroup;

use crate::presentation::{Presentation, PresentationOptions, present};

/// One entry in a host's test tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestItem {
    /// Stable identifier, `"{group}/{ordinal}"`, suffixed `#n` on collisions
    pub id: String,
    /// Name of the owning group
    pub group: String,
    /// Display label
    pub label: String,
    /// Zero-based line of the result line
    pub line: usize,
    /// Display state
    pub state: Presentation,
    /// Reported duration in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<f64>,
    /// Captured output lines
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub output: Vec<String>,
}

/// Build test-tree items for every record, in document order.
#[must_use]
pub fn test_items(groups: &[TestGroup], options: &PresentationOptions) -> Vec<TestItem> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut items = Vec::new();

    for group in groups {
        for record in &group.tests {
            let base = format!("{}/{}", group.name, record.ordinal);
            let count = seen.entry(base.clone()).or_insert(0);
            *count += 1;
            let id = if *count == 1 {
                base
            } else {
                format!("{base}#{count}")
            };

            items.push(TestItem {
                id,
                group: group.name.clone(),
                label: record.description.clone(),
                line: record.line,
                state: present(record, options),
                duration_ms: record.duration_ms,
                output: record.output.clone(),
            });
        }
    }
    items
}
