// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Per-document result registry
//!
//! Hosts keep the latest parse of every open document here. Each update
//! reparses the full text and reports what changed in the test tree, so the
//! host can patch its UI instead of rebuilding it.
//!
//! Updates carry the editor's document version. An update that is not newer
//! than the stored snapshot is a superseded parse and is dropped.
//!
//! # Example
//!
//! ```
//! use tap_core::GroupingPolicy;
//! use tap_lsp::{DocumentRegistry, PresentationOptions};
//!
//! let mut registry = DocumentRegistry::new(GroupingPolicy::PlanStack, PresentationOptions::default());
//!
//! let diff = registry.update("file:///run.tap", 1, "1..1\nok 1 - a\n").expect("fresh version");
//! assert_eq!(diff.added.len(), 1);
//!
//! let diff = registry.update("file:///run.tap", 2, "1..1\nnot ok 1 - a\n").expect("fresh version");
//! assert_eq!(diff.changed.len(), 1);
//!
//! // Stale versions are ignored.
//! assert!(registry.update("file:///run.tap", 1, "").is_none());
//! ```

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use lsp_types::{Diagnostic, FoldingRange};
use serde::{Deserialize, Serialize};
use tap_core::{GroupingPolicy, ParsedDocument, parse_document};
use tracing::{debug, warn};

use crate::error::LspError;
use crate::lsp::{diagnostics, folding_ranges};
use crate::presentation::PresentationOptions;
use crate::tree::{TestItem, test_items};

/// The latest parse of one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    /// Editor version the snapshot was parsed from
    pub version: i32,
    /// When the parse ran
    pub parsed_at: DateTime<Utc>,
    /// Fold regions and test groups
    pub document: ParsedDocument,
    /// Test-tree items derived from the groups
    pub items: Vec<TestItem>,
}

impl DocumentSnapshot {
    /// Folding ranges for this snapshot
    ///
    /// # Errors
    ///
    /// Returns `LspError` if a region does not fit an LSP position.
    pub fn folding_ranges(&self) -> Result<Vec<FoldingRange>, LspError> {
        folding_ranges(&self.document.folds)
    }

    /// Problem markers for this snapshot
    ///
    /// # Errors
    ///
    /// Returns `LspError` if a record does not fit an LSP position.
    pub fn diagnostics(&self, options: &PresentationOptions) -> Result<Vec<Diagnostic>, LspError> {
        diagnostics(&self.document.groups, options)
    }
}

/// What changed in a document's test tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsDiff {
    /// Items that did not exist before
    pub added: Vec<TestItem>,
    /// Ids of items that no longer exist
    pub removed: Vec<String>,
    /// Items whose content changed
    pub changed: Vec<TestItem>,
}

impl ResultsDiff {
    /// Check if nothing changed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    /// Compare two item lists by id
    #[must_use]
    pub fn between(old: &[TestItem], new: &[TestItem]) -> Self {
        let previous: HashMap<&str, &TestItem> =
            old.iter().map(|item| (item.id.as_str(), item)).collect();
        let current: HashSet<&str> = new.iter().map(|item| item.id.as_str()).collect();

        let mut diff = Self::default();
        for item in new {
            match previous.get(item.id.as_str()) {
                None => diff.added.push(item.clone()),
                Some(before) if *before != item => diff.changed.push(item.clone()),
                Some(_) => {}
            }
        }
        diff.removed = old
            .iter()
            .filter(|item| !current.contains(item.id.as_str()))
            .map(|item| item.id.clone())
            .collect();
        diff
    }
}

/// Latest snapshot of every open document, keyed by document id (usually a URI)
#[derive(Debug, Clone, Default)]
pub struct DocumentRegistry {
    policy: GroupingPolicy,
    options: PresentationOptions,
    documents: HashMap<String, DocumentSnapshot>,
}

impl DocumentRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new(policy: GroupingPolicy, options: PresentationOptions) -> Self {
        Self {
            policy,
            options,
            documents: HashMap::new(),
        }
    }

    /// Fold policy used for every parse
    #[must_use]
    pub fn policy(&self) -> GroupingPolicy {
        self.policy
    }

    /// Presentation options used for test items
    #[must_use]
    pub fn options(&self) -> &PresentationOptions {
        &self.options
    }

    /// Reparse a document after it was opened or edited
    ///
    /// Returns `None` when `version` is not newer than the stored snapshot.
    pub fn update(&mut self, id: &str, version: i32, text: &str) -> Option<ResultsDiff> {
        if let Some(existing) = self.documents.get(id) {
            if existing.version >= version {
                warn!(
                    document = id,
                    version,
                    current = existing.version,
                    "Ignoring stale document update"
                );
                return None;
            }
        }

        let document = parse_document(text, self.policy);
        let items = test_items(&document.groups, &self.options);
        let snapshot = DocumentSnapshot {
            version,
            parsed_at: Utc::now(),
            document,
            items,
        };

        let diff = match self.documents.get(id) {
            Some(previous) => ResultsDiff::between(&previous.items, &snapshot.items),
            None => ResultsDiff::between(&[], &snapshot.items),
        };
        debug!(
            document = id,
            version,
            added = diff.added.len(),
            removed = diff.removed.len(),
            changed = diff.changed.len(),
            "Updated document results"
        );

        self.documents.insert(id.to_string(), snapshot);
        Some(diff)
    }

    /// Forget a closed document, reporting every item as removed
    pub fn close(&mut self, id: &str) -> Option<ResultsDiff> {
        let snapshot = self.documents.remove(id)?;
        debug!(document = id, items = snapshot.items.len(), "Closed document");
        Some(ResultsDiff::between(&snapshot.items, &[]))
    }

    /// Latest snapshot for a document
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DocumentSnapshot> {
        self.documents.get(id)
    }

    /// Ids of all tracked documents, sorted
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.documents.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of tracked documents
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if no documents are tracked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
