// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! tap-lsp: editor host integration for tap-core
//!
//! This library crate maps TAP parse results onto the primitives an editor
//! host works with: LSP folding ranges, LSP diagnostics for failing tests,
//! and a test-tree model with per-document change tracking.
//!
//! ## Presentation
//!
//! Records are shown as passed, failed, skipped or warning according to
//! their status and directives; see [`presentation`].
//!
//! ## Document tracking
//!
//! Use [`DocumentRegistry`] to hold the latest parse of every open document
//! and receive a [`ResultsDiff`] on each edit.

#![warn(missing_docs)]

pub mod error;
pub mod lsp;
pub mod presentation;
pub mod registry;
pub mod tree;

pub use error::LspError;
pub use lsp::{DIAGNOSTIC_SOURCE, diagnostics, folding_ranges};
pub use presentation::{Presentation, PresentationOptions, present};
pub use registry::{DocumentRegistry, DocumentSnapshot, ResultsDiff};
pub use tree::{TestItem, test_items};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::LspError;
    pub use crate::presentation::{Presentation, PresentationOptions};
    pub use crate::registry::{DocumentRegistry, ResultsDiff};
    pub use crate::tree::TestItem;
}
