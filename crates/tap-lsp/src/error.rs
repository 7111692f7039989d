// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for tap-lsp

use thiserror::Error;

/// Errors that can occur while mapping parse results onto LSP types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LspError {
    /// Line index does not fit an LSP position
    #[error("Line {line} is out of range for an LSP position")]
    LineOutOfRange {
        /// The zero-based line index
        line: usize,
    },

    /// Column does not fit an LSP position
    #[error("Line {line} is too long for an LSP position ({length} UTF-16 units)")]
    LineTooLong {
        /// The zero-based line index
        line: usize,
        /// Length of the line in UTF-16 code units
        length: usize,
    },
}
