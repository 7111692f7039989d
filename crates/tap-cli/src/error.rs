// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for tap-cli

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while running a tapfold command
#[derive(Debug, Error)]
pub enum CliError {
    /// Error reading an input
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// The input that could not be read (`-` for stdin)
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Error serializing a JSON report
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error mapping results onto LSP types
    #[error("LSP mapping error: {0}")]
    Lsp(#[from] tap_lsp::LspError),

    /// A parse task panicked or was cancelled
    #[error("Parse task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
