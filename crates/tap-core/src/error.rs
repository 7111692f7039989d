// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for tap-core

use thiserror::Error;

/// Errors surfaced by tap-core configuration helpers
///
/// Parsing itself never fails: every line classifies as something, even if
/// that something is [`LineKind::Plain`](crate::classify::LineKind::Plain).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TapError {
    /// Unrecognised grouping policy name
    #[error("Unknown grouping policy: {name} (expected `plan-stack` or `current-test`)")]
    UnknownPolicy {
        /// The name that could not be matched
        name: String,
    },
}
