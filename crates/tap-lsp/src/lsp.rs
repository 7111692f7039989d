// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Mapping onto Language Server Protocol types
//!
//! Fold regions become [`FoldingRange`]s and failing records become
//! [`Diagnostic`]s anchored on their result line.

use lsp_types::{
    Diagnostic, DiagnosticSeverity, FoldingRange, FoldingRangeKind, NumberOrString, Position,
    Range,
};
use tap_core::{FoldKind, FoldRegion, TestGroup, TestRecord};

use crate::error::LspError;
use crate::presentation::{Presentation, PresentationOptions, present};

/// Value of [`Diagnostic::source`] for everything produced here
pub const DIAGNOSTIC_SOURCE: &str = "tap";

/// Convert a zero-based line index to an LSP line number
///
/// # Errors
///
/// Returns `LspError::LineOutOfRange` if the index does not fit in `u32`.
pub fn lsp_line(line: usize) -> Result<u32, LspError> {
    u32::try_from(line).map_err(|_| LspError::LineOutOfRange { line })
}

/// Convert fold regions to LSP folding ranges, preserving order
///
/// # Errors
///
/// Returns `LspError::LineOutOfRange` if a region lies beyond `u32::MAX` lines.
pub fn folding_ranges(regions: &[FoldRegion]) -> Result<Vec<FoldingRange>, LspError> {
    regions.iter().map(folding_range).collect()
}

fn folding_range(region: &FoldRegion) -> Result<FoldingRange, LspError> {
    Ok(FoldingRange {
        start_line: lsp_line(region.start_line)?,
        start_character: None,
        end_line: lsp_line(region.end_line)?,
        end_character: None,
        kind: region.kind.map(|kind| match kind {
            FoldKind::Region => FoldingRangeKind::Region,
        }),
        collapsed_text: None,
    })
}

/// Problem markers for failing records (and passing TODOs in strict mode)
///
/// # Errors
///
/// Returns `LspError` if a record's line or width does not fit an LSP position.
pub fn diagnostics(
    groups: &[TestGroup],
    options: &PresentationOptions,
) -> Result<Vec<Diagnostic>, LspError> {
    let mut out = Vec::new();
    for record in groups.iter().flat_map(|g| g.tests.iter()) {
        let (severity, message) = match present(record, options) {
            Presentation::Failed { message } => (DiagnosticSeverity::ERROR, message),
            Presentation::Warning { message } => (DiagnosticSeverity::WARNING, message),
            Presentation::Passed | Presentation::Skipped => continue,
        };
        out.push(diagnostic(record, severity, message)?);
    }
    Ok(out)
}

fn diagnostic(
    record: &TestRecord,
    severity: DiagnosticSeverity,
    message: String,
) -> Result<Diagnostic, LspError> {
    Ok(Diagnostic::new(
        line_range(record.line, &record.raw)?,
        Some(severity),
        Some(NumberOrString::String(record.ordinal.to_string())),
        Some(DIAGNOSTIC_SOURCE.to_string()),
        message,
        None,
        None,
    ))
}

/// Range covering the whole of one line, measured in UTF-16 code units
fn line_range(line: usize, text: &str) -> Result<Range, LspError> {
    let row = lsp_line(line)?;
    let length = text.encode_utf16().count();
    let end = u32::try_from(length).map_err(|_| LspError::LineTooLong { line, length })?;
    Ok(Range::new(
        Position::new(row, 0),
        Position::new(row, end),
    ))
}
