// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Text and JSON rendering of command results
//!
//! Text reports use one-based line numbers like compilers do; JSON reports
//! keep the zero-based LSP values so they can be fed straight to an editor.

use lsp_types::{Diagnostic, DiagnosticSeverity, FoldingRange};
use serde::Serialize;
use tap_core::GroupSummary;
use tap_lsp::{Presentation, PresentationOptions, TestItem, diagnostics, folding_ranges, test_items};

use crate::config::OutputFormat;
use crate::error::CliError;
use crate::run::{LoadedDocument, Outcome};

#[derive(Debug, Serialize)]
struct FoldReport<'a> {
    source: &'a str,
    ranges: Vec<FoldingRange>,
}

#[derive(Debug, Serialize)]
struct TestsReport<'a> {
    source: &'a str,
    summary: GroupSummary,
    groups: Vec<GroupReport<'a>>,
}

#[derive(Debug, Serialize)]
struct GroupReport<'a> {
    name: &'a str,
    start_line: usize,
    summary: GroupSummary,
    tests: Vec<TestItem>,
}

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    source: &'a str,
    diagnostics: Vec<Diagnostic>,
}

/// Render fold regions
///
/// # Errors
///
/// Returns `CliError` if a region does not fit an LSP range or JSON fails.
pub fn folds(documents: &[LoadedDocument], format: OutputFormat) -> Result<String, CliError> {
    let reports = documents
        .iter()
        .map(|doc| {
            Ok(FoldReport {
                source: &doc.source,
                ranges: folding_ranges(&doc.document.folds)?,
            })
        })
        .collect::<Result<Vec<_>, CliError>>()?;

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&reports)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for report in &reports {
                for range in &report.ranges {
                    let kind = if range.kind.is_some() { " region" } else { "" };
                    out.push_str(&format!(
                        "{}:{}-{}{kind}\n",
                        report.source,
                        range.start_line + 1,
                        range.end_line + 1
                    ));
                }
            }
            Ok(out)
        }
    }
}

/// Render test groups and their results
///
/// # Errors
///
/// Returns `CliError::Json` if the JSON report cannot be serialized.
pub fn tests(
    documents: &[LoadedDocument],
    options: &PresentationOptions,
    format: OutputFormat,
) -> Result<String, CliError> {
    let reports: Vec<TestsReport<'_>> = documents
        .iter()
        .map(|doc| {
            let mut items = test_items(&doc.document.groups, options).into_iter();
            let groups = doc
                .document
                .groups
                .iter()
                .map(|group| GroupReport {
                    name: &group.name,
                    start_line: group.start_line,
                    summary: group.summary(),
                    tests: items.by_ref().take(group.len()).collect(),
                })
                .collect();
            TestsReport {
                source: &doc.source,
                summary: doc.document.summary(),
                groups,
            }
        })
        .collect();

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&reports)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for report in &reports {
                out.push_str(&format!(
                    "{}: {}\n",
                    report.source,
                    summary_line(&report.summary)
                ));
                for group in &report.groups {
                    out.push_str(&format!(
                        "  {} (line {}): {}\n",
                        group.name,
                        group.start_line + 1,
                        summary_line(&group.summary)
                    ));
                    for item in &group.tests {
                        out.push_str(&format!("    {}\n", item_line(item)));
                    }
                }
            }
            Ok(out)
        }
    }
}

/// Render diagnostics; the outcome fails if any test failed
///
/// # Errors
///
/// Returns `CliError` if a record does not fit an LSP range or JSON fails.
pub fn check(
    documents: &[LoadedDocument],
    options: &PresentationOptions,
    format: OutputFormat,
) -> Result<Outcome, CliError> {
    let reports = documents
        .iter()
        .map(|doc| {
            Ok(CheckReport {
                source: &doc.source,
                diagnostics: diagnostics(&doc.document.groups, options)?,
            })
        })
        .collect::<Result<Vec<_>, CliError>>()?;

    let errors = reports
        .iter()
        .flat_map(|r| r.diagnostics.iter())
        .filter(|d| d.severity == Some(DiagnosticSeverity::ERROR))
        .count();

    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&reports)?,
        OutputFormat::Text => {
            let mut out = String::new();
            for report in &reports {
                for diag in &report.diagnostics {
                    let level = if diag.severity == Some(DiagnosticSeverity::ERROR) {
                        "error"
                    } else {
                        "warning"
                    };
                    let headline = headline(&diag.message);
                    out.push_str(&format!(
                        "{}:{}: {level}: {headline}\n",
                        report.source,
                        diag.range.start.line + 1
                    ));
                }
            }
            out.push_str(&format!(
                "{errors} failing test{} in {} input{}\n",
                plural(errors),
                reports.len(),
                plural(reports.len())
            ));
            out
        }
    };

    Ok(Outcome {
        output,
        failed: errors > 0,
    })
}

fn summary_line(summary: &GroupSummary) -> String {
    let mut line = format!(
        "{} passed, {} failed, {} skipped, {} todo",
        summary.passed, summary.failed, summary.skipped, summary.todo
    );
    if summary.duration_ms > 0.0 {
        line.push_str(&format!(" ({}ms)", summary.duration_ms));
    }
    line
}

fn item_line(item: &TestItem) -> String {
    let marker = match item.state {
        Presentation::Passed => "ok  ",
        Presentation::Failed { .. } => "FAIL",
        Presentation::Skipped => "skip",
        Presentation::Warning { .. } => "warn",
    };
    // The id ends in the ordinal, plus `#n` for repeats.
    let ordinal = item.id.rsplit('/').next().unwrap_or_default();
    let mut line = format!("{marker} {ordinal} {}", item.label);
    if let Some(ms) = item.duration_ms {
        line.push_str(&format!(" ({ms}ms)"));
    }
    line.trim_end().to_string()
}

/// First meaningful line of a message, skipping YAML markers
fn headline(message: &str) -> &str {
    message
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && *line != "---" && *line != "...")
        .unwrap_or_default()
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;
    use tap_core::{GroupingPolicy, parse_document};

    fn loaded(source: &str, text: &str) -> Vec<LoadedDocument> {
        vec![LoadedDocument {
            source: source.to_string(),
            document: parse_document(text, GroupingPolicy::PlanStack),
        }]
    }

    const RUN: &str = "1..2\nok 1 - a in 4ms\nnot ok 2 - b\n  ---\n  got: 1\n  ...\n";

    #[test]
    fn test_fold_text_is_one_based() {
        let out = folds(&loaded("run.tap", RUN), OutputFormat::Text).expect("Should render");
        assert_eq!(out, "run.tap:4-6 region\nrun.tap:1-7\n");
    }

    #[test]
    fn test_fold_json_keeps_lsp_values() {
        let out = folds(&loaded("run.tap", RUN), OutputFormat::Json).expect("Should render");
        let json: serde_json::Value = serde_json::from_str(&out).expect("Should be JSON");
        assert!(json[0]["source"] == "run.tap");
        assert!(json[0]["ranges"][0]["startLine"] == 3);
        assert!(json[0]["ranges"][0]["kind"] == "region");
    }

    #[test]
    fn test_tests_text() {
        let out = tests(
            &loaded("run.tap", RUN),
            &PresentationOptions::default(),
            OutputFormat::Text,
        )
        .expect("Should render");
        let expected = "\
run.tap: 1 passed, 1 failed, 0 skipped, 0 todo (4ms)
  Tests 1..2 (line 1): 1 passed, 1 failed, 0 skipped, 0 todo (4ms)
    ok   1 a (4ms)
    FAIL 2 b
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_tests_json_splits_items_by_group() {
        let docs = loaded("run.tap", "ok 1\nok 2\nok 1\n");
        let out = tests(&docs, &PresentationOptions::default(), OutputFormat::Json)
            .expect("Should render");
        let json: serde_json::Value = serde_json::from_str(&out).expect("Should be JSON");
        let groups = json[0]["groups"].as_array().expect("groups array");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0]["tests"].as_array().map(Vec::len), Some(2));
        assert_eq!(groups[1]["tests"].as_array().map(Vec::len), Some(1));
        assert!(groups[1]["name"] == "Group 2");
    }

    #[test]
    fn test_check_fails_on_failure() {
        let outcome = check(
            &loaded("run.tap", "1..2\nok 1 - a\nnot ok 2 - b\n"),
            &PresentationOptions::default(),
            OutputFormat::Text,
        )
        .expect("Should render");
        assert!(outcome.failed);
        assert_eq!(
            outcome.output,
            "run.tap:3: error: Test failed: b\n1 failing test in 1 input\n"
        );
    }

    #[test]
    fn test_check_warnings_do_not_fail() {
        let docs = loaded("todo.tap", "ok 1 - later # TODO\n");
        let outcome = check(
            &docs,
            &PresentationOptions { strict_todo: true },
            OutputFormat::Text,
        )
        .expect("Should render");
        assert!(!outcome.failed);
        assert!(outcome.output.starts_with("todo.tap:1: warning: TODO test passed"));
    }

    #[test]
    fn test_summary_and_item_lines() {
        let docs = loaded("run.tap", "ok 1 - a in 1.5ms\nok 2 # SKIP\n");
        let group = &docs[0].document.groups[0];
        assert_eq!(
            summary_line(&group.summary()),
            "1 passed, 0 failed, 1 skipped, 0 todo (1.5ms)"
        );
        let items = test_items(&docs[0].document.groups, &PresentationOptions::default());
        assert_eq!(item_line(&items[0]), "ok   1 a (1.5ms)");
        assert_eq!(item_line(&items[1]), "skip 2 Test 2");
    }

    #[test]
    fn test_headline_skips_yaml_markers() {
        assert_eq!(headline("  ---\n  message: boom\n  ..."), "message: boom");
        assert_eq!(headline("Test failed: b"), "Test failed: b");
        assert_eq!(headline("---\n..."), "");
    }

    #[test]
    fn test_check_clean_run() {
        let docs = loaded("ok.tap", "1..1\nok 1\n");
        let outcome = check(&docs, &PresentationOptions::default(), OutputFormat::Json)
            .expect("Should render");
        assert!(!outcome.failed);
        let json: serde_json::Value = serde_json::from_str(&outcome.output).expect("JSON");
        assert_eq!(json[0]["diagnostics"].as_array().map(Vec::len), Some(0));
    }
}
