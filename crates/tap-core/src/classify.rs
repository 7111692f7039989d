// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! TAP line classification
//!
//! Every line of a TAP stream falls into exactly one [`LineKind`]. Rules are
//! applied in order and the first match wins:
//!
//! 1. test result: `ok 1 - description # SKIP reason`
//! 2. test plan: `1..4`
//! 3. YAML block open: `---`
//! 4. YAML block close: `...`
//! 5. anything else is plain output
//!
//! # Example
//!
//! ```
//! use tap_core::classify::{LineKind, classify_line};
//!
//! match classify_line("not ok 2 - parses input in 15ms # TODO flaky") {
//!     LineKind::TestResult(result) => {
//!         assert!(!result.passed);
//!         assert_eq!(result.ordinal, 2);
//!         assert_eq!(result.description, "parses input");
//!         assert_eq!(result.duration_ms, Some(15.0));
//!         assert!(result.has_todo);
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static TEST_RESULT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)(ok|not ok)\s+([0-9]+)(?:\s+(?:-\s+)?(.*))?")
        .expect("test result pattern is valid")
});

static TEST_PLAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.\.([0-9]+)$").expect("test plan pattern is valid"));

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+in\s+([0-9]+(?:\.[0-9]+)?)(ms|s)\s*$").expect("duration pattern is valid")
});

/// A parsed `ok` / `not ok` line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResultLine {
    /// Leading whitespace, in characters
    pub indent: usize,
    /// `true` for `ok`, `false` for `not ok`
    pub passed: bool,
    /// Test number as written
    pub ordinal: u64,
    /// Everything after the ordinal (and optional ` - `), directives included
    pub raw_remainder: String,
    /// Cleaned description, never empty
    pub description: String,
    /// Line carries a `# TODO` directive
    pub has_todo: bool,
    /// Line carries a `# SKIP` directive
    pub has_skip: bool,
    /// Duration in milliseconds taken from a trailing `in 12ms` / `in 1.5s`
    pub duration_ms: Option<f64>,
}

/// A parsed `N..M` plan line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestPlanLine {
    /// Leading whitespace, in characters
    pub indent: usize,
    /// First ordinal of the plan
    pub start_ordinal: u64,
    /// Last ordinal of the plan
    pub end_ordinal: u64,
}

/// Classification of a single line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineKind {
    /// `ok` / `not ok` result line
    TestResult(TestResultLine),
    /// `N..M` plan line
    TestPlan(TestPlanLine),
    /// `---` opening a YAML diagnostic block
    YamlOpen,
    /// `...` closing a YAML diagnostic block
    YamlClose,
    /// Any other line, including blank ones
    Plain,
}

/// One classified line together with its position in the document
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedLine<'a> {
    /// Zero-based line index
    pub index: usize,
    /// Raw text without the line terminator
    pub text: &'a str,
    /// What the line is
    pub kind: LineKind,
}

/// Split text into lines the way an editor counts them.
///
/// Splits on `\n`, dropping one trailing `\r` per line. A trailing newline
/// yields a final empty line, so `"a\n"` has two lines.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Classify one line of TAP text.
#[must_use]
pub fn classify_line(line: &str) -> LineKind {
    if let Some(result) = parse_test_result(line) {
        return LineKind::TestResult(result);
    }
    if let Some(plan) = parse_test_plan(line) {
        return LineKind::TestPlan(plan);
    }
    match line.trim() {
        "---" => LineKind::YamlOpen,
        "..." => LineKind::YamlClose,
        _ => LineKind::Plain,
    }
}

/// Classify every line of a document, in order.
#[must_use]
pub fn classify_lines(text: &str) -> Vec<ClassifiedLine<'_>> {
    lines(text)
        .enumerate()
        .map(|(index, text)| ClassifiedLine {
            index,
            text,
            kind: classify_line(text),
        })
        .collect()
}

/// An ordinal that overflows `u64` makes the line unclassifiable as a result.
fn parse_test_result(line: &str) -> Option<TestResultLine> {
    let caps = TEST_RESULT.captures(line)?;
    let indent = caps.get(1).map_or(0, |m| m.as_str().chars().count());
    let passed = caps.get(2).is_some_and(|m| m.as_str() == "ok");
    let ordinal = caps.get(3)?.as_str().parse::<u64>().ok()?;
    let raw_remainder = caps.get(4).map_or("", |m| m.as_str()).to_string();

    let lowered = line.to_ascii_lowercase();
    let has_todo = lowered.contains("# todo");
    let has_skip = lowered.contains("# skip");

    let (description, duration_ms) = clean_description(&raw_remainder, ordinal);

    Some(TestResultLine {
        indent,
        passed,
        ordinal,
        raw_remainder,
        description,
        has_todo,
        has_skip,
        duration_ms,
    })
}

fn parse_test_plan(line: &str) -> Option<TestPlanLine> {
    let trimmed = line.trim();
    let caps = TEST_PLAN.captures(trimmed)?;
    let start_ordinal = caps.get(1)?.as_str().parse::<u64>().ok()?;
    let end_ordinal = caps.get(2)?.as_str().parse::<u64>().ok()?;
    let indent = line.chars().take_while(|c| c.is_whitespace()).count();

    Some(TestPlanLine {
        indent,
        start_ordinal,
        end_ordinal,
    })
}

/// Strip the comment, default empty descriptions, then pull off the duration.
fn clean_description(raw_remainder: &str, ordinal: u64) -> (String, Option<f64>) {
    let without_comment = match raw_remainder.find('#') {
        Some(idx) => &raw_remainder[..idx],
        None => raw_remainder,
    }
    .trim();

    if without_comment.is_empty() {
        return (format!("Test {ordinal}"), None);
    }

    match extract_duration(without_comment) {
        Some((stripped, duration_ms)) => (stripped.to_string(), Some(duration_ms)),
        None => (without_comment.to_string(), None),
    }
}

/// Non-finite values count as unparseable and leave the description intact.
fn extract_duration(description: &str) -> Option<(&str, f64)> {
    let caps = DURATION.captures(description)?;
    let whole = caps.get(0)?;
    let value = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let millis = if caps.get(2)?.as_str().eq_ignore_ascii_case("s") {
        value * 1000.0
    } else {
        value
    };
    if !millis.is_finite() {
        return None;
    }
    Some((description[..whole.start()].trim_end(), millis))
}
