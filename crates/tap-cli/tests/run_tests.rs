// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! End-to-end tests for tapfold commands over fixture files

use std::path::{Path, PathBuf};

use similar_asserts::assert_eq;
use tap_cli::input::Input;
use tap_cli::{CliError, Command, Config, OutputFormat, load_documents, run};
use tap_core::GroupingPolicy;

fn fixture(name: &str) -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    Path::new(&manifest_dir).join("tests/fixtures").join(name)
}

fn config(command: Command, format: OutputFormat) -> Config {
    Config {
        command: Some(command),
        format,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_documents_keep_argument_order() {
    let inputs = Input::from_args(&[
        fixture("failing.tap"),
        fixture("passing.tap"),
        fixture("failing.tap"),
    ]);
    let docs = load_documents(inputs, GroupingPolicy::PlanStack)
        .await
        .expect("Should load");
    let names: Vec<bool> = docs
        .iter()
        .map(|d| d.source.ends_with("failing.tap"))
        .collect();
    assert_eq!(names, vec![true, false, true]);
    assert_eq!(docs[1].document.summary().skipped, 1);
}

#[tokio::test]
async fn test_check_fails_on_failing_fixture() {
    let cfg = config(
        Command::Check {
            files: vec![fixture("passing.tap"), fixture("failing.tap")],
        },
        OutputFormat::Text,
    );
    let outcome = run(&cfg).await.expect("Should run");
    assert!(outcome.failed);

    let lines: Vec<&str> = outcome.output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("failing.tap:4: error: message: permission denied"));
    assert_eq!(lines[1], "1 failing test in 2 inputs");
}

#[tokio::test]
async fn test_check_passes_on_passing_fixture() {
    let cfg = config(
        Command::Check {
            files: vec![fixture("passing.tap")],
        },
        OutputFormat::Text,
    );
    let outcome = run(&cfg).await.expect("Should run");
    assert!(!outcome.failed);
    assert_eq!(outcome.output, "0 failing tests in 1 input\n");
}

#[tokio::test]
async fn test_folds_text_by_policy() {
    let files = vec![fixture("failing.tap")];

    let plan_stack = run(&config(Command::Folds { files: files.clone() }, OutputFormat::Text))
        .await
        .expect("Should run");
    let ranges: Vec<&str> = plan_stack
        .output
        .lines()
        .filter_map(|l| l.rsplit(':').next())
        .collect();
    assert_eq!(ranges, vec!["5-7 region", "2-8"]);

    let mut cfg = config(Command::Folds { files }, OutputFormat::Text);
    cfg.policy = GroupingPolicy::CurrentTest;
    let current_test = run(&cfg).await.expect("Should run");
    let ranges: Vec<&str> = current_test
        .output
        .lines()
        .filter_map(|l| l.rsplit(':').next())
        .collect();
    assert_eq!(ranges, vec!["5-7 region", "4-8"]);
}

#[tokio::test]
async fn test_tests_json_report() {
    let cfg = config(
        Command::Tests {
            files: vec![fixture("passing.tap")],
        },
        OutputFormat::Json,
    );
    let outcome = run(&cfg).await.expect("Should run");
    assert!(!outcome.failed);

    let json: serde_json::Value = serde_json::from_str(&outcome.output).expect("Should be JSON");
    let doc = &json[0];
    assert!(doc["summary"]["passed"] == 2);
    assert!(doc["summary"]["skipped"] == 1);
    assert!(doc["summary"]["duration_ms"] == 7.0);
    assert!(doc["groups"][0]["name"] == "Tests 1..3");
    assert!(doc["groups"][0]["tests"][1]["state"]["state"] == "skipped");
}

#[tokio::test]
async fn test_missing_file_is_reported() {
    let cfg = config(
        Command::Tests {
            files: vec![fixture("does-not-exist.tap")],
        },
        OutputFormat::Text,
    );
    match run(&cfg).await {
        Err(CliError::Io { path, .. }) => assert!(path.ends_with("does-not-exist.tap")),
        other => panic!("Expected Io error, got {other:?}"),
    }
}
