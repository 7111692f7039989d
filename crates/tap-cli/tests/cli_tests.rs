// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! CLI parsing tests for tapfold
//!
//! These tests verify subcommand selection, global flags and the logging
//! level configuration.

use std::path::PathBuf;

use clap::Parser;
use similar_asserts::assert_eq;
use tap_cli::{Command, Config, OutputFormat};
use tap_core::GroupingPolicy;
use tracing::Level;

// ============================================================================
// Subcommands
// ============================================================================

#[test]
fn test_no_subcommand_defaults_to_tests() {
    let config = Config::try_parse_from(["tapfold"]).expect("parse should succeed");
    assert!(config.command.is_none());
    assert_eq!(config.subcommand(), Command::Tests { files: Vec::new() });
}

#[test]
fn test_folds_with_files() {
    let config =
        Config::try_parse_from(["tapfold", "folds", "a.tap", "b.tap"]).expect("parse should succeed");
    assert_eq!(
        config.subcommand(),
        Command::Folds {
            files: vec![PathBuf::from("a.tap"), PathBuf::from("b.tap")]
        }
    );
}

#[test]
fn test_check_reads_stdin_dash() {
    let config = Config::try_parse_from(["tapfold", "check", "-"]).expect("parse should succeed");
    assert_eq!(config.subcommand().files(), [PathBuf::from("-")].as_slice());
}

#[test]
fn test_unknown_subcommand_rejected() {
    let result = Config::try_parse_from(["tapfold", "lint"]);
    assert!(result.is_err());
}

// ============================================================================
// Global flags
// ============================================================================

#[test]
fn test_policy_flag() {
    let config = Config::try_parse_from(["tapfold", "--policy", "current-test", "folds"])
        .expect("parse should succeed");
    assert_eq!(config.policy, GroupingPolicy::CurrentTest);
}

#[test]
fn test_policy_flag_after_subcommand() {
    let config = Config::try_parse_from(["tapfold", "folds", "-p", "current-test", "x.tap"])
        .expect("parse should succeed");
    assert_eq!(config.policy, GroupingPolicy::CurrentTest);
    assert_eq!(config.subcommand().files().len(), 1);
}

#[test]
fn test_unknown_policy_rejected() {
    let result = Config::try_parse_from(["tapfold", "--policy", "sideways"]);
    assert!(result.is_err());
}

#[test]
fn test_format_json() {
    let config = Config::try_parse_from(["tapfold", "check", "--format", "json"])
        .expect("parse should succeed");
    assert_eq!(config.format, OutputFormat::Json);
}

#[test]
fn test_strict_todo_flag() {
    let config =
        Config::try_parse_from(["tapfold", "--strict-todo"]).expect("parse should succeed");
    assert!(config.presentation().strict_todo);
}

// ============================================================================
// Logging flags
// ============================================================================

#[test]
fn test_verbose_short_flag_v() {
    let config = Config::try_parse_from(["tapfold", "-v"]).expect("parse should succeed");
    assert!(config.verbose);
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_quiet_long_flag() {
    let config = Config::try_parse_from(["tapfold", "--quiet"]).expect("parse should succeed");
    assert!(config.quiet);
    assert_eq!(config.log_level(), Level::WARN);
}

#[test]
fn test_verbose_flag_value_syntax_not_supported() {
    // Boolean flags are toggled by presence only
    let result = Config::try_parse_from(["tapfold", "--verbose=true"]);
    assert!(result.is_err(), "Boolean flags don't support =value syntax");
}

#[test]
fn test_default_log_level_is_info() {
    let config = Config::try_parse_from(["tapfold"]).expect("parse should succeed");
    assert_eq!(config.log_level(), Level::INFO);
}
