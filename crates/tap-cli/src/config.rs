// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the tapfold command line
//!
//! This module provides the clap definitions for tapfold, including the fold
//! policy, presentation options, output format and logging flags.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tap_core::GroupingPolicy;
use tap_lsp::PresentationOptions;

/// tapfold - fold regions, test results and diagnostics for TAP output
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tapfold")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Subcommand to run (defaults to `tests` on stdin)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// How structural fold regions are derived
    ///
    /// `plan-stack` nests regions under plan lines by indentation;
    /// `current-test` folds each result with the lines that follow it.
    #[arg(
        short,
        long,
        env = "TAPFOLD_POLICY",
        default_value_t = GroupingPolicy::PlanStack,
        global = true
    )]
    pub policy: GroupingPolicy,

    /// Report TODO tests that pass as warnings instead of passes
    ///
    /// The environment variable accepts `1`/`0`, `yes`/`no`, `on`/`off`
    /// and `true`/`false`.
    #[arg(
        long,
        env = "TAPFOLD_STRICT_TODO",
        default_value = "false",
        value_parser = clap::builder::BoolishValueParser::new(),
        global = true
    )]
    pub strict_todo: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with report output.
    #[arg(short, long, default_value = "false", global = true)]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false", global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print fold regions
    Folds {
        /// TAP files to read; `-` or none reads stdin
        files: Vec<PathBuf>,
    },

    /// Print test groups with per-test results
    Tests {
        /// TAP files to read; `-` or none reads stdin
        files: Vec<PathBuf>,
    },

    /// Print diagnostics for failing tests
    ///
    /// Exits with status 1 if any test failed.
    ///
    /// Example:
    ///   prove -v t/ | tapfold check
    Check {
        /// TAP files to read; `-` or none reads stdin
        files: Vec<PathBuf>,
    },
}

impl Command {
    /// Input files named on the command line
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        match self {
            Self::Folds { files } | Self::Tests { files } | Self::Check { files } => files,
        }
    }
}

/// Report format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON, one array entry per input
    Json,
}

impl Config {
    /// Get the subcommand, falling back to `tests` on stdin
    #[must_use]
    pub fn subcommand(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Tests { files: Vec::new() })
    }

    /// Presentation options derived from the flags
    #[must_use]
    pub fn presentation(&self) -> PresentationOptions {
        PresentationOptions {
            strict_todo: self.strict_todo,
        }
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.command.is_none());
        assert_eq!(config.policy, GroupingPolicy::PlanStack);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.strict_todo);
        assert!(!config.verbose);
        assert!(!config.quiet);
    }

    #[test]
    fn test_command_defaults_to_tests_on_stdin() {
        let config = Config::default();
        assert_eq!(config.subcommand(), Command::Tests { files: Vec::new() });
    }

    #[test]
    fn test_command_files() {
        let command = Command::Check {
            files: vec![PathBuf::from("a.tap"), PathBuf::from("b.tap")],
        };
        assert_eq!(command.files().len(), 2);
    }

    #[test]
    fn test_presentation_follows_strict_todo() {
        let config = Config {
            strict_todo: true,
            ..Default::default()
        };
        assert!(config.presentation().strict_todo);
    }

    #[test]
    fn test_log_level_default() {
        let config = Config::default();
        assert_eq!(config.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_log_level_verbose() {
        let config = Config {
            verbose: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_log_level_quiet() {
        let config = Config {
            quiet: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_verbose_wins_over_quiet() {
        let config = Config {
            verbose: true,
            quiet: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        <Config as CommandFactory>::command().debug_assert();
    }
}
