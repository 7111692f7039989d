// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Command execution
//!
//! Each input is read and parsed on its own task; results are reported in
//! argument order regardless of which task finishes first.

use tap_core::{GroupingPolicy, ParsedDocument, parse_document};
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::config::{Command, Config};
use crate::error::CliError;
use crate::input::Input;
use crate::report;

/// One parsed input
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Input name for reports
    pub source: String,
    /// Fold regions and test groups
    pub document: ParsedDocument,
}

/// Result of running a command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Rendered report
    pub output: String,
    /// Whether any test failed (only set by `check`)
    pub failed: bool,
}

/// Read and parse every input concurrently
///
/// # Errors
///
/// Returns `CliError::Io` if any input cannot be read, or `CliError::Join`
/// if a parse task dies.
pub async fn load_documents(
    inputs: Vec<Input>,
    policy: GroupingPolicy,
) -> Result<Vec<LoadedDocument>, CliError> {
    let mut tasks = JoinSet::new();
    for (index, input) in inputs.into_iter().enumerate() {
        tasks.spawn(async move {
            let text = input.read().await?;
            let source = input.name();
            let document = tokio::task::spawn_blocking(move || parse_document(&text, policy)).await?;
            debug!(
                source = %source,
                groups = document.groups.len(),
                folds = document.folds.len(),
                "Parsed input"
            );
            Ok::<_, CliError>((index, LoadedDocument { source, document }))
        });
    }

    let mut loaded = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        loaded.push(joined??);
    }
    loaded.sort_by_key(|(index, _)| *index);
    Ok(loaded.into_iter().map(|(_, doc)| doc).collect())
}

/// Run the configured command and render its report
///
/// # Errors
///
/// Returns `CliError` if inputs cannot be read or the report cannot be built.
pub async fn run(config: &Config) -> Result<Outcome, CliError> {
    let command = config.subcommand();
    let documents = load_documents(Input::from_args(command.files()), config.policy).await?;
    info!(
        documents = documents.len(),
        policy = %config.policy,
        "Loaded TAP input"
    );
    render(&command, config, &documents)
}

/// Render a report for already-parsed documents
///
/// # Errors
///
/// Returns `CliError` if results cannot be mapped or serialized.
pub fn render(
    command: &Command,
    config: &Config,
    documents: &[LoadedDocument],
) -> Result<Outcome, CliError> {
    let options = config.presentation();
    match command {
        Command::Folds { .. } => Ok(Outcome {
            output: report::folds(documents, config.format)?,
            failed: false,
        }),
        Command::Tests { .. } => Ok(Outcome {
            output: report::tests(documents, &options, config.format)?,
            failed: false,
        }),
        Command::Check { .. } => report::check(documents, &options, config.format),
    }
}
