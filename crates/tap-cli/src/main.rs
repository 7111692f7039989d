// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! tapfold: fold regions, test results and diagnostics for TAP output
//!
//! Reads TAP from files or stdin and prints fold regions, grouped test
//! results or failure diagnostics as text or JSON.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tap_cli::Config;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = Config::parse();

    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    debug!(?config, "Parsed configuration");

    let outcome = tap_cli::run(&config).await.context("tapfold failed")?;

    let mut report = outcome.output;
    if !report.is_empty() && !report.ends_with('\n') {
        report.push('\n');
    }
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write report")?;

    if outcome.failed {
        info!("Failing tests found");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
