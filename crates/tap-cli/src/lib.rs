// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! tapfold library
//!
//! This module exports the command-line machinery of tapfold for use in
//! integration tests and as a library.

pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod run;

pub use config::{Command, Config, OutputFormat};
pub use error::CliError;
pub use run::{LoadedDocument, Outcome, load_documents, render, run};
