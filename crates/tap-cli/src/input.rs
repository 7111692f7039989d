// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Reading TAP input from files or stdin

use std::path::{Path, PathBuf};

use tokio::io::AsyncReadExt;

use crate::error::CliError;

/// Where one TAP document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl Input {
    /// Resolve command-line file arguments; none or `-` means stdin
    #[must_use]
    pub fn from_args(files: &[PathBuf]) -> Vec<Self> {
        if files.is_empty() {
            return vec![Self::Stdin];
        }
        files
            .iter()
            .map(|path| {
                if path == Path::new("-") {
                    Self::Stdin
                } else {
                    Self::File(path.clone())
                }
            })
            .collect()
    }

    /// Name used in reports
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Read the whole document
    ///
    /// # Errors
    ///
    /// Returns `CliError::Io` if the input cannot be read as UTF-8 text.
    pub async fn read(&self) -> Result<String, CliError> {
        match self {
            Self::Stdin => {
                let mut text = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut text)
                    .await
                    .map_err(|source| CliError::Io {
                        path: PathBuf::from("-"),
                        source,
                    })?;
                Ok(text)
            }
            Self::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| CliError::Io {
                        path: path.clone(),
                        source,
                    })
            }
        }
    }
}
