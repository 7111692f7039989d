// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fold policy selection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TapError;

/// How structural (non-YAML) fold regions are derived
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupingPolicy {
    /// Nest regions under plan lines, closing by indentation
    #[default]
    PlanStack,
    /// Fold each test result together with the lines that follow it
    CurrentTest,
}

impl GroupingPolicy {
    /// All policies, in declaration order
    pub const ALL: [GroupingPolicy; 2] = [GroupingPolicy::PlanStack, GroupingPolicy::CurrentTest];

    /// Stable kebab-case name, as accepted by [`FromStr`]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PlanStack => "plan-stack",
            Self::CurrentTest => "current-test",
        }
    }
}

impl fmt::Display for GroupingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupingPolicy {
    type Err = TapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "plan-stack" | "planstack" | "plan" => Ok(Self::PlanStack),
            "current-test" | "currenttest" | "test" => Ok(Self::CurrentTest),
            _ => Err(TapError::UnknownPolicy {
                name: s.to_string(),
            }),
        }
    }
}
