// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Severity levels for pattern matches.
//!
//! Severity is a closed, totally ordered enumeration. The derived `Ord`
//! follows declaration order: info < warning < critical.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of an improvement suggestion.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Advisory only.
    #[default]
    Info,
    /// Worth fixing.
    Warning,
    /// Fix before shipping.
    Critical,
}

impl Severity {
    /// Stable lowercase name, as used in pattern files and report output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "severity_tests.rs"]
mod tests;
