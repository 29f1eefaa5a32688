// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern set loading and validation.
//!
//! Pattern files are YAML mappings from a regular expression to a record
//! with a required `severity` and optional `tags` / `ideas`:
//!
//! ```yaml
//! "import\\s+random":
//!   severity: warning
//!   tags: [import, random]
//!   ideas:
//!     - Encapsulate RNG access behind a seam that tests can replace.
//! ```
//!
//! Loading is all-or-nothing: any malformed entry fails the whole load.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use super::{Pattern, PatternSet};
use crate::severity::Severity;

/// Fatal pattern-set load failure. Surfaced before any scanning starts;
/// a partial pattern set is never returned.
#[derive(Debug, Error)]
pub enum PatternLoadError {
    #[error("failed to read pattern set {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("pattern set {}: {message}", path.display())]
    Malformed { path: PathBuf, message: String },

    #[error("pattern set {} is not a YAML mapping", path.display())]
    NotAMapping { path: PathBuf },

    #[error("pattern set {}: entry `{key}`: {message}", path.display())]
    InvalidEntry {
        path: PathBuf,
        key: String,
        message: String,
    },

    #[error("pattern set {}: expression `{key}` does not compile", path.display())]
    InvalidExpression {
        path: PathBuf,
        key: String,
        #[source]
        source: regex::Error,
    },
}

/// On-disk shape of one pattern entry. `severity` is required; an
/// unrecognized level is a load error, never a default.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PatternEntry {
    severity: Severity,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    ideas: Vec<String>,
}

/// Load and merge pattern sets from `paths`, in argument order.
///
/// A duplicate expression across files replaces the earlier definition
/// entirely (no field-level merge) and logs a provenance note.
pub fn load_pattern_sets(paths: &[PathBuf]) -> Result<PatternSet, PatternLoadError> {
    let mut set = PatternSet::new();

    for path in paths {
        load_into(&mut set, path)?;
    }

    tracing::debug!(patterns = set.len(), files = paths.len(), "pattern sets loaded");
    Ok(set)
}

fn load_into(set: &mut PatternSet, path: &Path) -> Result<(), PatternLoadError> {
    let text = fs::read_to_string(path).map_err(|source| PatternLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let doc: serde_yaml::Value =
        serde_yaml::from_str(&text).map_err(|e| PatternLoadError::Malformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    // serde_yaml::Mapping preserves document order, which becomes the
    // pattern set's insertion order.
    let mapping = doc.as_mapping().ok_or_else(|| PatternLoadError::NotAMapping {
        path: path.to_path_buf(),
    })?;

    for (key, value) in mapping {
        let expression = key
            .as_str()
            .ok_or_else(|| PatternLoadError::Malformed {
                path: path.to_path_buf(),
                message: "expression keys must be strings".to_string(),
            })?
            .to_string();

        let entry: PatternEntry =
            serde_yaml::from_value(value.clone()).map_err(|e| PatternLoadError::InvalidEntry {
                path: path.to_path_buf(),
                key: expression.clone(),
                message: e.to_string(),
            })?;

        let regex = Regex::new(&expression).map_err(|source| PatternLoadError::InvalidExpression {
            path: path.to_path_buf(),
            key: expression.clone(),
            source,
        })?;

        let replaced = set.insert(Pattern {
            regex,
            severity: entry.severity,
            tags: dedup_preserving_order(entry.tags),
            ideas: entry.ideas,
            expression: expression.clone(),
        });

        if replaced {
            tracing::warn!(
                expression = %expression,
                source = %path.display(),
                "pattern redefined; later definition wins"
            );
        }
    }

    Ok(())
}

/// Tags are a set: drop repeats but keep first-seen order.
fn dedup_preserving_order(tags: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(tags.len());
    for tag in tags {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
