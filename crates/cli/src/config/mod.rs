// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loaded from kibitz.toml.
//!
//! The config file is optional; every field has a default. Relative
//! pattern paths are resolved against the directory containing the config
//! file, or the working directory when no file was found.

mod defaults;

pub use defaults::{DEFAULT_CONFIG, DEFAULT_PATTERNS};

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::severity::Severity;

/// Top-level configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub fix: FixConfig,
}

/// Scan defaults, overridable per run from the command line.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Pattern set locations, resolved relative to the config file.
    pub patterns: Vec<PathBuf>,

    /// Include globs for the walker.
    pub include: Vec<String>,

    /// Exclude globs for the walker.
    pub exclude: Vec<String>,

    /// Comment prefixes that make the scanner skip a line. Empty list
    /// means every line is matched.
    pub comment_prefixes: Vec<String>,

    /// Minimum severity to report.
    pub severity: Severity,

    /// Tag filter; empty retains all records.
    pub tags: Vec<String>,

    /// Worker count. 0 means one worker per logical CPU.
    pub jobs: usize,

    /// Maximum directory depth to traverse.
    pub max_depth: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            include: Self::default_include(),
            exclude: Vec::new(),
            comment_prefixes: Self::default_comment_prefixes(),
            severity: Severity::Info,
            tags: Vec::new(),
            jobs: 0,
            max_depth: None,
        }
    }
}

impl ScanConfig {
    pub(crate) fn default_include() -> Vec<String> {
        vec!["**/*.py".to_string()]
    }

    pub(crate) fn default_comment_prefixes() -> Vec<String> {
        vec!["#".to_string(), "//".to_string()]
    }
}

/// Auto-fix rules: pattern expression -> replacement template.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct FixConfig {
    pub rules: BTreeMap<String, String>,
}

/// A loaded config together with the directory its relative paths
/// resolve against.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub base_dir: PathBuf,
}

impl Config {
    /// Parse a config file.
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Load from an explicit path, a discovered kibitz.toml, or defaults.
    pub fn load_or_default(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<LoadedConfig> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => crate::discovery::find_config(cwd),
        };

        match path {
            Some(path) => {
                let config = Config::load(&path)?;
                let base_dir = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| cwd.to_path_buf());
                tracing::debug!(config = %path.display(), "config loaded");
                Ok(LoadedConfig { config, base_dir })
            }
            None => Ok(LoadedConfig {
                config: Config::default(),
                base_dir: cwd.to_path_buf(),
            }),
        }
    }

    /// Pattern set paths with relative entries resolved against `base`.
    pub fn pattern_paths(&self, base: &Path) -> Vec<PathBuf> {
        self.scan
            .patterns
            .iter()
            .map(|p| {
                if p.is_absolute() {
                    p.clone()
                } else {
                    base.join(p)
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
