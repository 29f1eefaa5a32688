// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File tree walking for scan targets.
//!
//! Thin wrapper around the `ignore` walker: honors .gitignore, skips
//! hidden entries, and applies the configured include/exclude globs. The
//! engine itself never walks directories; it consumes the list produced
//! here.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

/// Walker configuration.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Include globs, matched against root-relative paths. Empty = all files.
    pub include: Vec<String>,
    /// Exclude globs, matched against root-relative paths.
    pub exclude: Vec<String>,
    /// Maximum directory depth to descend.
    pub max_depth: Option<usize>,
    /// Respect .gitignore files.
    pub git_ignore: bool,
    /// Include hidden files and directories.
    pub hidden: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            max_depth: None,
            git_ignore: true,
            hidden: false,
        }
    }
}

/// A file selected for scanning.
#[derive(Debug, Clone)]
pub struct WalkedFile {
    pub path: PathBuf,
}

/// Walk statistics, for verbose output.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkStats {
    pub files_found: usize,
    pub files_excluded: usize,
}

/// Walks a tree and collects scan targets.
pub struct FileWalker {
    config: WalkerConfig,
    include: GlobSet,
    exclude: GlobSet,
}

impl FileWalker {
    /// Compile the configured globs. Fails on malformed glob syntax.
    pub fn new(config: WalkerConfig) -> anyhow::Result<Self> {
        let include = build_globset(&config.include)?;
        let exclude = build_globset(&normalize_exclude_patterns(&config.exclude))?;
        Ok(Self {
            config,
            include,
            exclude,
        })
    }

    /// Collect files under `root`, sorted by path.
    ///
    /// Unreadable directory entries are logged and skipped; walking never
    /// fails the run.
    pub fn walk_collect(&self, root: &Path) -> (Vec<WalkedFile>, WalkStats) {
        let mut files = Vec::new();
        let mut stats = WalkStats::default();

        let mut builder = WalkBuilder::new(root);
        builder
            .git_ignore(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .git_global(false)
            .hidden(!self.config.hidden)
            .max_depth(self.config.max_depth);

        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "walk entry skipped");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());

            if !self.include.is_empty() && !self.include.is_match(relative) {
                stats.files_excluded += 1;
                continue;
            }
            if self.exclude.is_match(relative) {
                stats.files_excluded += 1;
                continue;
            }

            files.push(WalkedFile {
                path: entry.into_path(),
            });
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        stats.files_found = files.len();

        (files, stats)
    }
}

fn build_globset(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

/// Normalize exclude patterns to glob patterns.
///
/// - `dir/` -> `dir/**` (trailing slash means "everything in this directory")
/// - `dir` -> `dir/**` (bare directory name without wildcards)
/// - `dir/**` -> `dir/**` (already a glob pattern, kept as-is)
fn normalize_exclude_patterns(patterns: &[String]) -> Vec<String> {
    patterns
        .iter()
        .map(|p| {
            if p.ends_with('/') {
                format!("{}**", p)
            } else if !p.contains('*') {
                format!("{}/**", p.trim_end_matches('/'))
            } else {
                p.clone()
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
