//! Parallel scan engine with per-file error isolation.
//!
//! Fans one scanner invocation per file out over a bounded rayon pool,
//! streams partial results back over a channel, and merges them into the
//! final report on a single consumer. A file's read or decode failure is
//! recorded against that file and never aborts the run.

use std::collections::BTreeMap;
use std::path::Path;

use rayon::prelude::*;

use crate::file_reader::FileContent;
use crate::pattern::PatternSet;
use crate::scanner::{self, MatchRecord, ScanOptions};
use crate::severity::Severity;
use crate::walker::WalkedFile;

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Worker count. 0 means one worker per logical CPU.
    pub jobs: usize,
    /// Retain only records at or above this severity.
    pub severity_threshold: Severity,
    /// If non-empty, retain only records whose tags intersect this set.
    pub tag_filter: Vec<String>,
    pub scan_options: ScanOptions,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            jobs: 0,
            severity_threshold: Severity::Info,
            tag_filter: Vec::new(),
            scan_options: ScanOptions::default(),
        }
    }
}

/// The aggregate result of a run: file path -> line number -> record,
/// plus the files that could not be read.
///
/// Both maps are BTreeMaps, so consumers see files in lexicographic path
/// order and lines in ascending numeric order regardless of the order in
/// which scans completed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub files: BTreeMap<String, BTreeMap<usize, MatchRecord>>,
    /// Per-file read/decode failures, path -> message.
    pub errors: BTreeMap<String, String>,
}

impl AnalysisReport {
    /// True if no file produced any match. Errors do not count as matches.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn total_matches(&self) -> usize {
        self.files.values().map(BTreeMap::len).sum()
    }

    /// Most severe record in the report, if any.
    pub fn max_severity(&self) -> Option<Severity> {
        self.files
            .values()
            .flat_map(BTreeMap::values)
            .map(|r| r.severity)
            .max()
    }
}

/// Orchestrates scanning across all target files.
pub struct Engine {
    patterns: PatternSet,
    config: EngineConfig,
}

impl Engine {
    pub fn new(patterns: PatternSet, config: EngineConfig) -> Self {
        Self { patterns, config }
    }

    /// Scan every file and return the filtered, ordered report.
    ///
    /// Paths in the report are rendered relative to `root` where possible.
    pub fn analyze(&self, root: &Path, files: &[WalkedFile]) -> anyhow::Result<AnalysisReport> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.jobs)
            .build()?;

        let (tx, rx) = crossbeam_channel::unbounded();

        pool.install(|| {
            files.par_iter().for_each_with(tx, |tx, file| {
                let key = display_path(root, &file.path);
                let outcome = self.scan_file(&file.path);
                // Send fails only if the receiver is gone, which means the
                // run is already over.
                let _ = tx.send((key, outcome));
            });
        });

        // All senders are dropped once the pool drains, so this consumes
        // every partial result. Each file key is inserted exactly once.
        let mut report = AnalysisReport::default();
        for (key, outcome) in rx.try_iter() {
            match outcome {
                Ok(records) => {
                    if !records.is_empty() {
                        report.files.insert(key, records);
                    }
                }
                Err(message) => {
                    tracing::warn!(file = %key, error = %message, "file skipped");
                    report.errors.insert(key, message);
                }
            }
        }

        self.apply_filters(&mut report);
        Ok(report)
    }

    fn scan_file(&self, path: &Path) -> Result<BTreeMap<usize, MatchRecord>, String> {
        let content = FileContent::read(path).map_err(|e| e.to_string())?;
        let text = content
            .as_str()
            .ok_or_else(|| "not valid UTF-8".to_string())?;
        Ok(scanner::scan(&self.patterns, text, &self.config.scan_options))
    }

    /// Severity and tag filtering, applied once after aggregation.
    fn apply_filters(&self, report: &mut AnalysisReport) {
        let threshold = self.config.severity_threshold;
        let tags = &self.config.tag_filter;

        for records in report.files.values_mut() {
            records.retain(|_, record| {
                record.severity >= threshold
                    && (tags.is_empty() || record.tags.iter().any(|t| tags.contains(t)))
            });
        }
        report.files.retain(|_, records| !records.is_empty());
    }
}

fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
