//! Per-file pattern scanning.
//!
//! The scanner tests every pattern against every line of already-decoded
//! content. Matching is strictly single-line: an expression either matches
//! somewhere within one line or not at all. File I/O and encoding are the
//! engine's concern.

use std::collections::BTreeMap;

use crate::pattern::PatternSet;
use crate::severity::Severity;

/// The aggregate result of one or more patterns matching one line.
///
/// One record exists per (file, line). When several patterns hit the same
/// line, tags and ideas accumulate in pattern order and severity is the
/// maximum among the matching patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// The matched line, verbatim.
    pub line: String,
    pub severity: Severity,
    /// Unique tags, in pattern order then authoring order.
    pub tags: Vec<String>,
    /// Concatenated ideas in pattern order. Repeats are kept.
    pub ideas: Vec<String>,
    /// Expressions of the patterns that hit this line, in pattern order.
    /// Consumed by the auto-fixer to look up fix rules.
    pub expressions: Vec<String>,
}

/// Scan options. Lines are skipped before matching when they are blank or
/// start (after leading whitespace) with one of the comment prefixes; an
/// empty prefix list disables skipping entirely.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub comment_prefixes: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            comment_prefixes: vec!["#".to_string(), "//".to_string()],
        }
    }
}

impl ScanOptions {
    /// Match every line, including blank and comment lines.
    pub fn exhaustive() -> Self {
        Self {
            comment_prefixes: Vec::new(),
        }
    }

    fn skips(&self, line: &str) -> bool {
        if self.comment_prefixes.is_empty() {
            return false;
        }
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            return true;
        }
        self.comment_prefixes.iter().any(|p| trimmed.starts_with(p))
    }
}

/// Scan `content` line by line against `patterns`.
///
/// Returns a sparse map from 1-based line number to the line's match
/// record; lines with no matching pattern produce no entry. The result is
/// a pure function of (content, pattern set, options).
pub fn scan(
    patterns: &PatternSet,
    content: &str,
    options: &ScanOptions,
) -> BTreeMap<usize, MatchRecord> {
    let mut records = BTreeMap::new();

    for (idx, line) in content.lines().enumerate() {
        if options.skips(line) {
            continue;
        }
        if let Some(record) = scan_line(patterns, line) {
            records.insert(idx + 1, record);
        }
    }

    records
}

/// Build the match record for one line, or None if nothing hits.
fn scan_line(patterns: &PatternSet, line: &str) -> Option<MatchRecord> {
    let mut record: Option<MatchRecord> = None;

    for pattern in patterns.iter() {
        if !pattern.hits(line) {
            continue;
        }

        match record.as_mut() {
            None => {
                record = Some(MatchRecord {
                    line: line.to_string(),
                    severity: pattern.severity,
                    tags: pattern.tags.clone(),
                    ideas: pattern.ideas.clone(),
                    expressions: vec![pattern.expression.clone()],
                });
            }
            Some(existing) => {
                existing.severity = existing.severity.max(pattern.severity);
                for tag in &pattern.tags {
                    if !existing.tags.contains(tag) {
                        existing.tags.push(tag.clone());
                    }
                }
                existing.ideas.extend(pattern.ideas.iter().cloned());
                existing.expressions.push(pattern.expression.clone());
            }
        }
    }

    record
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
