// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Auto-fix: rewrite matched lines per configured fix rules.
//!
//! A fix rule maps a pattern expression to a replacement template with
//! `regex::Regex::replace_all` semantics (`$1` capture interpolation).
//! Fixing is a best-effort text substitution, not a verified refactoring.
//!
//! Rules of engagement:
//! - a line whose matching patterns carry no rule is left alone;
//! - a line claimed by two or more rules is a conflict and is left alone;
//! - each file is rewritten all-or-nothing via a temp file and rename,
//!   and is treated as exclusively owned while being rewritten.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use regex::Regex;

use crate::engine::AnalysisReport;
use crate::scanner::MatchRecord;

/// Pattern expression -> replacement template.
pub type FixRules = BTreeMap<String, String>;

/// What happens to one matched line under the fix rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Exactly one registered rule applies.
    Apply {
        expression: String,
        template: String,
    },
    /// No matching pattern has a registered rule.
    NoRule,
    /// Two or more registered rules compete; the line stays untouched.
    Conflict { expressions: Vec<String> },
}

/// A line that matched more than one fixable pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixConflict {
    pub file: String,
    pub line: usize,
    /// The competing expressions, in pattern order.
    pub expressions: Vec<String>,
}

/// Result of a fix pass over a report.
#[derive(Debug, Default)]
pub struct FixSummary {
    /// Files rewritten, in path order.
    pub files_modified: Vec<String>,
    pub lines_fixed: usize,
    pub lines_without_rule: usize,
    pub conflicts: Vec<FixConflict>,
    /// Per-file read/write failures, path -> message. A file listed here
    /// was left untouched.
    pub errors: BTreeMap<String, String>,
}

impl FixSummary {
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

/// Decide the outcome for one matched line.
pub fn line_outcome(record: &MatchRecord, rules: &FixRules) -> LineOutcome {
    let fixable: Vec<&String> = record
        .expressions
        .iter()
        .filter(|e| rules.contains_key(*e))
        .collect();

    match fixable.as_slice() {
        [] => LineOutcome::NoRule,
        [expression] => LineOutcome::Apply {
            expression: (*expression).clone(),
            template: rules[*expression].clone(),
        },
        _ => LineOutcome::Conflict {
            expressions: fixable.into_iter().cloned().collect(),
        },
    }
}

/// Apply fix rules to every file in the report.
///
/// Report paths are resolved relative to `root`. When writing is skipped
/// (`dry_run`), the summary reflects what a real pass would have done.
pub fn apply_fixes(
    report: &AnalysisReport,
    rules: &FixRules,
    root: &Path,
    dry_run: bool,
) -> FixSummary {
    let mut summary = FixSummary::default();

    for (file, records) in &report.files {
        let path = root.join(file);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(file = %file, error = %e, "fix skipped, unreadable");
                summary.errors.insert(file.clone(), e.to_string());
                continue;
            }
        };

        if let Some(rewritten) = rewrite_content(&content, file, records, rules, &mut summary) {
            if dry_run {
                summary.files_modified.push(file.clone());
                continue;
            }
            match write_atomic(&path, &rewritten) {
                Ok(()) => summary.files_modified.push(file.clone()),
                Err(e) => {
                    tracing::warn!(file = %file, error = %e, "fix write failed");
                    summary.errors.insert(file.clone(), e.to_string());
                }
            }
        }
    }

    summary
}

/// Apply all non-conflicting fixes for one file's records.
///
/// Returns the rewritten content, or None when no line changed. Conflict
/// and no-rule bookkeeping lands in `summary` either way.
fn rewrite_content(
    content: &str,
    file: &str,
    records: &BTreeMap<usize, MatchRecord>,
    rules: &FixRules,
    summary: &mut FixSummary,
) -> Option<String> {
    let trailing_newline = content.ends_with('\n');
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
    let mut changed = false;

    for (line_number, record) in records {
        let Some(slot) = line_number
            .checked_sub(1)
            .and_then(|idx| lines.get_mut(idx))
        else {
            // The file shrank since it was scanned.
            continue;
        };

        match line_outcome(record, rules) {
            LineOutcome::NoRule => summary.lines_without_rule += 1,
            LineOutcome::Conflict { expressions } => summary.conflicts.push(FixConflict {
                file: file.to_string(),
                line: *line_number,
                expressions,
            }),
            LineOutcome::Apply {
                expression,
                template,
            } => {
                let Ok(regex) = Regex::new(&expression) else {
                    // Expressions come from an already-compiled pattern set.
                    continue;
                };
                let fixed = regex.replace_all(slot, template.as_str()).into_owned();
                summary.lines_fixed += 1;
                if fixed != *slot {
                    *slot = fixed;
                    changed = true;
                }
            }
        }
    }

    if !changed {
        return None;
    }

    let mut rewritten = lines.join("\n");
    if trailing_newline {
        rewritten.push('\n');
    }
    Some(rewritten)
}

/// All-or-nothing file replacement: write a sibling temp file, then rename
/// it over the original.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let tmp = path.with_file_name(format!(".{file_name}.kibitz-tmp"));

    fs::write(&tmp, content)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
#[path = "fix_tests.rs"]
mod tests;
