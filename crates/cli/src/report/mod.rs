// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering.
//!
//! Formatters are pure transformations of an already-filtered, immutable
//! report: rendering never mutates or re-filters it, and several formats
//! can be rendered from the same report in one run.

mod json;
mod markdown;
mod text;

use crate::cli::OutputFormat;
use crate::engine::AnalysisReport;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::{TextFormatter, print_text_report};

/// Trait for rendering an analysis report into an output format.
pub trait ReportFormatter {
    /// Render the report.
    fn format(&self, report: &AnalysisReport) -> anyhow::Result<String>;

    /// Output for a report with no matches and no errors.
    fn format_empty(&self) -> String;
}

/// Render a report in the requested format.
pub fn format_report(format: OutputFormat, report: &AnalysisReport) -> anyhow::Result<String> {
    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
    };

    if report.is_empty() && report.errors.is_empty() {
        Ok(formatter.format_empty())
    } else {
        formatter.format(report)
    }
}

/// Pluralizing helper for summary lines.
pub fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
