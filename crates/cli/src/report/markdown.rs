// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown format report output.
//!
//! Document form: grouped by file, then by line, listing severity, tags,
//! and the ordered idea list.

use std::fmt::Write;

use crate::engine::AnalysisReport;

use super::{ReportFormatter, count_noun};

/// Markdown format report formatter.
pub struct MarkdownFormatter;

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &AnalysisReport) -> anyhow::Result<String> {
        let mut output = String::with_capacity(report.total_matches() * 200);

        writeln!(output, "# Kibitz Report\n")?;
        writeln!(
            output,
            "_Generated {}_\n",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(
            output,
            "{} across {}.\n",
            count_noun(report.total_matches(), "suggestion"),
            count_noun(report.files.len(), "file")
        )?;

        for (file, records) in &report.files {
            writeln!(output, "## {}\n", file)?;

            for (line_number, record) in records {
                writeln!(output, "### Line {} ({})\n", line_number, record.severity)?;
                writeln!(output, "```")?;
                writeln!(output, "{}", record.line)?;
                writeln!(output, "```\n")?;

                if !record.tags.is_empty() {
                    let tags: Vec<String> =
                        record.tags.iter().map(|t| format!("`{}`", t)).collect();
                    writeln!(output, "Tags: {}\n", tags.join(", "))?;
                }

                if !record.ideas.is_empty() {
                    for idea in &record.ideas {
                        writeln!(output, "- {}", idea)?;
                    }
                    writeln!(output)?;
                }
            }
        }

        if !report.errors.is_empty() {
            writeln!(output, "## Skipped files\n")?;
            for (file, message) in &report.errors {
                writeln!(output, "- `{}`: {}", file, message)?;
            }
        }

        Ok(output)
    }

    fn format_empty(&self) -> String {
        "# Kibitz Report\n\nNo suggestions.\n".to_string()
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
