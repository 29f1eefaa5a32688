// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::io::Write;

use termcolor::{ColorSpec, WriteColor};

use crate::color::scheme;
use crate::engine::AnalysisReport;

use super::{ReportFormatter, count_noun};

/// Text format report formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &AnalysisReport) -> anyhow::Result<String> {
        use std::fmt::Write;

        let mut output = String::with_capacity(report.total_matches() * 120);

        for (file, records) in &report.files {
            for (line_number, record) in records {
                writeln!(
                    output,
                    "{}:{}: [{}] {}",
                    file,
                    line_number,
                    record.severity,
                    record.line.trim_end()
                )?;
                if !record.tags.is_empty() {
                    writeln!(output, "  tags: {}", record.tags.join(", "))?;
                }
                for idea in &record.ideas {
                    writeln!(output, "  - {}", idea)?;
                }
            }
        }

        if !report.errors.is_empty() {
            writeln!(output)?;
            for (file, message) in &report.errors {
                writeln!(output, "skipped {}: {}", file, message)?;
            }
        }

        writeln!(
            output,
            "\n{} across {}",
            count_noun(report.total_matches(), "suggestion"),
            count_noun(report.files.len(), "file")
        )?;

        Ok(output)
    }

    fn format_empty(&self) -> String {
        "No suggestions.\n".to_string()
    }
}

/// Write the text report with severity coloring to a terminal stream.
///
/// Same shape as [`TextFormatter::format`], colored per the scheme.
pub fn print_text_report(out: &mut dyn WriteColor, report: &AnalysisReport) -> anyhow::Result<()> {
    if report.is_empty() && report.errors.is_empty() {
        writeln!(out, "No suggestions.")?;
        return Ok(());
    }

    for (file, records) in &report.files {
        for (line_number, record) in records {
            out.set_color(&scheme::path())?;
            write!(out, "{}", file)?;
            out.reset()?;
            write!(out, ":")?;
            out.set_color(&scheme::line_number())?;
            write!(out, "{}", line_number)?;
            out.reset()?;
            write!(out, ": [")?;
            out.set_color(&scheme::severity(record.severity))?;
            write!(out, "{}", record.severity)?;
            out.reset()?;
            writeln!(out, "] {}", record.line.trim_end())?;

            if !record.tags.is_empty() {
                writeln!(out, "  tags: {}", record.tags.join(", "))?;
            }
            out.set_color(&scheme::idea())?;
            for idea in &record.ideas {
                writeln!(out, "  - {}", idea)?;
            }
            out.reset()?;
        }
    }

    if !report.errors.is_empty() {
        writeln!(out)?;
        for (file, message) in &report.errors {
            out.set_color(ColorSpec::new().set_dimmed(true))?;
            writeln!(out, "skipped {}: {}", file, message)?;
            out.reset()?;
        }
    }

    writeln!(
        out,
        "\n{} across {}",
        count_noun(report.total_matches(), "suggestion"),
        count_noun(report.files.len(), "file")
    )?;

    Ok(())
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
