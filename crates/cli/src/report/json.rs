// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.
//!
//! Field names are stable across runs. Absent tags/ideas render as empty
//! arrays, never as missing keys.

use serde_json::json;

use crate::engine::AnalysisReport;

use super::ReportFormatter;

/// JSON format report formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &AnalysisReport) -> anyhow::Result<String> {
        let mut files = serde_json::Map::new();
        for (file, records) in &report.files {
            let mut lines = serde_json::Map::new();
            for (line_number, record) in records {
                lines.insert(
                    line_number.to_string(),
                    json!({
                        "line": record.line,
                        "severity": record.severity,
                        "tags": record.tags,
                        "ideas": record.ideas,
                    }),
                );
            }
            files.insert(file.clone(), serde_json::Value::Object(lines));
        }

        let output = json!({
            "generated": chrono::Utc::now().to_rfc3339(),
            "files": files,
            "errors": report.errors,
            "summary": {
                "files": report.files.len(),
                "matches": report.total_matches(),
            },
        });

        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_empty(&self) -> String {
        r#"{"files": {}, "errors": {}, "summary": {"files": 0, "matches": 0}}"#.to_string()
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
