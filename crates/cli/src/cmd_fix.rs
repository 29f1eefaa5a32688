// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fix command implementation.
//!
//! Runs a scan with the configured filters, then applies the configured
//! fix rules to the resulting report.

use std::path::PathBuf;

use kibitz::cli::{Cli, FixArgs};
use kibitz::config::Config;
use kibitz::engine::{Engine, EngineConfig};
use kibitz::fix::{FixSummary, apply_fixes};
use kibitz::pattern::load_pattern_sets;
use kibitz::report::count_noun;
use kibitz::scanner::ScanOptions;

use crate::cmd_scan::collect_targets;

/// Run the fix command. Returns the process exit code: 0 when every fix
/// applied cleanly, 1 when conflicts or per-file errors were reported.
pub fn run(cli: &Cli, args: &FixArgs) -> anyhow::Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = Config::load_or_default(cli.config.as_deref(), &cwd)?;
    let config = &loaded.config;

    if config.fix.rules.is_empty() {
        anyhow::bail!("no fix rules configured; add a [fix.rules] table to kibitz.toml");
    }

    let pattern_paths: Vec<PathBuf> = if args.patterns.is_empty() {
        config.pattern_paths(&loaded.base_dir)
    } else {
        args.patterns.clone()
    };
    if pattern_paths.is_empty() {
        anyhow::bail!("no pattern sets configured; pass --patterns or run `kibitz init`");
    }

    let patterns = load_pattern_sets(&pattern_paths)?;

    let engine = Engine::new(
        patterns,
        EngineConfig {
            jobs: args.jobs.unwrap_or(config.scan.jobs),
            severity_threshold: config.scan.severity,
            tag_filter: config.scan.tags.clone(),
            scan_options: ScanOptions {
                comment_prefixes: config.scan.comment_prefixes.clone(),
            },
        },
    );

    let files = collect_targets(&args.paths, None, config, &cwd)?;
    let report = engine.analyze(&cwd, &files)?;

    let summary = apply_fixes(&report, &config.fix.rules, &cwd, args.dry_run);
    print_summary(&summary, args.dry_run);

    Ok(if summary.has_conflicts() || !summary.errors.is_empty() {
        1
    } else {
        0
    })
}

fn print_summary(summary: &FixSummary, dry_run: bool) {
    let verb = if dry_run { "would fix" } else { "fixed" };
    println!(
        "{} {} across {}",
        verb,
        count_noun(summary.lines_fixed, "line"),
        count_noun(summary.files_modified.len(), "file")
    );

    for conflict in &summary.conflicts {
        let competing: Vec<String> = conflict
            .expressions
            .iter()
            .map(|e| format!("`{}`", e))
            .collect();
        println!(
            "conflict {}:{}: competing rules {}",
            conflict.file,
            conflict.line,
            competing.join(", ")
        );
    }

    for (file, message) in &summary.errors {
        println!("skipped {}: {}", file, message);
    }

    if summary.lines_without_rule > 0 {
        println!(
            "{} had no fix rule",
            count_noun(summary.lines_without_rule, "matched line")
        );
    }
}
