// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan command implementation.

use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Context;
use termcolor::StandardStream;

use kibitz::cli::{Cli, OutputFormat, ScanArgs};
use kibitz::color::resolve_color;
use kibitz::config::Config;
use kibitz::engine::{AnalysisReport, Engine, EngineConfig};
use kibitz::pattern::load_pattern_sets;
use kibitz::report;
use kibitz::scanner::ScanOptions;
use kibitz::walker::{FileWalker, WalkedFile, WalkerConfig};

/// Run the scan command. Returns the process exit code: 0 when the report
/// is clean, 1 when there are suggestions.
pub fn run(cli: &Cli, args: &ScanArgs) -> anyhow::Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = Config::load_or_default(cli.config.as_deref(), &cwd)?;
    let config = &loaded.config;

    // Pattern sources: command line overrides config.
    let pattern_paths: Vec<PathBuf> = if args.patterns.is_empty() {
        config.pattern_paths(&loaded.base_dir)
    } else {
        args.patterns.clone()
    };
    if pattern_paths.is_empty() {
        anyhow::bail!("no pattern sets configured; pass --patterns or run `kibitz init`");
    }

    // A load failure is fatal before any file is scanned.
    let patterns = load_pattern_sets(&pattern_paths)?;

    let scan_options = if args.no_skip_comments {
        ScanOptions::exhaustive()
    } else {
        ScanOptions {
            comment_prefixes: config.scan.comment_prefixes.clone(),
        }
    };

    let engine = Engine::new(
        patterns,
        EngineConfig {
            jobs: args.jobs.unwrap_or(config.scan.jobs),
            severity_threshold: args.severity.unwrap_or(config.scan.severity),
            tag_filter: if args.tags.is_empty() {
                config.scan.tags.clone()
            } else {
                args.tags.clone()
            },
            scan_options,
        },
    );

    let files = collect_targets(&args.paths, args.max_depth, config, &cwd)?;
    tracing::debug!(files = files.len(), "scan targets collected");

    let report = engine.analyze(&cwd, &files)?;
    write_report(args, &report)?;

    Ok(if report.is_empty() { 0 } else { 1 })
}

/// Resolve the scan roots and walk them into a file list.
pub(crate) fn collect_targets(
    paths: &[PathBuf],
    max_depth: Option<usize>,
    config: &Config,
    cwd: &std::path::Path,
) -> anyhow::Result<Vec<WalkedFile>> {
    let walker = FileWalker::new(WalkerConfig {
        include: config.scan.include.clone(),
        exclude: config.scan.exclude.clone(),
        max_depth: max_depth.or(config.scan.max_depth),
        ..Default::default()
    })?;

    let roots: Vec<PathBuf> = if paths.is_empty() {
        vec![cwd.to_path_buf()]
    } else {
        paths.to_vec()
    };

    let mut files = Vec::new();
    for root in &roots {
        if root.is_file() {
            // Explicit file arguments bypass the include globs.
            files.push(WalkedFile { path: root.clone() });
        } else {
            let (found, stats) = walker.walk_collect(root);
            tracing::debug!(
                root = %root.display(),
                found = stats.files_found,
                excluded = stats.files_excluded,
                "walked"
            );
            files.extend(found);
        }
    }

    Ok(files)
}

fn write_report(args: &ScanArgs, report: &AnalysisReport) -> anyhow::Result<()> {
    match &args.output_file {
        Some(path) => {
            let output = report::format_report(args.output, report)?;
            std::fs::write(path, output)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
        }
        None if args.output == OutputFormat::Text => {
            let choice = resolve_color(args.color, args.no_color, std::io::stdout().is_terminal());
            let mut stdout = StandardStream::stdout(choice);
            report::print_text_report(&mut stdout, report)?;
        }
        None => {
            let output = report::format_report(args.output, report)?;
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(output.as_bytes())?;
        }
    }
    Ok(())
}
