// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Init command implementation.
//!
//! Writes a starter kibitz.toml and patterns/base.yaml into the current
//! directory.

use std::fs;
use std::path::Path;

use anyhow::Context;

use kibitz::cli::InitArgs;
use kibitz::config::{DEFAULT_CONFIG, DEFAULT_PATTERNS};

pub fn run(args: &InitArgs) -> anyhow::Result<i32> {
    let cwd = std::env::current_dir()?;

    write_file(&cwd.join("kibitz.toml"), DEFAULT_CONFIG, args.force)?;
    write_file(
        &cwd.join("patterns").join("base.yaml"),
        DEFAULT_PATTERNS,
        args.force,
    )?;

    println!("created kibitz.toml and patterns/base.yaml");
    Ok(0)
}

fn write_file(path: &Path, content: &str, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists; pass --force to overwrite",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
