// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling for text output.

use termcolor::{ColorChoice, ColorSpec};

use crate::severity::Severity;

/// Color output mode, as selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolve the effective color choice. `--no-color` wins over everything;
/// `auto` colors only when stdout is a terminal.
pub fn resolve_color(mode: ColorMode, no_color: bool, is_tty: bool) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto => {
            if is_tty {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            }
        }
    }
}

/// Color scheme for text reports.
pub mod scheme {
    use super::*;
    use termcolor::Color;

    /// Severity marker color: info plain, warning yellow, critical red bold.
    pub fn severity(level: Severity) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match level {
            Severity::Info => {}
            Severity::Warning => {
                spec.set_fg(Some(Color::Yellow));
            }
            Severity::Critical => {
                spec.set_fg(Some(Color::Red)).set_bold(true);
            }
        }
        spec
    }

    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    pub fn line_number() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    pub fn idea() -> ColorSpec {
        ColorSpec::new()
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
