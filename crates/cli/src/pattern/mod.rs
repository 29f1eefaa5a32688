// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Improvement patterns and the immutable pattern set.
//!
//! A pattern pairs one regular expression with a severity, a tag set, and
//! an ordered list of improvement ideas. Pattern sets are assembled once at
//! startup by the loader and are read-only for the rest of the run.

pub mod loader;

pub use loader::{PatternLoadError, load_pattern_sets};

use regex::Regex;

use crate::severity::Severity;

/// One named regular expression with its associated advice.
///
/// The expression text is the pattern's identity: two patterns with the
/// same expression are the same pattern, and later definitions replace
/// earlier ones during loading.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// The expression as written in the pattern file.
    pub expression: String,
    /// Compiled form, built once at load time.
    pub regex: Regex,
    pub severity: Severity,
    /// Unique tags in authoring order.
    pub tags: Vec<String>,
    /// Ideas in authoring order. Deliberately not deduplicated.
    pub ideas: Vec<String>,
}

impl Pattern {
    /// True if the expression matches anywhere within the line.
    pub fn hits(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

/// An ordered, immutable collection of patterns.
///
/// Insertion order is load order across source files. Duplicate
/// expressions keep their original position but carry the last-loaded
/// definition.
#[derive(Debug, Default, Clone)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from already-compiled patterns, applying the same
    /// last-definition-wins rule as the loader.
    pub fn from_patterns(patterns: impl IntoIterator<Item = Pattern>) -> Self {
        let mut set = Self::new();
        for pattern in patterns {
            set.insert(pattern);
        }
        set
    }

    /// Insert a pattern, replacing any existing pattern with the same
    /// expression in place. Returns true if a definition was replaced.
    pub(crate) fn insert(&mut self, pattern: Pattern) -> bool {
        match self
            .patterns
            .iter()
            .position(|p| p.expression == pattern.expression)
        {
            Some(idx) => {
                self.patterns[idx] = pattern;
                true
            }
            None => {
                self.patterns.push(pattern);
                false
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
