// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Starter files written by `kibitz init`.

/// Starter kibitz.toml.
pub const DEFAULT_CONFIG: &str = r##"# kibitz configuration

[scan]
patterns = ["patterns/base.yaml"]
include = ["**/*.py"]
exclude = []
# Lines starting with one of these prefixes are skipped. Set to [] to
# match comments too.
comment_prefixes = ["#", "//"]
severity = "info"
tags = []
jobs = 0

[fix]
# Pattern expression -> replacement template ($1 interpolates captures).
# "import\\s+random" = "import secrets"

[fix.rules]
"##;

/// Starter pattern set.
pub const DEFAULT_PATTERNS: &str = r##"# kibitz pattern set
#
# Each entry maps a regular expression to a severity, tags, and a list of
# improvement ideas attached to every matching line.

'def\s+\w+\([^)]*\):$':
  severity: info
  tags: [function]
  ideas:
    - Use explicit return type hints for better API introspection and editor support.
    - Apply decorator-based logging for entry/exit diagnostics.

'return\s+':
  severity: info
  tags: [function, return]
  ideas:
    - Run schema validation on the returned object before it leaves the service.
    - Consider transforming objects into serializable DTOs before returning to clients.

'import\s+random':
  severity: warning
  tags: [import, random]
  ideas:
    - Refactor to support pluggable RNG modules (e.g. secrets or numpy).
    - Encapsulate RNG access in one module for unit testing and mocking.
    - Introduce entropy seed management for experiment repeatability.

'random\.(choice|uniform|randint)':
  severity: warning
  tags: [random]
  ideas:
    - Make entropy ranges and options configurable via config file.
    - Store generated randomness in logs for traceability.

'json\.loads\(Path\([^)]+\)\.read_text\(\)\)':
  severity: warning
  tags: [io]
  ideas:
    - Move I/O to a dedicated repository or storage layer.
    - Add structured validation for all input data.

'\.format\(':
  severity: info
  tags: [string]
  ideas:
    - Prefer f-strings in Python 3.6+ for performance and clarity.
    - Validate that the number of placeholders matches the arguments.

'except\s*:':
  severity: critical
  tags: [error-handling]
  ideas:
    - Catch specific exception types instead of a bare except clause.
    - Log exception context with stack traces.

'subprocess\.\w+\(.*shell=True':
  severity: critical
  tags: [security, subprocess]
  ideas:
    - Avoid shell=True; validate all inputs to prevent shell injection.
    - Prefer subprocess.run with an argument list and check=True.

'yaml\.load\(':
  severity: critical
  tags: [security, io]
  ideas:
    - Use yaml.safe_load to avoid arbitrary code execution risks.
"##;
