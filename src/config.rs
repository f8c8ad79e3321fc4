//! Configuration model, discovery, and parsing.
//!
//! The configuration file enumerates named checks and prompts. Parsing
//! keeps the raw document text so every check and prompt can be associated
//! with its source line; validator and execution diagnostics cite
//! `file:line` from that index.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Default per-check timeout applied when `timeout` is absent or zero.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The only supported document version.
pub const SUPPORTED_VERSION: &str = "1";

/// File names probed, in order, when no explicit `--config` path is given.
pub const DISCOVERY_NAMES: [&str; 4] = [
    "vibeguard.yaml",
    "vibeguard.yml",
    ".vibeguard.yaml",
    ".vibeguard.yml",
];

/// One or many grok patterns, applied in order against the same output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum GrokSpec {
    One(String),
    Many(Vec<String>),
}

impl GrokSpec {
    /// Patterns in application order.
    #[must_use]
    pub fn patterns(&self) -> Vec<&str> {
        match self {
            Self::One(p) => vec![p.as_str()],
            Self::Many(ps) => ps.iter().map(String::as_str).collect(),
        }
    }
}

/// Value of an event handler: an ordered sequence of prompt references
/// (identifier-shaped entries) and/or inline content, or a single bare
/// string of inline content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EventValue {
    Refs(Vec<String>),
    Inline(String),
}

/// Event handler mapping for a check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventHandlers {
    #[serde(default)]
    pub success: Option<EventValue>,
    #[serde(default)]
    pub failure: Option<EventValue>,
    #[serde(default)]
    pub timeout: Option<EventValue>,
}

/// A named text body, invokable on stdout and referenced by event
/// handlers.
#[derive(Debug, Clone, Deserialize)]
pub struct Prompt {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The unit of work: a shell command plus evaluation policy.
#[derive(Debug, Clone, Deserialize)]
pub struct Check {
    pub id: String,
    #[serde(default)]
    pub run: String,
    #[serde(default)]
    pub grok: Option<GrokSpec>,
    /// When set, this file's contents replace the captured output for
    /// extraction and assertion input.
    #[serde(default)]
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub assert: Option<String>,
    #[serde(default)]
    pub severity: crate::types::Severity,
    #[serde(default)]
    pub suggestion: Option<String>,
    #[serde(default)]
    pub requires: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_timeout")]
    pub timeout: Option<Duration>,
    #[serde(default)]
    pub on: Option<EventHandlers>,
}

impl Check {
    /// The configured timeout, with zero and absence meaning the default.
    #[must_use]
    pub fn effective_timeout(&self) -> Duration {
        match self.timeout {
            Some(t) if !t.is_zero() => t,
            _ => DEFAULT_TIMEOUT,
        }
    }
}

/// Top-level configuration document.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub vars: BTreeMap<String, String>,
    #[serde(default)]
    pub prompts: Vec<Prompt>,
    #[serde(default)]
    pub checks: Vec<Check>,
}

impl Config {
    /// The document version with the default applied.
    #[must_use]
    pub fn effective_version(&self) -> &str {
        self.version.as_deref().unwrap_or(SUPPORTED_VERSION)
    }

    /// Look up a check by id.
    #[must_use]
    pub fn check(&self, id: &str) -> Option<&Check> {
        self.checks.iter().find(|c| c.id == id)
    }

    /// Look up a prompt by id.
    #[must_use]
    pub fn prompt(&self, id: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == id)
    }
}

/// Source line numbers (1-based) for each check and prompt, by index.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    pub checks: Vec<usize>,
    pub prompts: Vec<usize>,
}

impl LineIndex {
    /// Line of the nth check, when the scanner found it.
    #[must_use]
    pub fn check_line(&self, index: usize) -> Option<usize> {
        self.checks.get(index).copied()
    }

    /// Line of the nth prompt, when the scanner found it.
    #[must_use]
    pub fn prompt_line(&self, index: usize) -> Option<usize> {
        self.prompts.get(index).copied()
    }
}

/// A parsed configuration together with its source path and line index.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: PathBuf,
    pub lines: LineIndex,
}

impl LoadedConfig {
    /// Line of the check with the given id.
    #[must_use]
    pub fn line_of_check(&self, id: &str) -> Option<usize> {
        let index = self.config.checks.iter().position(|c| c.id == id)?;
        self.lines.check_line(index)
    }
}

/// Discover and load the configuration: an explicit path, or the first of
/// [`DISCOVERY_NAMES`] that exists in `cwd`.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig, ConfigError> {
    if let Some(path) = explicit {
        return load(path);
    }
    for name in DISCOVERY_NAMES {
        let candidate = cwd.join(name);
        if candidate.is_file() {
            return load(&candidate);
        }
    }
    Err(ConfigError::new(
        cwd,
        format!(
            "no configuration file found (looked for {})",
            DISCOVERY_NAMES.join(", ")
        ),
    ))
}

/// Load and parse a configuration file.
pub fn load(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::new(path, format!("cannot read file: {e}")))?;
    parse(&raw, path)
}

/// Parse a configuration document. Split from [`load`] so tests can feed
/// documents without touching the filesystem.
pub fn parse(raw: &str, path: &Path) -> Result<LoadedConfig, ConfigError> {
    let config: Config = serde_yaml::from_str(raw).map_err(|e| {
        let line = e.location().map(|loc| loc.line());
        ConfigError {
            path: path.to_path_buf(),
            line,
            message: format!("invalid document: {e}"),
        }
    })?;
    Ok(LoadedConfig {
        config,
        path: path.to_path_buf(),
        lines: index_source(raw),
    })
}

/// Scan the raw document for the source line of each `checks:` and
/// `prompts:` sequence item. The scanner is deliberately shallow: it
/// tracks the active top-level key and records lines that open a sequence
/// item at the first item's indentation.
#[must_use]
pub fn index_source(raw: &str) -> LineIndex {
    #[derive(PartialEq)]
    enum Section {
        None,
        Checks,
        Prompts,
    }

    let mut index = LineIndex::default();
    let mut section = Section::None;
    let mut item_indent: Option<usize> = None;

    for (n, line) in raw.lines().enumerate() {
        let lineno = n + 1;
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let indent = line.len() - trimmed.len();
        let is_item = trimmed == "-" || trimmed.starts_with("- ");

        // Zero-indented sequence items still belong to the open section.
        if indent == 0 && !is_item {
            section = match trimmed.split(':').next() {
                Some("checks") => Section::Checks,
                Some("prompts") => Section::Prompts,
                _ => Section::None,
            };
            item_indent = None;
            // A flow-style sequence on the key line itself is out of scope
            // for the index; diagnostics fall back to line-less messages.
            continue;
        }

        if section == Section::None {
            continue;
        }
        if is_item {
            let expected = *item_indent.get_or_insert(indent);
            if indent == expected {
                match section {
                    Section::Checks => index.checks.push(lineno),
                    Section::Prompts => index.prompts.push(lineno),
                    Section::None => {}
                }
            }
        }
    }

    index
}

/// Accepts `30s` / `2m` / `1h` strings (humantime) as well as bare
/// integers, which are taken as seconds.
fn deserialize_timeout<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct TimeoutVisitor;

    impl serde::de::Visitor<'_> for TimeoutVisitor {
        type Value = Option<Duration>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a duration string like \"30s\" or a number of seconds")
        }

        fn visit_u64<E: serde::de::Error>(self, secs: u64) -> Result<Self::Value, E> {
            Ok(Some(Duration::from_secs(secs)))
        }

        fn visit_i64<E: serde::de::Error>(self, secs: i64) -> Result<Self::Value, E> {
            u64::try_from(secs)
                .map(|s| Some(Duration::from_secs(s)))
                .map_err(|_| E::custom("timeout must be non-negative"))
        }

        fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
            humantime::parse_duration(value.trim())
                .map(Some)
                .map_err(|e| E::custom(format!("invalid duration {value:?}: {e}")))
        }

        fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }

    deserializer.deserialize_any(TimeoutVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    fn parse_ok(raw: &str) -> LoadedConfig {
        parse(raw, Path::new("vibeguard.yaml")).expect("document should parse")
    }

    #[test]
    fn minimal_document_parses_with_defaults() {
        let loaded = parse_ok(
            r#"
version: "1"
checks:
  - id: vet
    run: "true"
"#,
        );
        let check = &loaded.config.checks[0];
        assert_eq!(check.id, "vet");
        assert_eq!(check.severity, Severity::Error);
        assert_eq!(check.effective_timeout(), DEFAULT_TIMEOUT);
        assert!(check.requires.is_empty());
        assert!(loaded.config.prompts.is_empty());
    }

    #[test]
    fn version_defaults_to_supported() {
        let loaded = parse_ok("checks:\n  - id: a\n    run: \"true\"\n");
        assert_eq!(loaded.config.effective_version(), "1");
    }

    #[test]
    fn grok_accepts_string_and_sequence() {
        let loaded = parse_ok(
            r#"
checks:
  - id: one
    run: echo
    grok: "coverage: %{NUMBER:coverage}%"
  - id: many
    run: echo
    grok:
      - "%{NUMBER:a}"
      - "%{WORD:b}"
"#,
        );
        assert_eq!(
            loaded.config.checks[0].grok.as_ref().unwrap().patterns(),
            vec!["coverage: %{NUMBER:coverage}%"]
        );
        assert_eq!(
            loaded.config.checks[1].grok.as_ref().unwrap().patterns().len(),
            2
        );
    }

    #[test]
    fn event_values_parse_both_forms() {
        let loaded = parse_ok(
            r#"
prompts:
  - id: init
    content: setup
checks:
  - id: vet
    run: "false"
    on:
      failure: [init, "Also re-run gofmt"]
      success: "all good"
"#,
        );
        let on = loaded.config.checks[0].on.as_ref().unwrap();
        assert_eq!(
            on.failure,
            Some(EventValue::Refs(vec![
                "init".to_string(),
                "Also re-run gofmt".to_string()
            ]))
        );
        assert_eq!(on.success, Some(EventValue::Inline("all good".to_string())));
    }

    #[test]
    fn timeout_parses_suffixed_and_bare_forms() {
        let loaded = parse_ok(
            r#"
checks:
  - id: a
    run: echo
    timeout: 1s
  - id: b
    run: echo
    timeout: 90
  - id: c
    run: echo
    timeout: 0
"#,
        );
        assert_eq!(loaded.config.checks[0].timeout, Some(Duration::from_secs(1)));
        assert_eq!(loaded.config.checks[1].timeout, Some(Duration::from_secs(90)));
        // Zero means "apply default".
        assert_eq!(loaded.config.checks[2].effective_timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn negative_timeout_is_rejected() {
        let err = parse("checks:\n  - id: a\n    run: echo\n    timeout: -5\n", Path::new("x.yaml"))
            .unwrap_err();
        assert!(err.message.contains("non-negative"), "{}", err.message);
    }

    #[test]
    fn malformed_yaml_reports_a_line() {
        let err = parse("checks:\n  - id: [\n", Path::new("x.yaml")).unwrap_err();
        assert!(err.line.is_some());
    }

    #[test]
    fn line_index_tracks_checks_and_prompts() {
        let raw = r#"version: "1"
prompts:
  - id: init
    content: hello
  - id: retry
    content: again
checks:
  - id: vet
    run: "true"

  - id: lint
    run: "false"
"#;
        let index = index_source(raw);
        assert_eq!(index.prompts, vec![3, 5]);
        assert_eq!(index.checks, vec![8, 11]);
    }

    #[test]
    fn line_index_handles_zero_indented_items() {
        let raw = "checks:\n- id: a\n  run: x\n- id: b\n  run: y\n";
        let index = index_source(raw);
        assert_eq!(index.checks, vec![2, 4]);
    }

    #[test]
    fn line_index_ignores_nested_sequences() {
        let raw = r#"checks:
  - id: vet
    run: "true"
    requires:
      - other
      - another
  - id: other
    run: "true"
"#;
        let index = index_source(raw);
        assert_eq!(index.checks, vec![2, 7]);
    }

    #[test]
    fn discovery_prefers_earlier_names() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("vibeguard.yml"), "checks:\n  - id: a\n    run: x\n")
            .unwrap();
        std::fs::write(
            dir.path().join("vibeguard.yaml"),
            "checks:\n  - id: b\n    run: x\n",
        )
        .unwrap();
        let loaded = discover(None, dir.path()).unwrap();
        assert_eq!(loaded.config.checks[0].id, "b");
    }

    #[test]
    fn discovery_without_candidates_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover(None, dir.path()).unwrap_err();
        assert!(err.message.contains("no configuration file found"));
    }

    #[test]
    fn explicit_path_wins_over_discovery() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("custom.yaml");
        std::fs::write(&explicit, "checks:\n  - id: c\n    run: x\n").unwrap();
        let loaded = discover(Some(&explicit), dir.path()).unwrap();
        assert_eq!(loaded.config.checks[0].id, "c");
    }
}
