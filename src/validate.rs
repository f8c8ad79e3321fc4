//! Configuration validation.
//!
//! Runs after parsing, in a fixed order, short-circuiting at the first
//! failure: document version, presence of checks, per-check fields,
//! prompts, event-handler references, and finally acyclicity of the
//! `requires` graph. Every diagnostic is a [`ConfigError`] carrying the
//! file path and, when known, the source line of the offending entry.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

use crate::config::{EventValue, LoadedConfig, SUPPORTED_VERSION};
use crate::error::ConfigError;

static ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$").expect("identifier regex"));
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9-]*$").expect("tag regex"));

/// True when `s` is a well-formed check/prompt identifier.
#[must_use]
pub fn is_identifier(s: &str) -> bool {
    ID_RE.is_match(s)
}

/// True when `s` is a well-formed tag.
#[must_use]
pub fn is_tag(s: &str) -> bool {
    TAG_RE.is_match(s)
}

/// Validate a loaded configuration.
pub fn validate(loaded: &LoadedConfig) -> Result<(), ConfigError> {
    let config = &loaded.config;
    let path = &loaded.path;

    let version = config.effective_version();
    if version != SUPPORTED_VERSION {
        return Err(ConfigError::new(
            path,
            format!("unsupported version {version:?} (expected \"{SUPPORTED_VERSION}\")"),
        ));
    }

    if config.checks.is_empty() {
        return Err(ConfigError::new(path, "no checks defined"));
    }

    let check_ids: HashSet<&str> = config.checks.iter().map(|c| c.id.as_str()).collect();

    let mut seen = HashSet::new();
    for (i, check) in config.checks.iter().enumerate() {
        let line = loaded.lines.check_line(i);
        let fail = |message: String| ConfigError {
            path: path.clone(),
            line,
            message,
        };

        if check.id.is_empty() {
            return Err(fail("check is missing an id".to_string()));
        }
        if !is_identifier(&check.id) {
            return Err(fail(format!("invalid check id {:?}", check.id)));
        }
        if !seen.insert(check.id.as_str()) {
            return Err(fail(format!("duplicate check id {:?}", check.id)));
        }
        if check.run.trim().is_empty() {
            return Err(fail(format!("check {:?} has an empty run command", check.id)));
        }
        for dep in &check.requires {
            if dep == &check.id {
                return Err(fail(format!("check {:?} requires itself", check.id)));
            }
            if !check_ids.contains(dep.as_str()) {
                return Err(fail(format!(
                    "check {:?} requires unknown check {dep:?}",
                    check.id
                )));
            }
        }
        for tag in &check.tags {
            if !is_tag(tag) {
                return Err(fail(format!(
                    "check {:?} has invalid tag {tag:?}",
                    check.id
                )));
            }
        }
    }

    let mut prompt_ids = HashSet::new();
    for (i, prompt) in config.prompts.iter().enumerate() {
        let line = loaded.lines.prompt_line(i);
        let fail = |message: String| ConfigError {
            path: path.clone(),
            line,
            message,
        };

        if !is_identifier(&prompt.id) {
            return Err(fail(format!("invalid prompt id {:?}", prompt.id)));
        }
        if !prompt_ids.insert(prompt.id.as_str()) {
            return Err(fail(format!("duplicate prompt id {:?}", prompt.id)));
        }
        if prompt.content.trim().is_empty() {
            return Err(fail(format!("prompt {:?} has empty content", prompt.id)));
        }
        for tag in &prompt.tags {
            if !is_tag(tag) {
                return Err(fail(format!(
                    "prompt {:?} has invalid tag {tag:?}",
                    prompt.id
                )));
            }
        }
    }

    // Event handlers: identifier-shaped array entries are prompt
    // references and must resolve; anything else is inline content.
    for (i, check) in config.checks.iter().enumerate() {
        let Some(handlers) = &check.on else { continue };
        let line = loaded.lines.check_line(i);
        for (event, value) in [
            ("success", &handlers.success),
            ("failure", &handlers.failure),
            ("timeout", &handlers.timeout),
        ] {
            let Some(EventValue::Refs(refs)) = value else { continue };
            for reference in refs {
                if is_identifier(reference) && !prompt_ids.contains(reference.as_str()) {
                    return Err(ConfigError {
                        path: path.clone(),
                        line,
                        message: format!(
                            "check {:?} on.{event} references unknown prompt {reference:?}",
                            check.id
                        ),
                    });
                }
            }
        }
    }

    detect_cycle(loaded)
}

#[derive(Clone, Copy, PartialEq)]
enum Color {
    White,
    Grey,
    Black,
}

/// DFS colouring over the `requires` graph. On a cycle, the diagnostic
/// surfaces the full offending path (`a -> b -> c -> a`).
fn detect_cycle(loaded: &LoadedConfig) -> Result<(), ConfigError> {
    let config = &loaded.config;
    let index_of: HashMap<&str, usize> = config
        .checks
        .iter()
        .enumerate()
        .map(|(i, c)| (c.id.as_str(), i))
        .collect();

    let mut colors = vec![Color::White; config.checks.len()];
    let mut stack: Vec<usize> = Vec::new();

    fn visit(
        node: usize,
        loaded: &LoadedConfig,
        index_of: &HashMap<&str, usize>,
        colors: &mut [Color],
        stack: &mut Vec<usize>,
    ) -> Result<(), ConfigError> {
        colors[node] = Color::Grey;
        stack.push(node);

        for dep in &loaded.config.checks[node].requires {
            let next = index_of[dep.as_str()];
            match colors[next] {
                Color::Black => {}
                Color::White => visit(next, loaded, index_of, colors, stack)?,
                Color::Grey => {
                    let start = stack
                        .iter()
                        .position(|&n| n == next)
                        .unwrap_or(0);
                    let mut names: Vec<&str> = stack[start..]
                        .iter()
                        .map(|&n| loaded.config.checks[n].id.as_str())
                        .collect();
                    names.push(loaded.config.checks[next].id.as_str());
                    return Err(ConfigError {
                        path: loaded.path.clone(),
                        line: loaded.lines.check_line(next),
                        message: format!("dependency cycle: {}", names.join(" -> ")),
                    });
                }
            }
        }

        stack.pop();
        colors[node] = Color::Black;
        Ok(())
    }

    for node in 0..config.checks.len() {
        if colors[node] == Color::White {
            visit(node, loaded, &index_of, &mut colors, &mut stack)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse;
    use std::path::Path;

    fn loaded(raw: &str) -> LoadedConfig {
        parse(raw, Path::new("vibeguard.yaml")).expect("fixture should parse")
    }

    fn check_err(raw: &str) -> ConfigError {
        validate(&loaded(raw)).expect_err("fixture should fail validation")
    }

    #[test]
    fn accepts_minimal_valid_config() {
        let cfg = loaded("version: \"1\"\nchecks:\n  - id: vet\n    run: \"true\"\n");
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn rejects_wrong_version() {
        let err = check_err("version: \"2\"\nchecks:\n  - id: a\n    run: x\n");
        assert!(err.message.contains("unsupported version"));
    }

    #[test]
    fn rejects_empty_checks() {
        let err = check_err("version: \"1\"\n");
        assert_eq!(err.message, "no checks defined");
    }

    #[test]
    fn rejects_malformed_id_with_line() {
        let err = check_err("checks:\n  - id: \"9lives\"\n    run: x\n");
        assert!(err.message.contains("invalid check id"));
        assert_eq!(err.line, Some(2));
    }

    #[test]
    fn rejects_duplicate_check_ids() {
        let err = check_err(
            "checks:\n  - id: a\n    run: x\n  - id: a\n    run: y\n",
        );
        assert!(err.message.contains("duplicate check id"));
        assert_eq!(err.line, Some(4));
    }

    #[test]
    fn rejects_empty_run() {
        let err = check_err("checks:\n  - id: a\n    run: \"  \"\n");
        assert!(err.message.contains("empty run command"));
    }

    #[test]
    fn rejects_self_requirement() {
        let err = check_err("checks:\n  - id: a\n    run: x\n    requires: [a]\n");
        assert!(err.message.contains("requires itself"));
    }

    #[test]
    fn rejects_unknown_requirement() {
        let err = check_err("checks:\n  - id: a\n    run: x\n    requires: [ghost]\n");
        assert!(err.message.contains("unknown check \"ghost\""));
    }

    #[test]
    fn rejects_malformed_tag() {
        let err = check_err("checks:\n  - id: a\n    run: x\n    tags: [Bad-Tag]\n");
        assert!(err.message.contains("invalid tag"));
    }

    #[test]
    fn rejects_prompt_without_content() {
        let err = check_err(
            "prompts:\n  - id: init\n    content: \"\"\nchecks:\n  - id: a\n    run: x\n",
        );
        assert!(err.message.contains("empty content"));
        assert_eq!(err.line, Some(2));
    }

    #[test]
    fn rejects_duplicate_prompt_ids() {
        let err = check_err(
            "prompts:\n  - id: p\n    content: x\n  - id: p\n    content: y\nchecks:\n  - id: a\n    run: x\n",
        );
        assert!(err.message.contains("duplicate prompt id"));
    }

    #[test]
    fn rejects_unknown_prompt_reference() {
        let err = check_err(
            "checks:\n  - id: a\n    run: x\n    on:\n      failure: [ghost]\n",
        );
        assert!(err.message.contains("unknown prompt \"ghost\""));
    }

    #[test]
    fn inline_array_entries_are_not_validated_as_ids() {
        let cfg = loaded(
            "prompts:\n  - id: init\n    content: hi\nchecks:\n  - id: a\n    run: x\n    on:\n      failure: [init, \"re-run the formatter\"]\n",
        );
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn bare_string_handlers_are_inline_content() {
        let cfg = loaded(
            "checks:\n  - id: a\n    run: x\n    on:\n      failure: \"anything goes here\"\n",
        );
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn reports_full_cycle_path() {
        let err = check_err(
            r#"checks:
  - id: a
    run: x
    requires: [b]
  - id: b
    run: x
    requires: [c]
  - id: c
    run: x
    requires: [a]
"#,
        );
        assert!(
            err.message.contains("a -> b -> c -> a"),
            "unexpected message: {}",
            err.message
        );
    }

    #[test]
    fn two_node_cycle_is_reported() {
        let err = check_err(
            "checks:\n  - id: a\n    run: x\n    requires: [b]\n  - id: b\n    run: x\n    requires: [a]\n",
        );
        assert!(err.message.contains("a -> b -> a"));
    }

    #[test]
    fn diamond_dependencies_are_fine() {
        let cfg = loaded(
            r#"checks:
  - id: base
    run: x
  - id: left
    run: x
    requires: [base]
  - id: right
    run: x
    requires: [base]
  - id: top
    run: x
    requires: [left, right]
"#,
        );
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn identifier_and_tag_patterns() {
        assert!(is_identifier("_lead"));
        assert!(is_identifier("go-vet_2"));
        assert!(!is_identifier("9lives"));
        assert!(!is_identifier("has space"));
        assert!(is_tag("go-vet"));
        assert!(!is_tag("Caps"));
        assert!(!is_tag("-lead"));
    }
}
