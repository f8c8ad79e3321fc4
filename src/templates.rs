//! Built-in starter templates and prompts.
//!
//! `vibeguard init` writes one of these static configuration fragments;
//! `vibeguard prompt init` falls back to [`BUILTIN_INIT_PROMPT`] when the
//! config does not define its own `init` prompt.

/// Names of the built-in starter templates, in listing order.
pub const TEMPLATE_NAMES: [&str; 3] = ["default", "go", "rust"];

const TEMPLATE_DEFAULT: &str = r#"version: "1"

vars:
  MIN_COVERAGE: "80"

checks:
  - id: no-todo-markers
    run: "! grep -rn 'FIXME!' --include='*.*' ."
    severity: warning
    suggestion: "Resolve or file the marked issues before shipping."
    tags: [hygiene]

  - id: tests
    run: "echo 'replace with your test command'; exit 0"
    timeout: 10m
    tags: [tests]
"#;

const TEMPLATE_GO: &str = r#"version: "1"

vars:
  MIN_COVERAGE: "80"

checks:
  - id: vet
    run: go vet ./...
    suggestion: "Fix the reported vet issues."
    tags: [lint]

  - id: tests
    run: go test ./...
    requires: [vet]
    timeout: 10m
    tags: [tests]

  - id: coverage
    run: "go test -cover ./... | tail -1"
    grok: "coverage: %{NUMBER:coverage}%"
    assert: "coverage >= MIN_COVERAGE"
    suggestion: "Coverage is {{.coverage}}%, need {{.MIN_COVERAGE}}%."
    requires: [tests]
    tags: [tests]
"#;

const TEMPLATE_RUST: &str = r#"version: "1"

checks:
  - id: fmt
    run: cargo fmt --check
    suggestion: "Run `cargo fmt` and commit the result."
    tags: [lint]

  - id: clippy
    run: cargo clippy --all-targets -- -D warnings
    requires: [fmt]
    timeout: 5m
    tags: [lint]

  - id: tests
    run: cargo test
    requires: [clippy]
    timeout: 10m
    tags: [tests]
"#;

/// The built-in `init` prompt, available from `vibeguard prompt init`
/// even when no configuration file defines one. A user-defined `init`
/// prompt takes precedence.
pub const BUILTIN_INIT_PROMPT: &str = "\
You are setting up vibeguard for this repository.

1. Inspect the repository: language, build system, test runner, linters.
2. Write a vibeguard.yaml with one check per quality gate you find.
   Prefer small, fast checks with clear suggestions.
3. Use `requires:` so expensive checks only run after cheap ones pass.
4. Run `vibeguard validate`, then `vibeguard check`, and fix any issues.
";

/// The agent-setup prompt emitted by `vibeguard init --assist`. Printed
/// to stdout so it pipes cleanly into an agent CLI.
pub const ASSIST_PROMPT: &str = "\
Inspect this repository and produce a vibeguard.yaml policy file.

Requirements:
- version: \"1\" at the top.
- One check per quality gate (format, lint, build, test, coverage).
- Every check needs an actionable `suggestion:`.
- Chain checks with `requires:` from cheapest to most expensive.
- Use `grok:` + `assert:` to turn textual tool output into thresholds.
- Tag checks (`tags: [lint]`, `tags: [tests]`) so subsets can run alone.

Validate the result with `vibeguard validate` before finishing.
";

/// Look up a starter template by name.
#[must_use]
pub fn starter_template(name: &str) -> Option<&'static str> {
    match name {
        "default" => Some(TEMPLATE_DEFAULT),
        "go" => Some(TEMPLATE_GO),
        "rust" => Some(TEMPLATE_RUST),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse;
    use crate::validate::validate;
    use std::path::Path;

    #[test]
    fn every_template_is_a_valid_config() {
        for name in TEMPLATE_NAMES {
            let raw = starter_template(name).unwrap();
            let loaded = parse(raw, Path::new("vibeguard.yaml"))
                .unwrap_or_else(|e| panic!("template {name} should parse: {e}"));
            validate(&loaded).unwrap_or_else(|e| panic!("template {name} should validate: {e}"));
        }
    }

    #[test]
    fn unknown_template_is_none() {
        assert!(starter_template("python").is_none());
    }

    #[test]
    fn builtin_init_prompt_is_nonempty() {
        assert!(!BUILTIN_INIT_PROMPT.trim().is_empty());
        assert!(!ASSIST_PROMPT.trim().is_empty());
    }
}
