//! Template interpolation for `run` commands and suggestions.
//!
//! Templates use `{{.name}}` references resolved against the merged value
//! map; config vars always win over extracted captures. Rendering is
//! best-effort: any template or render error returns the original string
//! unchanged, so the interpolator can never fail a run.

use handlebars::Handlebars;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static DOT_REF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*\.([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("dot-reference regex")
});

/// Merge config vars over extracted captures. Vars win for duplicate
/// names.
#[must_use]
pub fn merge_env(
    vars: &BTreeMap<String, String>,
    extracted: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut env = extracted.clone();
    for (k, v) in vars {
        env.insert(k.clone(), v.clone());
    }
    env
}

/// Render a template against the merged environment.
///
/// `{{.name}}` references are normalised to `{{name}}` before the template
/// engine runs, so conditionals and the engine's built-in helpers remain
/// available. A template with no `{{` is returned as-is.
#[must_use]
pub fn render(template: &str, env: &BTreeMap<String, String>) -> String {
    if !template.contains("{{") {
        return template.to_string();
    }

    let normalized = DOT_REF_RE.replace_all(template, "{{$1}}");
    let mut engine = Handlebars::new();
    // Shell commands and suggestions are plain text, not HTML.
    engine.register_escape_fn(handlebars::no_escape);
    match engine.render_template(&normalized, env) {
        Ok(rendered) => rendered,
        Err(_) => template.to_string(),
    }
}

/// Render against vars and captures with var precedence.
#[must_use]
pub fn render_with(
    template: &str,
    vars: &BTreeMap<String, String>,
    extracted: &BTreeMap<String, String>,
) -> String {
    render(template, &merge_env(vars, extracted))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn plain_text_is_identity() {
        let env = map(&[("name", "world")]);
        assert_eq!(render("no templates here", &env), "no templates here");
    }

    #[test]
    fn renders_dot_references() {
        let env = map(&[("coverage", "72")]);
        assert_eq!(
            render("Coverage is {{.coverage}}%, need 80%.", &env),
            "Coverage is 72%, need 80%."
        );
    }

    #[test]
    fn vars_win_over_captures() {
        let vars = map(&[("threshold", "80")]);
        let extracted = map(&[("threshold", "50"), ("coverage", "72")]);
        assert_eq!(
            render_with("{{.coverage}}/{{.threshold}}", &vars, &extracted),
            "72/80"
        );
    }

    #[test]
    fn unknown_references_render_empty() {
        let env = map(&[]);
        assert_eq!(render("got [{{.missing}}]", &env), "got []");
    }

    #[test]
    fn malformed_template_returns_input_unchanged() {
        let env = map(&[("a", "1")]);
        assert_eq!(render("broken {{.a", &env), "broken {{.a");
        assert_eq!(render("broken {{#if}}", &env), "broken {{#if}}");
    }

    #[test]
    fn conditionals_pass_through_to_the_engine() {
        let env = map(&[("strict", "yes")]);
        assert_eq!(
            render("{{#if strict}}strict mode{{/if}}", &env),
            "strict mode"
        );
    }

    #[test]
    fn shell_metacharacters_survive_rendering() {
        let env = map(&[("cmd", "a && b | c > \"d\"")]);
        assert_eq!(render("{{.cmd}}", &env), "a && b | c > \"d\"");
    }

    #[test]
    fn repeated_application_is_stable() {
        let env = map(&[("x", "value")]);
        let once = render("{{.x}}", &env);
        assert_eq!(render(&once, &env), once);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn templates_without_braces_are_identity(text in "[^{]*") {
                let env = map(&[("x", "1")]);
                prop_assert_eq!(render(&text, &env), text);
            }

            #[test]
            fn rendering_is_idempotent_for_plain_values(value in "[a-zA-Z0-9 .,:/_-]*") {
                let env = map(&[("v", value.as_str())]);
                let once = render("{{.v}}", &env);
                prop_assert_eq!(render(&once, &env), once);
            }
        }
    }
}
