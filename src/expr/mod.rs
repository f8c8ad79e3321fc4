//! Assertion expression language.
//!
//! A small expression grammar evaluated against the merged environment of
//! config vars and extracted captures. The pipeline is lexer -> Pratt
//! parser -> tree-walking evaluator; the result of a top-level expression
//! must be boolean.
//!
//! Precedence, low to high: `||`, `&&`, `== !=`, `< <= > >=`, `+ -`,
//! `* /`, unary `! -`, primary.

pub mod eval;
pub mod lexer;
pub mod parser;

pub use eval::{evaluate, EvalError, Value};
pub use lexer::{LexError, Token};
pub use parser::{BinaryOp, Expr, ParseError, UnaryOp};

use std::collections::BTreeMap;

/// Parse and evaluate `source` against `env`, requiring a boolean result.
///
/// # Errors
///
/// Returns an [`EvalError`] for lexical, syntactic, or evaluation
/// problems; the error renders with the original expression and, for
/// parse errors, a caret marking the offending token.
pub fn evaluate_bool(source: &str, env: &BTreeMap<String, String>) -> Result<bool, EvalError> {
    evaluate(source, env)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn coverage_assertion_end_to_end() {
        let vars = env(&[("coverage", "72")]);
        assert_eq!(evaluate_bool("coverage >= 80", &vars), Ok(false));
        let vars = env(&[("coverage", "85.5")]);
        assert_eq!(evaluate_bool("coverage >= 80", &vars), Ok(true));
    }

    #[test]
    fn arithmetic_and_precedence() {
        let vars = env(&[("a", "2"), ("b", "3")]);
        assert_eq!(evaluate_bool("a + b * 2 == 8", &vars), Ok(true));
        assert_eq!(evaluate_bool("(a + b) * 2 == 10", &vars), Ok(true));
    }

    #[test]
    fn logical_operators_combine() {
        let vars = env(&[("warnings", "0"), ("errors", "0")]);
        assert_eq!(
            evaluate_bool("warnings == 0 && errors == 0", &vars),
            Ok(true)
        );
        assert_eq!(
            evaluate_bool("warnings > 0 || errors > 0", &vars),
            Ok(false)
        );
        assert_eq!(evaluate_bool("!(errors > 0)", &vars), Ok(true));
    }

    #[test]
    fn string_equality_is_case_sensitive() {
        let vars = env(&[("status", "ok")]);
        assert_eq!(evaluate_bool("status == \"ok\"", &vars), Ok(true));
        assert_eq!(evaluate_bool("status == \"OK\"", &vars), Ok(false));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn ordering_matches_rust_semantics(a in -10_000i64..10_000, b in -10_000i64..10_000) {
                let (sa, sb) = (a.to_string(), b.to_string());
                let vars = env(&[("a", sa.as_str()), ("b", sb.as_str())]);
                prop_assert_eq!(evaluate_bool("a < b", &vars), Ok(a < b));
                prop_assert_eq!(evaluate_bool("a <= b", &vars), Ok(a <= b));
                prop_assert_eq!(evaluate_bool("a == b", &vars), Ok(a == b));
            }

            #[test]
            fn integer_arithmetic_matches_rust(a in -1000i64..1000, b in -1000i64..1000) {
                let (sa, sb) = (a.to_string(), b.to_string());
                let vars = env(&[("a", sa.as_str()), ("b", sb.as_str())]);
                let expected = a + b * 2;
                let source = format!("a + b * 2 == {expected}");
                prop_assert_eq!(evaluate_bool(&source, &vars), Ok(true));
            }

            #[test]
            fn quoted_identifier_equality_round_trips(name in "x[a-z0-9_]{0,10}") {
                // The leading 'x' keeps the value out of numeric/boolean
                // coercion territory, so both sides stay strings.
                let vars = env(&[("word", name.as_str())]);
                let source = format!("word == \"{name}\"");
                prop_assert_eq!(evaluate_bool(&source, &vars), Ok(true));
            }
        }
    }
}
