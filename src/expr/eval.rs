//! Evaluator for parsed assertion expressions.
//!
//! The environment maps names to strings (config vars and grok captures
//! are both strings on the wire). Coercion happens per operation: a string
//! that parses as a number becomes numeric, the literals `"true"` and
//! `"false"` become booleans, and everything else stays a string.

use std::collections::BTreeMap;

use super::parser::{self, BinaryOp, Expr, ParseError, UnaryOp};

/// A runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Num(f64),
    Bool(bool),
    Str(String),
}

impl Value {
    /// Coerce a raw environment string.
    #[must_use]
    pub fn coerce(raw: &str) -> Value {
        if let Ok(n) = raw.trim().parse::<f64>() {
            return Value::Num(n);
        }
        match raw {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::Str(raw.to_string()),
        }
    }

    /// Lexical form used in diagnostics and string comparisons.
    #[must_use]
    pub fn lexical(&self) -> String {
        match self {
            Value::Num(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            Value::Bool(b) => b.to_string(),
            Value::Str(s) => s.clone(),
        }
    }
}

/// Evaluation failure. `Parse` wraps syntax problems so callers have one
/// error type for the whole assert pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    Parse(ParseError),
    Undefined { name: String },
    NumericOperands { op: &'static str, lhs: String, rhs: String },
    NumericComparison { op: &'static str, lhs: String, rhs: String },
    BooleanOperand { op: &'static str, value: String },
    DivisionByZero,
    NotBoolean { value: String },
}

impl std::error::Error for EvalError {}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Undefined { name } => write!(f, "undefined variable {name:?}"),
            Self::NumericOperands { op, lhs, rhs } => write!(
                f,
                "operator '{op}' requires numeric operands, got {lhs:?} and {rhs:?}"
            ),
            Self::NumericComparison { op, lhs, rhs } => write!(
                f,
                "cannot compare {lhs:?} {op} {rhs:?}: both sides must be numeric"
            ),
            Self::BooleanOperand { op, value } => {
                write!(f, "operator '{op}' requires a boolean operand, got {value:?}")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::NotBoolean { value } => write!(
                f,
                "assertion must evaluate to a boolean, got {value:?}"
            ),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

/// Parse and evaluate `source`, requiring a boolean result.
pub fn evaluate(source: &str, env: &BTreeMap<String, String>) -> Result<bool, EvalError> {
    let expr = parser::parse(source)?;
    match eval(&expr, env)? {
        Value::Bool(b) => Ok(b),
        other => Err(EvalError::NotBoolean {
            value: other.lexical(),
        }),
    }
}

fn eval(expr: &Expr, env: &BTreeMap<String, String>) -> Result<Value, EvalError> {
    match expr {
        Expr::Number(n) => Ok(Value::Num(*n)),
        Expr::Str(s) => Ok(Value::Str(s.clone())),
        Expr::Bool(b) => Ok(Value::Bool(*b)),
        Expr::Ident(name) => env
            .get(name)
            .map(|raw| Value::coerce(raw))
            .ok_or_else(|| EvalError::Undefined { name: name.clone() }),
        Expr::Unary { op, operand } => eval_unary(*op, operand, env),
        Expr::Binary { op, lhs, rhs } => eval_binary(*op, lhs, rhs, env),
    }
}

fn eval_unary(op: UnaryOp, operand: &Expr, env: &BTreeMap<String, String>) -> Result<Value, EvalError> {
    let value = eval(operand, env)?;
    match op {
        UnaryOp::Not => match value {
            Value::Bool(b) => Ok(Value::Bool(!b)),
            other => Err(EvalError::BooleanOperand {
                op: "!",
                value: other.lexical(),
            }),
        },
        UnaryOp::Neg => match value {
            Value::Num(n) => Ok(Value::Num(-n)),
            other => Err(EvalError::NumericOperands {
                op: "-",
                lhs: other.lexical(),
                rhs: String::new(),
            }),
        },
    }
}

fn eval_binary(
    op: BinaryOp,
    lhs: &Expr,
    rhs: &Expr,
    env: &BTreeMap<String, String>,
) -> Result<Value, EvalError> {
    // Logical operators short-circuit; everything else evaluates both
    // sides first.
    match op {
        BinaryOp::And => {
            let left = require_bool(eval(lhs, env)?, "&&")?;
            if !left {
                return Ok(Value::Bool(false));
            }
            let right = require_bool(eval(rhs, env)?, "&&")?;
            return Ok(Value::Bool(right));
        }
        BinaryOp::Or => {
            let left = require_bool(eval(lhs, env)?, "||")?;
            if left {
                return Ok(Value::Bool(true));
            }
            let right = require_bool(eval(rhs, env)?, "||")?;
            return Ok(Value::Bool(right));
        }
        _ => {}
    }

    let left = eval(lhs, env)?;
    let right = eval(rhs, env)?;

    match op {
        BinaryOp::Eq => Ok(Value::Bool(values_equal(&left, &right))),
        BinaryOp::Ne => Ok(Value::Bool(!values_equal(&left, &right))),
        BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => {
            let (Value::Num(a), Value::Num(b)) = (&left, &right) else {
                return Err(EvalError::NumericComparison {
                    op: op.symbol(),
                    lhs: left.lexical(),
                    rhs: right.lexical(),
                });
            };
            let result = match op {
                BinaryOp::Lt => a < b,
                BinaryOp::Le => a <= b,
                BinaryOp::Gt => a > b,
                _ => a >= b,
            };
            Ok(Value::Bool(result))
        }
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
            let (Value::Num(a), Value::Num(b)) = (&left, &right) else {
                return Err(EvalError::NumericOperands {
                    op: op.symbol(),
                    lhs: left.lexical(),
                    rhs: right.lexical(),
                });
            };
            match op {
                BinaryOp::Add => Ok(Value::Num(a + b)),
                BinaryOp::Sub => Ok(Value::Num(a - b)),
                BinaryOp::Mul => Ok(Value::Num(a * b)),
                _ => {
                    if *b == 0.0 {
                        Err(EvalError::DivisionByZero)
                    } else {
                        Ok(Value::Num(a / b))
                    }
                }
            }
        }
        BinaryOp::And | BinaryOp::Or => unreachable!("handled above"),
    }
}

fn require_bool(value: Value, op: &'static str) -> Result<bool, EvalError> {
    match value {
        Value::Bool(b) => Ok(b),
        other => Err(EvalError::BooleanOperand {
            op,
            value: other.lexical(),
        }),
    }
}

/// Equality across coerced types: numeric when both sides are numeric,
/// boolean when both are boolean, lexical (case-sensitive) otherwise.
fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Num(a), Value::Num(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        _ => left.lexical() == right.lexical(),
    }
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
    fn numeric_strings_coerce_for_comparison() {
        let e = env(&[("coverage", "72")]);
        assert_eq!(evaluate("coverage >= 80", &e), Ok(false));
        assert_eq!(evaluate("coverage >= 70", &e), Ok(true));
    }

    #[test]
    fn equality_across_string_and_number() {
        let e = env(&[("count", "3")]);
        assert_eq!(evaluate("count == 3", &e), Ok(true));
        assert_eq!(evaluate("count == \"3\"", &e), Ok(true));
        assert_eq!(evaluate("count != 4", &e), Ok(true));
    }

    #[test]
    fn boolean_literal_strings_coerce() {
        let e = env(&[("ok", "true")]);
        assert_eq!(evaluate("ok", &e), Ok(true));
        assert_eq!(evaluate("!ok", &e), Ok(false));
        assert_eq!(evaluate("ok == true", &e), Ok(true));
    }

    #[test]
    fn undefined_variable_fails() {
        let e = env(&[]);
        assert_eq!(
            evaluate("missing == 1", &e),
            Err(EvalError::Undefined {
                name: "missing".to_string()
            })
        );
        assert_eq!(
            evaluate("missing == 1", &e).unwrap_err().to_string(),
            "undefined variable \"missing\""
        );
    }

    #[test]
    fn arithmetic_requires_numbers_and_quotes_operands() {
        let e = env(&[("name", "linter")]);
        let err = evaluate("name + 1 == 2", &e).unwrap_err();
        assert_eq!(
            err.to_string(),
            "operator '+' requires numeric operands, got \"linter\" and \"1\""
        );
    }

    #[test]
    fn ordering_requires_numbers() {
        let e = env(&[("name", "linter")]);
        assert!(matches!(
            evaluate("name < 3", &e),
            Err(EvalError::NumericComparison { .. })
        ));
    }

    #[test]
    fn logical_operators_short_circuit() {
        // The undefined right side is never evaluated.
        let e = env(&[("found", "false")]);
        assert_eq!(evaluate("found && missing == 1", &e), Ok(false));
        let e = env(&[("found", "true")]);
        assert_eq!(evaluate("found || missing == 1", &e), Ok(true));
    }

    #[test]
    fn logical_operators_require_booleans() {
        let e = env(&[("n", "3")]);
        assert!(matches!(
            evaluate("n && true", &e),
            Err(EvalError::BooleanOperand { .. })
        ));
    }

    #[test]
    fn not_requires_boolean() {
        let e = env(&[("n", "3")]);
        let err = evaluate("!n", &e).unwrap_err();
        assert!(matches!(err, EvalError::BooleanOperand { .. }));
    }

    #[test]
    fn top_level_must_be_boolean() {
        let e = env(&[("n", "3")]);
        assert_eq!(
            evaluate("n + 1", &e),
            Err(EvalError::NotBoolean {
                value: "4".to_string()
            })
        );
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let e = env(&[]);
        assert_eq!(evaluate("1 / 0 == 1", &e), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn float_arithmetic_works() {
        let e = env(&[("ratio", "0.5")]);
        assert_eq!(evaluate("ratio * 2 == 1", &e), Ok(true));
    }

    #[test]
    fn string_inequality_is_case_sensitive() {
        let e = env(&[("branch", "main")]);
        assert_eq!(evaluate("branch == \"main\"", &e), Ok(true));
        assert_eq!(evaluate("branch == \"Main\"", &e), Ok(false));
    }

    #[test]
    fn parse_errors_pass_through() {
        let e = env(&[]);
        assert!(matches!(evaluate("1 ==", &e), Err(EvalError::Parse(_))));
    }
}
