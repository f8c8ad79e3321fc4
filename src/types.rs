//! Result and violation types produced by the orchestrator.
//!
//! These are write-once values: the orchestrator creates them, the
//! formatter and exit-code mapper read them.

use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Terminal status of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Passed,
    Failed,
    /// At least one required check had a terminal status other than
    /// `passed`; the check never executed.
    Skipped,
    /// Fail-fast terminated the in-flight subprocess. Neither pass nor
    /// fail; never surfaced as a violation.
    Cancelled,
}

impl CheckStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
            Self::Cancelled => "cancelled",
        }
    }
}

/// The outcome event used for prompt dispatch. Precedence at dispatch time
/// is timeout > failure > success; `skipped` and `cancelled` never fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Event {
    Success,
    Failure,
    Timeout,
}

impl Event {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Timeout => "timeout",
        }
    }
}

/// A prompt emitted by an event handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggeredPrompt {
    pub event: Event,
    /// A prompt id, or the literal `"inline"` for inline content.
    pub source: String,
    pub content: String,
}

/// Per-check outcome.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub id: String,
    pub status: CheckStatus,
    pub duration: Duration,
    /// Exit status of the subprocess; `None` when the process was killed
    /// by a signal or never ran (skipped / cancelled).
    pub exit_status: Option<i32>,
    /// Combined stdout+stderr of the subprocess.
    pub output: String,
    /// Named captures merged across all grok patterns.
    pub extracted: BTreeMap<String, String>,
    pub timed_out: bool,
    pub triggered_prompts: Vec<TriggeredPrompt>,
    /// Skip/error diagnostic shown in verbose mode.
    pub message: Option<String>,
}

impl CheckResult {
    /// A result for a check that never executed.
    #[must_use]
    pub fn unexecuted(id: impl Into<String>, status: CheckStatus, message: Option<String>) -> Self {
        Self {
            id: id.into(),
            status,
            duration: Duration::ZERO,
            exit_status: None,
            output: String::new(),
            extracted: BTreeMap::new(),
            timed_out: false,
            triggered_prompts: Vec::new(),
            message,
        }
    }
}

/// A failed or timed-out check, surfaced to the user with enough context
/// to re-run manually.
#[derive(Debug, Clone)]
pub struct Violation {
    pub check_id: String,
    pub severity: Severity,
    /// The exact interpolated command that ran.
    pub command: String,
    /// Rendered suggestion, when the check defines one.
    pub suggestion: Option<String>,
    pub extracted: BTreeMap<String, String>,
    pub timed_out: bool,
    pub triggered_prompts: Vec<TriggeredPrompt>,
}

/// Check severity. Warnings are visible but never set a non-zero exit
/// code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// Aggregate outcome of a run: ordered results (config order), violations
/// in the same order, and the fail-fast flag.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub results: Vec<CheckResult>,
    pub violations: Vec<Violation>,
    pub cancellation_triggered: bool,
}

impl RunReport {
    /// Final exit code: any timeout wins over any error-severity
    /// violation; warnings-only runs are success.
    #[must_use]
    pub fn exit_code(&self) -> crate::exit_codes::ExitCode {
        use crate::exit_codes::ExitCode;
        if self.results.iter().any(|r| r.timed_out) {
            ExitCode::TIMEOUT
        } else if self
            .violations
            .iter()
            .any(|v| v.severity == Severity::Error)
        {
            ExitCode::VIOLATION
        } else {
            ExitCode::SUCCESS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes::ExitCode;

    fn result(id: &str, status: CheckStatus, timed_out: bool) -> CheckResult {
        CheckResult {
            id: id.to_string(),
            status,
            duration: Duration::from_millis(5),
            exit_status: Some(0),
            output: String::new(),
            extracted: BTreeMap::new(),
            timed_out,
            triggered_prompts: Vec::new(),
            message: None,
        }
    }

    fn violation(id: &str, severity: Severity, timed_out: bool) -> Violation {
        Violation {
            check_id: id.to_string(),
            severity,
            command: "false".to_string(),
            suggestion: None,
            extracted: BTreeMap::new(),
            timed_out,
            triggered_prompts: Vec::new(),
        }
    }

    #[test]
    fn all_passed_is_success() {
        let report = RunReport {
            results: vec![result("a", CheckStatus::Passed, false)],
            violations: vec![],
            cancellation_triggered: false,
        };
        assert_eq!(report.exit_code(), ExitCode::SUCCESS);
    }

    #[test]
    fn warnings_only_is_success() {
        let report = RunReport {
            results: vec![result("a", CheckStatus::Failed, false)],
            violations: vec![violation("a", Severity::Warning, false)],
            cancellation_triggered: false,
        };
        assert_eq!(report.exit_code(), ExitCode::SUCCESS);
    }

    #[test]
    fn error_violation_is_2() {
        let report = RunReport {
            results: vec![result("a", CheckStatus::Failed, false)],
            violations: vec![violation("a", Severity::Error, false)],
            cancellation_triggered: false,
        };
        assert_eq!(report.exit_code(), ExitCode::VIOLATION);
    }

    #[test]
    fn timeout_wins_over_violation() {
        let report = RunReport {
            results: vec![
                result("slow", CheckStatus::Failed, true),
                result("bad", CheckStatus::Failed, false),
            ],
            violations: vec![
                violation("slow", Severity::Error, true),
                violation("bad", Severity::Error, false),
            ],
            cancellation_triggered: false,
        };
        assert_eq!(report.exit_code(), ExitCode::TIMEOUT);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&CheckStatus::Cancelled).unwrap(),
            r#""cancelled""#
        );
        assert_eq!(serde_json::to_string(&Event::Timeout).unwrap(), r#""timeout""#);
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            r#""warning""#
        );
    }
}
