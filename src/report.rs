//! Result rendering: quiet text, verbose text, and JSON.
//!
//! The two text modes share one contract: silence is success. Quiet mode
//! emits nothing on a clean run; verbose mode narrates every check. Both
//! write to stderr (the CLI decides where the strings go); JSON goes to
//! stdout with stable field names.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::types::{CheckResult, CheckStatus, RunReport, Severity, TriggeredPrompt, Violation};

/// Longest command echo in quiet mode before truncation.
const COMMAND_ECHO_LIMIT: usize = 120;

/// Quiet rendering: one block per violation, in configuration order.
/// Empty on the happy path.
#[must_use]
pub fn render_quiet(report: &RunReport) -> String {
    let mut out = String::new();
    for violation in &report.violations {
        render_violation(&mut out, violation);
    }
    out
}

fn render_violation(out: &mut String, violation: &Violation) {
    let label = match violation.severity {
        Severity::Error => "FAIL",
        Severity::Warning => "WARN",
    };
    let timeout_note = if violation.timed_out { " [timeout]" } else { "" };
    let _ = writeln!(
        out,
        "{label}  {} ({}){timeout_note}",
        violation.check_id,
        violation.severity.as_str()
    );
    let _ = writeln!(out, "  command: {}", truncate(&violation.command, COMMAND_ECHO_LIMIT));
    if let Some(suggestion) = &violation.suggestion {
        let _ = writeln!(out, "  Tip: {suggestion}");
    }
    render_prompts(out, &violation.triggered_prompts, "  ");
    let _ = writeln!(out);
}

/// Verbose rendering: a status line for every check, plus suggestion and
/// prompts for the failed ones.
#[must_use]
pub fn render_verbose(report: &RunReport) -> String {
    let mut out = String::new();
    let suggestions: BTreeMap<&str, &Violation> = report
        .violations
        .iter()
        .map(|v| (v.check_id.as_str(), v))
        .collect();

    for result in &report.results {
        let label = match result.status {
            CheckStatus::Passed => "PASS",
            CheckStatus::Failed => "FAIL",
            CheckStatus::Skipped => "SKIP",
            CheckStatus::Cancelled => "CANCEL",
        };
        let mut line = format!(
            "{label}  {} ({}ms)",
            result.id,
            result.duration.as_millis()
        );
        if result.timed_out {
            line.push_str(" [timeout]");
        }
        if let Some(message) = &result.message {
            let _ = write!(line, "  {message}");
        }
        let _ = writeln!(out, "{line}");

        if result.status == CheckStatus::Failed {
            if let Some(violation) = suggestions.get(result.id.as_str()) {
                if let Some(suggestion) = &violation.suggestion {
                    let _ = writeln!(out, "      {suggestion}");
                }
            }
        }
        render_prompts(&mut out, &result.triggered_prompts, "      ");
    }

    if report.cancellation_triggered {
        let _ = writeln!(out, "\nfail-fast: remaining checks were cancelled");
    }
    out
}

fn render_prompts(out: &mut String, prompts: &[TriggeredPrompt], indent: &str) {
    for (n, prompt) in prompts.iter().enumerate() {
        let _ = writeln!(
            out,
            "{indent}[{}] {} ({}):",
            n + 1,
            prompt.source,
            prompt.event.as_str()
        );
        for line in prompt.content.lines() {
            let _ = writeln!(out, "{indent}    {line}");
        }
    }
}

fn truncate(s: &str, limit: usize) -> String {
    if s.chars().count() <= limit {
        return s.to_string();
    }
    let head: String = s.chars().take(limit).collect();
    format!("{head}...")
}

/// JSON output document.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub checks: Vec<JsonCheck<'a>>,
    pub violations: Vec<JsonViolation<'a>>,
    pub cancellation_triggered: bool,
    pub exit_code: i32,
}

#[derive(Debug, Serialize)]
pub struct JsonCheck<'a> {
    pub id: &'a str,
    pub status: CheckStatus,
    pub duration_ms: u128,
}

#[derive(Debug, Serialize)]
pub struct JsonViolation<'a> {
    pub id: &'a str,
    pub severity: Severity,
    pub command: &'a str,
    pub suggestion: &'a str,
    pub extracted: &'a BTreeMap<String, String>,
    pub triggered_prompts: &'a [TriggeredPrompt],
    #[serde(skip_serializing_if = "is_false")]
    pub timedout: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(flag: &bool) -> bool {
    !*flag
}

impl<'a> JsonReport<'a> {
    #[must_use]
    pub fn new(report: &'a RunReport) -> Self {
        Self {
            checks: report
                .results
                .iter()
                .map(|r: &CheckResult| JsonCheck {
                    id: &r.id,
                    status: r.status,
                    duration_ms: r.duration.as_millis(),
                })
                .collect(),
            violations: report
                .violations
                .iter()
                .map(|v| JsonViolation {
                    id: &v.check_id,
                    severity: v.severity,
                    command: &v.command,
                    suggestion: v.suggestion.as_deref().unwrap_or(""),
                    extracted: &v.extracted,
                    triggered_prompts: &v.triggered_prompts,
                    timedout: v.timed_out,
                })
                .collect(),
            cancellation_triggered: report.cancellation_triggered,
            exit_code: report.exit_code().as_i32(),
        }
    }
}

/// Render the JSON document.
pub fn render_json(report: &RunReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport::new(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Event;
    use std::time::Duration;

    fn passed(id: &str) -> CheckResult {
        CheckResult {
            id: id.to_string(),
            status: CheckStatus::Passed,
            duration: Duration::from_millis(12),
            exit_status: Some(0),
            output: String::new(),
            extracted: BTreeMap::new(),
            timed_out: false,
            triggered_prompts: Vec::new(),
            message: None,
        }
    }

    fn failed(id: &str, timed_out: bool) -> (CheckResult, Violation) {
        let prompts = vec![TriggeredPrompt {
            event: if timed_out { Event::Timeout } else { Event::Failure },
            source: "init".to_string(),
            content: "Follow the setup guide".to_string(),
        }];
        let result = CheckResult {
            id: id.to_string(),
            status: CheckStatus::Failed,
            duration: Duration::from_millis(3),
            exit_status: if timed_out { None } else { Some(1) },
            output: String::new(),
            extracted: BTreeMap::new(),
            timed_out,
            triggered_prompts: prompts.clone(),
            message: None,
        };
        let violation = Violation {
            check_id: id.to_string(),
            severity: Severity::Error,
            command: "false".to_string(),
            suggestion: Some("Fix the linter".to_string()),
            extracted: BTreeMap::new(),
            timed_out,
            triggered_prompts: prompts,
        };
        (result, violation)
    }

    #[test]
    fn quiet_mode_is_silent_on_success() {
        let report = RunReport {
            results: vec![passed("vet")],
            violations: vec![],
            cancellation_triggered: false,
        };
        assert_eq!(render_quiet(&report), "");
    }

    #[test]
    fn quiet_mode_renders_fail_block() {
        let (result, violation) = failed("lint", false);
        let report = RunReport {
            results: vec![result],
            violations: vec![violation],
            cancellation_triggered: false,
        };
        let out = render_quiet(&report);
        assert!(out.starts_with("FAIL  lint (error)\n"), "{out}");
        assert!(out.contains("  command: false"));
        assert!(out.contains("  Tip: Fix the linter"));
        assert!(out.contains("[1] init (failure):"));
        assert!(out.contains("      Follow the setup guide"));
    }

    #[test]
    fn quiet_mode_marks_warnings_and_timeouts() {
        let (result, mut violation) = failed("slow", true);
        violation.severity = Severity::Warning;
        let report = RunReport {
            results: vec![result],
            violations: vec![violation],
            cancellation_triggered: false,
        };
        let out = render_quiet(&report);
        assert!(out.contains("WARN  slow (warning) [timeout]"), "{out}");
    }

    #[test]
    fn quiet_mode_truncates_long_commands() {
        let (result, mut violation) = failed("big", false);
        violation.command = "x".repeat(500);
        let report = RunReport {
            results: vec![result],
            violations: vec![violation],
            cancellation_triggered: false,
        };
        let out = render_quiet(&report);
        let command_line = out
            .lines()
            .find(|l| l.trim_start().starts_with("command:"))
            .unwrap();
        assert!(command_line.len() < 150);
        assert!(command_line.ends_with("..."));
    }

    #[test]
    fn verbose_mode_lists_every_status() {
        let (fail_result, violation) = failed("lint", false);
        let report = RunReport {
            results: vec![
                passed("vet"),
                fail_result,
                CheckResult::unexecuted("later", CheckStatus::Skipped, Some("dependency \"lint\" did not pass".to_string())),
                CheckResult::unexecuted("other", CheckStatus::Cancelled, None),
            ],
            violations: vec![violation],
            cancellation_triggered: true,
        };
        let out = render_verbose(&report);
        assert!(out.contains("PASS  vet (12ms)"));
        assert!(out.contains("FAIL  lint (3ms)"));
        // No Tip: prefix in verbose mode.
        assert!(out.contains("      Fix the linter"));
        assert!(!out.contains("Tip:"));
        assert!(out.contains("SKIP  later (0ms)  dependency \"lint\" did not pass"));
        assert!(out.contains("CANCEL  other (0ms)"));
        assert!(out.contains("fail-fast"));
    }

    #[test]
    fn json_shape_is_stable() {
        let (result, violation) = failed("lint", false);
        let report = RunReport {
            results: vec![passed("vet"), result],
            violations: vec![violation],
            cancellation_triggered: false,
        };
        let json = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["checks"][0]["id"], "vet");
        assert_eq!(value["checks"][0]["status"], "passed");
        assert!(value["checks"][0]["duration_ms"].is_number());
        assert_eq!(value["violations"][0]["id"], "lint");
        assert_eq!(value["violations"][0]["severity"], "error");
        assert_eq!(value["violations"][0]["command"], "false");
        assert_eq!(value["violations"][0]["suggestion"], "Fix the linter");
        assert_eq!(
            value["violations"][0]["triggered_prompts"][0]["event"],
            "failure"
        );
        assert_eq!(value["violations"][0].get("timedout"), None);
        assert_eq!(value["exit_code"], 2);
        assert_eq!(value["cancellation_triggered"], false);
    }

    #[test]
    fn json_timedout_flag_appears_when_true() {
        let (result, violation) = failed("slow", true);
        let report = RunReport {
            results: vec![result],
            violations: vec![violation],
            cancellation_triggered: false,
        };
        let value: serde_json::Value =
            serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(value["violations"][0]["timedout"], true);
        assert_eq!(value["exit_code"], 4);
    }

    #[test]
    fn skipped_and_cancelled_appear_in_json_checks_only() {
        let report = RunReport {
            results: vec![CheckResult::unexecuted("b", CheckStatus::Skipped, None)],
            violations: vec![],
            cancellation_triggered: false,
        };
        let value: serde_json::Value =
            serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(value["checks"][0]["status"], "skipped");
        assert_eq!(value["violations"].as_array().unwrap().len(), 0);
    }
}
