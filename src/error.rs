//! Error types for vibeguard.
//!
//! `VibeGuardError` is the primary error type returned by library
//! operations. Configuration problems short-circuit before any check runs
//! and map to exit code 3; per-check execution problems are localised to
//! the offending check's result and never abort the run.

use std::path::PathBuf;
use thiserror::Error;

use crate::exit_codes::ExitCode;

/// Library-level error type.
///
/// | Variant | Exit code |
/// |---------|-----------|
/// | `Config` | 3 |
/// | `Execution` | 1 (only reaches the CLI boundary on internal misuse; normally folded into a check result) |
/// | `Io` | 1 |
#[derive(Error, Debug)]
pub enum VibeGuardError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Execution(#[from] ExecutionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VibeGuardError {
    /// Map this error to the CLI exit code.
    #[must_use]
    pub fn to_exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Execution(_) | Self::Io(_) => ExitCode::INTERNAL,
        }
    }
}

/// A configuration diagnostic: file path, line number when known, and the
/// underlying cause. Everything the validator and loader reports goes
/// through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub path: PathBuf,
    pub line: Option<usize>,
    pub message: String,
}

impl ConfigError {
    /// Diagnostic without a line number (discovery failures, document-level
    /// problems).
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            line: None,
            message: message.into(),
        }
    }

    /// Diagnostic anchored to a source line.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            line: Some(line),
            message: message.into(),
        }
    }
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "config error: {}:{}: {}",
                self.path.display(),
                line,
                self.message
            ),
            None => write!(f, "config error: {}: {}", self.path.display(), self.message),
        }
    }
}

/// A per-check execution diagnostic: grok compile/match failures and
/// assertion parse/eval failures. Carries the check id and the config
/// location of the check so the user can jump straight to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionError {
    pub check_id: String,
    pub path: PathBuf,
    pub line: Option<usize>,
    pub message: String,
}

impl ExecutionError {
    #[must_use]
    pub fn new(
        check_id: impl Into<String>,
        path: impl Into<PathBuf>,
        line: Option<usize>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            check_id: check_id.into(),
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}

impl std::error::Error for ExecutionError {}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "check {:?} ({}:{}): {}",
                self.check_id,
                self.path.display(),
                line,
                self.message
            ),
            None => write!(
                f,
                "check {:?} ({}): {}",
                self.check_id,
                self.path.display(),
                self.message
            ),
        }
    }
}

/// Process-spawn level errors from the shell runner. A non-zero exit status
/// is not an error; this only covers failures to run the shell at all.
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("failed to spawn shell for command {command:?}: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to wait for command {command:?}: {source}")]
    WaitFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display_with_line() {
        let err = ConfigError::at("vibeguard.yaml", 12, "duplicate check id \"vet\"");
        assert_eq!(
            err.to_string(),
            "config error: vibeguard.yaml:12: duplicate check id \"vet\""
        );
    }

    #[test]
    fn config_error_display_without_line() {
        let err = ConfigError::new("vibeguard.yaml", "no checks defined");
        assert_eq!(
            err.to_string(),
            "config error: vibeguard.yaml: no checks defined"
        );
    }

    #[test]
    fn execution_error_display() {
        let err = ExecutionError::new("cov", "vibeguard.yaml", Some(7), "undefined variable \"x\"");
        assert_eq!(
            err.to_string(),
            "check \"cov\" (vibeguard.yaml:7): undefined variable \"x\""
        );
    }

    #[test]
    fn config_error_maps_to_exit_3() {
        let err = VibeGuardError::Config(ConfigError::new("x.yaml", "bad"));
        assert_eq!(err.to_exit_code(), ExitCode::CONFIG_ERROR);
    }

    #[test]
    fn io_error_maps_to_internal() {
        let err = VibeGuardError::Io(std::io::Error::other("boom"));
        assert_eq!(err.to_exit_code(), ExitCode::INTERNAL);
    }
}
