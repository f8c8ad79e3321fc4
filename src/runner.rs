//! Shell subprocess execution with deadline and cooperative cancellation.
//!
//! Each check's `run` string is handed to `sh -c` in the invocation
//! working directory with the parent environment inherited unmodified.
//! Stdout and stderr are piped and interleaved into a single combined
//! buffer in arrival order; grok extraction and assertion evaluation both
//! read that buffer.
//!
//! The subprocess lives under two watchdogs: the per-check deadline and
//! the orchestrator's cancellation token (fail-fast). Either firing kills
//! the process group and marks the outcome `timed_out` or `cancelled`
//! respectively. Classifying pass/fail is the orchestrator's job.

use std::process::Stdio;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::io::AsyncReadExt;
use tokio::process::{Child, Command};
use tokio_util::sync::CancellationToken;

use crate::error::RunnerError;

/// Outcome of one subprocess execution.
#[derive(Debug, Clone)]
pub struct ExecOutcome {
    /// Exit status; `None` when the process was killed by a signal
    /// (including our own timeout/cancel kill).
    pub exit_status: Option<i32>,
    /// Combined stdout+stderr, lossily decoded.
    pub output: String,
    pub duration: Duration,
    pub timed_out: bool,
    pub cancelled: bool,
}

impl ExecOutcome {
    /// True when the process ran to completion with status zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_status == Some(0) && !self.timed_out && !self.cancelled
    }
}

/// Run `command` through the shell with a deadline and a cancellation
/// token.
///
/// # Errors
///
/// Only spawn/wait failures surface as [`RunnerError`]; a non-zero exit
/// status is an ordinary outcome.
pub async fn run_shell(
    command: &str,
    timeout: Duration,
    cancel: &CancellationToken,
) -> Result<ExecOutcome, RunnerError> {
    let start = Instant::now();

    let mut cmd = Command::new("sh");
    cmd.arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    #[cfg(unix)]
    cmd.process_group(0);

    let mut child = cmd.spawn().map_err(|e| RunnerError::SpawnFailed {
        command: command.to_string(),
        source: e,
    })?;

    // Both streams append to one buffer so the combined output preserves
    // arrival order across stdout and stderr.
    let sink: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
    let stdout_task = child
        .stdout
        .take()
        .map(|stream| tokio::spawn(drain(stream, Arc::clone(&sink))));
    let stderr_task = child
        .stderr
        .take()
        .map(|stream| tokio::spawn(drain(stream, Arc::clone(&sink))));

    let deadline = tokio::time::sleep(timeout);
    tokio::pin!(deadline);

    let (exit_status, timed_out, cancelled) = tokio::select! {
        status = child.wait() => {
            let status = status.map_err(|e| RunnerError::WaitFailed {
                command: command.to_string(),
                source: e,
            })?;
            (status.code(), false, false)
        }
        () = &mut deadline => {
            kill(&mut child).await;
            (None, true, false)
        }
        () = cancel.cancelled() => {
            kill(&mut child).await;
            (None, false, true)
        }
    };

    if let Some(task) = stdout_task {
        let _ = task.await;
    }
    if let Some(task) = stderr_task {
        let _ = task.await;
    }

    let output = {
        let buffer = sink.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    };

    Ok(ExecOutcome {
        exit_status,
        output,
        duration: start.elapsed(),
        timed_out,
        cancelled,
    })
}

/// Terminate the child's whole process group, then reap it.
async fn kill(child: &mut Child) {
    #[cfg(unix)]
    if let Some(pid) = child.id() {
        // The child leads its own process group; a negative pid signals
        // every process in it, so `sh -c` descendants die too.
        unsafe {
            libc::kill(-(pid as i32), libc::SIGKILL);
        }
    }
    let _ = child.start_kill();
    let _ = child.wait().await;
}

async fn drain(mut stream: impl tokio::io::AsyncRead + Unpin, sink: Arc<Mutex<Vec<u8>>>) {
    let mut chunk = [0u8; 8192];
    loop {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                let mut buffer = sink
                    .lock()
                    .unwrap_or_else(std::sync::PoisonError::into_inner);
                buffer.extend_from_slice(&chunk[..n]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> CancellationToken {
        CancellationToken::new()
    }

    #[tokio::test]
    async fn zero_exit_status_is_success() {
        let outcome = run_shell("true", Duration::from_secs(5), &token())
            .await
            .unwrap();
        assert_eq!(outcome.exit_status, Some(0));
        assert!(outcome.success());
        assert!(!outcome.timed_out);
        assert!(!outcome.cancelled);
    }

    #[tokio::test]
    async fn nonzero_exit_status_is_reported() {
        let outcome = run_shell("exit 7", Duration::from_secs(5), &token())
            .await
            .unwrap();
        assert_eq!(outcome.exit_status, Some(7));
        assert!(!outcome.success());
    }

    #[tokio::test]
    async fn captures_stdout_and_stderr_combined() {
        let outcome = run_shell(
            "printf 'out'; printf 'err' >&2",
            Duration::from_secs(5),
            &token(),
        )
        .await
        .unwrap();
        assert!(outcome.output.contains("out"));
        assert!(outcome.output.contains("err"));
    }

    #[tokio::test]
    async fn deadline_marks_timed_out() {
        let start = Instant::now();
        let outcome = run_shell("sleep 5", Duration::from_millis(200), &token())
            .await
            .unwrap();
        assert!(outcome.timed_out);
        assert!(!outcome.cancelled);
        assert!(outcome.exit_status.is_none());
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[tokio::test]
    async fn cancellation_marks_cancelled() {
        let cancel = token();
        let child_token = cancel.clone();
        let handle = tokio::spawn(async move {
            run_shell("sleep 5", Duration::from_secs(30), &child_token).await
        });
        tokio::time::sleep(Duration::from_millis(100)).await;
        cancel.cancel();
        let outcome = handle.await.unwrap().unwrap();
        assert!(outcome.cancelled);
        assert!(!outcome.timed_out);
    }

    #[tokio::test]
    async fn already_cancelled_token_short_circuits() {
        let cancel = token();
        cancel.cancel();
        let outcome = run_shell("sleep 5", Duration::from_secs(30), &cancel)
            .await
            .unwrap();
        assert!(outcome.cancelled);
    }

    #[tokio::test]
    async fn partial_output_survives_timeout() {
        let outcome = run_shell(
            "printf 'early'; sleep 5",
            Duration::from_millis(300),
            &token(),
        )
        .await
        .unwrap();
        assert!(outcome.timed_out);
        assert!(outcome.output.contains("early"));
    }

    #[tokio::test]
    async fn shell_features_are_available() {
        let outcome = run_shell(
            "echo one && echo two | tr 'a-z' 'A-Z'",
            Duration::from_secs(5),
            &token(),
        )
        .await
        .unwrap();
        assert!(outcome.output.contains("one"));
        assert!(outcome.output.contains("TWO"));
    }
}
