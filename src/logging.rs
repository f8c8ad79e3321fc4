//! Tracing initialisation.
//!
//! Log lines go to stderr in compact format so they never mix with the
//! report renderers' output contract. The default filter keeps the crate
//! at `info`; `--verbose` raises it to `debug`; `RUST_LOG` always wins.
//! With `--log-dir` a plain-text `vibeguard.log` in that directory also
//! receives every event.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialise the global tracing subscriber. Safe to call more than once;
/// later calls are no-ops.
pub fn init(verbose: bool, log_dir: Option<&Path>) -> std::io::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            if verbose {
                EnvFilter::try_new("vibeguard=debug,info")
            } else {
                EnvFilter::try_new("vibeguard=info,warn")
            }
        })
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact();

    let file_layer = match log_dir {
        None => None,
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join("vibeguard.log"))?;
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
    };

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        assert!(init(false, None).is_ok());
        assert!(init(true, None).is_ok());
    }

    #[test]
    fn init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");
        init(false, Some(&log_dir)).unwrap();
        assert!(log_dir.join("vibeguard.log").exists());
    }
}
