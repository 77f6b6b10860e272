//! Tracing subscriber setup.
//!
//! One-shot commands log to stderr. The dashboard owns the terminal, so it
//! only logs when a log file is given.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Off,
}

impl LogTarget {
    /// Pick the target for a command: an explicit file always wins, the
    /// dashboard otherwise stays silent.
    pub fn for_command(log_file: Option<PathBuf>, interactive: bool) -> Self {
        match log_file {
            Some(path) => LogTarget::File(path),
            None if interactive => LogTarget::Off,
            None => LogTarget::Stderr,
        }
    }
}

/// Install the global subscriber. `RUST_LOG` overrides `level` when set.
pub fn init(level: LogLevel, target: LogTarget) -> Result<()> {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()))
    };

    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
    }

    Ok(())
}
