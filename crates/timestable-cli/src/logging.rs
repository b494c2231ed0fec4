//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Interactive mode owns the terminal, so it only logs to a file (through a
//! non-blocking `tracing-appender` writer). Other commands log to stderr.
//!
//! Filter resolution:
//! 1. `TIMESTABLE_LOG` environment variable (full `EnvFilter` syntax)
//! 2. `-v` / `-vv` on the command line (debug / trace)
//! 3. `[logging] level` from the config file

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable that overrides every other level setting.
pub const LOG_ENV: &str = "TIMESTABLE_LOG";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// No subscriber installed.
    Disabled,
}

/// Returns the filter directive for a configured level and `-v` count.
pub fn filter_directive(configured: &str, verbosity: u8) -> String {
    match verbosity {
        0 => configured.trim().to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

fn build_filter(configured: &str, verbosity: u8) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    let directive = filter_directive(configured, verbosity);
    EnvFilter::try_new(&directive).with_context(|| format!("invalid log level '{directive}'"))
}

/// Installs the global subscriber.
///
/// The returned guard flushes buffered file output on drop; keep it alive
/// for the whole run.
///
/// # Errors
/// Returns an error if the level is invalid or the log file can't be opened.
pub fn init(target: &LogTarget, configured: &str, verbosity: u8) -> Result<Option<WorkerGuard>> {
    match target {
        LogTarget::Disabled => Ok(None),
        LogTarget::Stderr => {
            let filter = build_filter(configured, verbosity)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false)
                        .without_time(),
                )
                .try_init()
                .context("install stderr logger")?;
            Ok(None)
        }
        LogTarget::File(path) => {
            let filter = build_filter(configured, verbosity)?;
            let file = open_log_file(path)?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .try_init()
                .context("install file logger")?;
            Ok(Some(guard))
        }
    }
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_uses_config_without_flags() {
        assert_eq!(filter_directive(" warn ", 0), "warn");
        assert_eq!(filter_directive("timestable_tui=trace", 0), "timestable_tui=trace");
    }

    #[test]
    fn test_verbosity_overrides_config() {
        assert_eq!(filter_directive("warn", 1), "debug");
        assert_eq!(filter_directive("warn", 2), "trace");
        assert_eq!(filter_directive("warn", 5), "trace");
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("timestable.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
