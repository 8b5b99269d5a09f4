//! Tracing subscriber setup
//!
//! The TUI owns the terminal, so console output is only enabled for the
//! plain-text commands. A log file can always be requested.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// File filter used when `RUST_LOG` is not set
pub const DEFAULT_FILE_FILTER: &str = "info";

/// Console filter used when `RUST_LOG` is not set; keeps game output readable
pub const DEFAULT_CONSOLE_FILTER: &str = "warn";

/// Install the global subscriber
///
/// Returns the file writer guard; keep it alive until exit so buffered
/// lines are flushed.
///
/// # Errors
///
/// Returns an error if `log_file` has no file name or a global subscriber is
/// already installed.
pub fn init(log_file: Option<&Path>, console: bool) -> Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .with_context(|| format!("log path {} has no file name", path.display()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(env_filter(DEFAULT_FILE_FILTER));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = console.then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_filter(env_filter(DEFAULT_CONSOLE_FILTER))
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_filter_parses() {
        assert!(DEFAULT_FILE_FILTER.parse::<EnvFilter>().is_ok());
        assert!(DEFAULT_CONSOLE_FILTER.parse::<EnvFilter>().is_ok());
    }
}
