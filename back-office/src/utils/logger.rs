//! Logging Infrastructure
//!
//! Structured logging setup for development and production:
//! - Pretty console output in development, JSON in production
//! - Optional daily rotating log file under `log_dir`
//! - `RUST_LOG` overrides the configured level

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize the logger (console only, `info` level)
pub fn init_logger() -> anyhow::Result<()> {
    init_logger_with_file("info", false, None)
}

/// Build the level filter: `RUST_LOG` when set, otherwise `level`
pub fn build_filter(level: &str) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level).with_context(|| format!("invalid log level: {level}")),
    }
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level or filter directive (e.g. "info", "back_office=debug")
/// * `json_format` - JSON lines instead of the pretty format (production)
/// * `log_dir` - Optional directory for the daily rotating `back-office` log
///
/// A second call leaves the first subscriber in place.
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = build_filter(level)?;

    let mut layers: Vec<BoxedLayer> = Vec::with_capacity(2);

    // Console layer
    if json_format {
        layers.push(
            fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_file(true)
                .with_line_number(true)
                .boxed(),
        );
    } else {
        layers.push(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .boxed(),
        );
    }

    // File layer
    if let Some(dir) = log_dir {
        let log_dir = Path::new(dir);
        fs::create_dir_all(log_dir)
            .with_context(|| format!("failed to create log dir {}", log_dir.display()))?;
        let file_appender = tracing_appender::rolling::daily(log_dir, "back-office");

        let file_layer = fmt::layer().with_ansi(false).with_writer(file_appender);
        if json_format {
            layers.push(file_layer.json().with_current_span(true).boxed());
        } else {
            layers.push(file_layer.with_target(true).boxed());
        }
    }

    if tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("Logger already installed");
    }
    Ok(())
}
