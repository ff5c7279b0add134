//! Tracing subscriber setup for the `routekit` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the application. [`init_logging`] is what the bundled CLI uses.

use crate::runtime_config::{LogFormat, RuntimeConfig};
use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install a global subscriber writing to stderr.
///
/// `RUST_LOG` takes priority over the configured level. Fails when a global
/// subscriber is already installed.
///
/// ```no_run
/// use routekit::logging::init_logging;
/// use routekit::runtime_config::RuntimeConfig;
///
/// init_logging(&RuntimeConfig::from_env()).expect("Failed to initialize logging");
/// ```
pub fn init_logging(config: &RuntimeConfig) -> Result<()> {
    let level = parse_level(&config.log_level);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(true)
            .with_thread_ids(false)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
