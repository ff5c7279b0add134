//! # Runtime Configuration Module
//!
//! Environment variable based settings for the `routekit` binary.
//!
//! ## Environment Variables
//!
//! ### `ROUTEKIT_LOG_LEVEL`
//!
//! Minimum level for log output: `trace`, `debug`, `info`, `warn` or
//! `error`. Overridden by `RUST_LOG` when that is set.
//!
//! Default: `info`
//!
//! ### `ROUTEKIT_LOG_FORMAT`
//!
//! `json` for one structured object per event, `pretty` for human-readable
//! multi-line output.
//!
//! Default: `pretty`
//!
//! ## Usage
//!
//! ```rust
//! use routekit::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("Log level: {}", config.log_level);
//! ```

use std::env;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Level directive used when `RUST_LOG` is unset (default: `info`)
    pub log_level: String,
    /// Output format (default: pretty)
    pub log_format: LogFormat,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup("ROUTEKIT_LOG_LEVEL")
                .map(|v| v.trim().to_lowercase())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.log_level),
            log_format: lookup("ROUTEKIT_LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or(defaults.log_format),
        }
    }
}
