//! CLI configuration via environment variables
//!
//! Minunit has no configuration files. The few knobs it has only affect
//! presentation and logging, never what runs or what is counted.

use std::env;

/// Log filter used when `MINUNIT_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Disable colored output (MINUNIT_NO_COLOR=1 or NO_COLOR=1)
    pub no_color: bool,
    /// `tracing` filter directive (MINUNIT_LOG=debug)
    pub log_filter: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            no_color: env::var("MINUNIT_NO_COLOR").is_ok() || env::var("NO_COLOR").is_ok(),
            log_filter: env::var("MINUNIT_LOG").ok().filter(|v| !v.trim().is_empty()),
        }
    }

    /// Filter directive for the log subscriber.
    ///
    /// Returns:
    /// 1. `debug` when `verbose` is requested
    /// 2. MINUNIT_LOG if set
    /// 3. [`DEFAULT_LOG_FILTER`] otherwise
    pub fn log_filter(&self, verbose: bool) -> &str {
        if verbose {
            return "debug";
        }
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
