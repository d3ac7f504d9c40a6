//! Logging infrastructure for tms
//!
//! Provides unified logging setup using the tracing ecosystem. Output always
//! goes to stderr: tmux and fzf own the terminal and stdout carries the
//! user-facing messages.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{Result, TmsError};

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "TMS_LOG";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level filter (e.g., "warn", "debug", "tms_core=debug")
    pub filter: String,
    /// Include file/line in logs
    pub file_line: bool,
    /// Include the module target in logs
    pub target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".into(),
            file_line: false,
            target: true,
        }
    }
}

impl LogConfig {
    /// Create config for the command-line tool
    pub fn cli() -> Self {
        Self {
            filter: std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| "warn".into()),
            file_line: false,
            target: false,
        }
    }

    /// Create config for development (verbose stderr)
    pub fn development() -> Self {
        Self {
            filter: "debug".into(),
            file_line: true,
            target: true,
        }
    }
}

/// Initialize logging with custom configuration
pub fn init_logging_with_config(config: LogConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| TmsError::config(format!("Invalid log filter: {}", e)))?;

    let fmt_layer = fmt::layer()
        .with_target(config.target)
        .with_file(config.file_line)
        .with_line_number(config.file_line)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TmsError::internal(format!("Failed to init logging: {}", e)))?;

    Ok(())
}
