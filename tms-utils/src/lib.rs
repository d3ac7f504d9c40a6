//! tms-utils: Common utilities shared across tms crates
//!
//! This crate provides:
//! - Unified error types ([`TmsError`], [`RepoUrlError`], [`Result`])
//! - Logging infrastructure ([`init_logging_with_config`], [`LogConfig`])
//! - XDG-compliant path utilities ([`paths`] module)

pub mod error;
pub mod logging;
pub mod paths;

// Re-export main types at crate root for convenience
pub use error::{RepoUrlError, Result, TmsError};
pub use logging::{init_logging_with_config, LogConfig};

pub use paths::{config_dir, config_file, expand_tilde, home_dir};
