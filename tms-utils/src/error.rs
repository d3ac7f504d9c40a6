//! Error types for tms
//!
//! Provides a unified error type used across all tms crates.

use std::path::PathBuf;

/// Failure to derive a repository name from a clone URL
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoUrlError {
    #[error("invalid SSH URL format: {0}")]
    InvalidSshFormat(String),

    #[error("malformed URL '{url}': {message}")]
    MalformedUrl { url: String, message: String },
}

/// Main error type for tms operations
#[derive(Debug, thiserror::Error)]
pub enum TmsError {
    // === IO Errors ===

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    // === Configuration Errors ===

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration at {path}: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    // === Precondition Errors ===

    #[error("{tool} is not installed. Please install it first")]
    PreconditionUnmet { tool: String },

    // === Input Errors ===

    #[error("{0} cannot be empty")]
    EmptyInput(String),

    #[error("failed to parse repository URL: {0}")]
    RepoUrl(#[from] RepoUrlError),

    // === Session Errors ===

    #[error("not inside a tmux session")]
    NotAttached,

    #[error("session '{0}' already exists")]
    AlreadyExists(String),

    #[error("tmux {operation} failed: {message}")]
    RegistryFailure { operation: String, message: String },

    // === Discovery Errors ===

    #[error("no directories or sessions found")]
    NoCandidates,

    // === External Tool Errors ===

    #[error("picker failed: {0}")]
    Picker(String),

    #[error("failed to clone repository: {0}")]
    CloneFailed(String),

    // === Internal Errors ===

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TmsError {
    /// Create a registry failure for the named tmux operation
    pub fn registry(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RegistryFailure {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an empty-input error naming the missing value
    pub fn empty(what: impl Into<String>) -> Self {
        Self::EmptyInput(what.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type alias using TmsError
pub type Result<T> = std::result::Result<T, TmsError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Display Tests ====================

    #[test]
    fn test_error_display_precondition() {
        let err = TmsError::PreconditionUnmet { tool: "fzf".into() };
        assert_eq!(err.to_string(), "fzf is not installed. Please install it first");
    }

    #[test]
    fn test_error_display_empty_input() {
        let err = TmsError::empty("session name");
        assert_eq!(err.to_string(), "session name cannot be empty");
    }

    #[test]
    fn test_error_display_not_attached() {
        assert_eq!(TmsError::NotAttached.to_string(), "not inside a tmux session");
    }

    #[test]
    fn test_error_display_already_exists() {
        let err = TmsError::AlreadyExists("work".into());
        assert_eq!(err.to_string(), "session 'work' already exists");
    }

    #[test]
    fn test_error_display_registry_failure() {
        let err = TmsError::registry("new-session", "duplicate session: work");
        assert_eq!(
            err.to_string(),
            "tmux new-session failed: duplicate session: work"
        );
    }

    #[test]
    fn test_error_display_no_candidates() {
        assert_eq!(
            TmsError::NoCandidates.to_string(),
            "no directories or sessions found"
        );
    }

    #[test]
    fn test_error_display_config_invalid() {
        let err = TmsError::ConfigInvalid {
            path: PathBuf::from("/home/user/.config/tmux-sessionizer/config.yaml"),
            message: "did not find expected key".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid configuration"));
        assert!(msg.contains("config.yaml"));
        assert!(msg.contains("did not find expected key"));
    }

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err = TmsError::FileRead {
            path: PathBuf::from("/etc/tms.yaml"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/etc/tms.yaml"));
    }

    // ==================== RepoUrlError Tests ====================

    #[test]
    fn test_repo_url_error_wraps_with_context() {
        let err: TmsError = RepoUrlError::InvalidSshFormat("git@bad-format".into()).into();
        assert!(matches!(
            err,
            TmsError::RepoUrl(RepoUrlError::InvalidSshFormat(_))
        ));
        assert_eq!(
            err.to_string(),
            "failed to parse repository URL: invalid SSH URL format: git@bad-format"
        );
    }

    #[test]
    fn test_repo_url_error_malformed_display() {
        let err = RepoUrlError::MalformedUrl {
            url: "http://[::1".into(),
            message: "invalid IPv6 address".into(),
        };
        assert_eq!(
            err.to_string(),
            "malformed URL 'http://[::1': invalid IPv6 address"
        );
    }

    // ==================== From Trait Tests ====================

    #[test]
    fn test_from_io_error_preserves_kind() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: TmsError = io_err.into();
        if let TmsError::Io(inner) = err {
            assert_eq!(inner.kind(), std::io::ErrorKind::NotFound);
        } else {
            panic!("Expected Io variant");
        }
    }

    // ==================== Helper Function Tests ====================

    #[test]
    fn test_config_helper() {
        let err = TmsError::config("Invalid log filter: bad");
        assert!(matches!(err, TmsError::Config(_)));
        assert_eq!(err.to_string(), "Configuration error: Invalid log filter: bad");
    }

    #[test]
    fn test_internal_helper() {
        let err = TmsError::internal("subscriber already set");
        assert!(matches!(err, TmsError::Internal(_)));
        assert_eq!(err.to_string(), "Internal error: subscriber already set");
    }
}
