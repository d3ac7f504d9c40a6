//! Path utilities for tms
//!
//! Handles XDG Base Directory lookup for the configuration file and
//! tilde expansion for user-supplied paths.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

/// Application identifier for XDG directories
const APP_NAME: &str = "tmux-sessionizer";

/// Get the user's home directory
///
/// Falls back to `$HOME`, then `/tmp`, when the platform lookup fails.
pub fn home_dir() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.home_dir().to_path_buf())
        .or_else(|| std::env::var_os("HOME").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("/tmp"))
}

/// Get the configuration directory
///
/// Location: `$XDG_CONFIG_HOME/tmux-sessionizer` or `~/.config/tmux-sessionizer`.
/// The XDG layout is used on every platform, including macOS.
pub fn config_dir() -> PathBuf {
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_NAME),
        _ => home_dir().join(".config").join(APP_NAME),
    }
}

/// Get the main configuration file path
///
/// Location: `$XDG_CONFIG_HOME/tmux-sessionizer/config.yaml`
pub fn config_file() -> PathBuf {
    config_dir().join("config.yaml")
}

/// Expand a leading `~` against `home`
///
/// Only the bare `~` and `~/...` forms are expanded; `~user` is left alone.
pub fn expand_tilde(path: &str, home: &Path) -> PathBuf {
    if path == "~" {
        home.to_path_buf()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
