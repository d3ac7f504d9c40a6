//! Session name normalization
//!
//! tmux reads `.` in a target as a window/pane separator, so labels derived
//! from directory basenames, repository names or user input have their dots
//! replaced and their edges trimmed before they are used as session names.

use std::path::Path;

use tms_utils::{Result, TmsError};

/// Characters stripped from both ends of a session name
const EDGE_SEPARATORS: [char; 3] = ['-', '_', '.'];

/// Normalize an arbitrary label into a session name
///
/// Strips whitespace and `-`, `_`, `.` from both ends until neither end
/// holds one, then replaces every remaining `.` with `_`. The result may be
/// empty; use [`session_name`] where an empty name is an error.
pub fn normalize(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || EDGE_SEPARATORS.contains(&c))
        .replace('.', "_")
}

/// Normalize `raw`, rejecting labels that normalize to nothing
pub fn session_name(raw: &str) -> Result<String> {
    let name = normalize(raw);
    if name.is_empty() {
        return Err(TmsError::empty("session name"));
    }
    Ok(name)
}

/// Derive a session name from the final segment of a directory path
pub fn session_name_for_dir(dir: &Path) -> Result<String> {
    let base = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    session_name(&base)
}
