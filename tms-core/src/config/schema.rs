//! Configuration schema structs

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tms_utils::expand_tilde;

/// Depth applied to search paths that do not set their own
pub const DEFAULT_MAX_DEPTH: usize = 1;

/// Root configuration as written in `config.yaml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub search_paths: Vec<SearchPathEntry>,
    pub max_depth: usize,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            search_paths: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// One `search_paths` entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchPathEntry {
    pub path: String,
    /// Omitted inherits `max_depth`; an explicit `0` disables scanning
    #[serde(default)]
    pub depth: Option<usize>,
}

impl ConfigFile {
    /// Resolve paths and depths into the runtime [`Config`]
    ///
    /// `~` expands against `home`; remaining relative paths are taken
    /// relative to `cwd`.
    pub fn resolve(&self, home: &Path, cwd: &Path) -> Config {
        let search_roots = self
            .search_paths
            .iter()
            .map(|entry| {
                let expanded = expand_tilde(&entry.path, home);
                let path = if expanded.is_relative() {
                    cwd.join(expanded)
                } else {
                    expanded
                };
                SearchRoot {
                    path,
                    depth: entry.depth.unwrap_or(self.max_depth),
                }
            })
            .collect();

        Config {
            search_roots,
            max_depth: self.max_depth,
        }
    }
}

/// A filesystem subtree scanned for candidate directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRoot {
    /// Absolute, tilde-expanded root
    pub path: PathBuf,
    /// Maximum number of path segments below `path`; `0` scans nothing
    pub depth: usize,
}

impl SearchRoot {
    pub fn new(path: impl Into<PathBuf>, depth: usize) -> Self {
        Self {
            path: path.into(),
            depth,
        }
    }
}

/// Resolved, read-only configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub search_roots: Vec<SearchRoot>,
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_roots: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
