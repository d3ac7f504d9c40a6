//! Candidate discovery
//!
//! Builds the list offered to the interactive picker: live sessions first,
//! then directories found under each configured search root.

use std::fmt;
use std::path::{Path, PathBuf};

use tms_utils::{Result, TmsError};
use walkdir::WalkDir;

use crate::config::{Config, SearchRoot};
use crate::picker::InteractivePicker;
use crate::registry::SessionRegistry;

/// Version-control metadata directory, never listed or descended into
const VCS_DIR_NAME: &str = ".git";

/// Label prefix marking sessions in the picker
const SESSION_LABEL_PREFIX: &str = "[TMUX] ";

/// Something the user can pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// An existing session, by name
    Session(String),
    /// A directory, by absolute path
    Directory(PathBuf),
}

impl Candidate {
    /// Text shown for this candidate in the picker
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Session(name) => write!(f, "{}{}", SESSION_LABEL_PREFIX, name),
            Candidate::Directory(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Collect every candidate: sessions (minus the current one), then directories
///
/// Nothing is deduplicated; a directory whose name matches a session shows
/// up once per source.
pub fn find_all<R: SessionRegistry + ?Sized>(
    config: &Config,
    registry: &R,
) -> Result<Vec<Candidate>> {
    let current = registry.current_session();
    let mut candidates: Vec<Candidate> = registry
        .list_sessions()?
        .into_iter()
        .filter(|name| current.as_deref() != Some(name.as_str()))
        .map(Candidate::Session)
        .collect();

    for root in &config.search_roots {
        candidates.extend(find_directories(root).into_iter().map(Candidate::Directory));
    }

    if candidates.is_empty() {
        return Err(TmsError::NoCandidates);
    }

    tracing::debug!("Discovered {} candidate(s)", candidates.len());
    Ok(candidates)
}

/// Directories strictly beneath `root.path`, at most `root.depth` levels down
///
/// A missing root yields nothing. Unreadable subtrees are skipped.
pub fn find_directories(root: &SearchRoot) -> Vec<PathBuf> {
    if root.depth == 0 {
        return Vec::new();
    }
    if !root.path.exists() {
        tracing::debug!("Skipping missing search root {}", root.path.display());
        return Vec::new();
    }

    WalkDir::new(&root.path)
        .min_depth(1)
        .max_depth(root.depth)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || entry.file_name() != VCS_DIR_NAME)
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping unreadable entry under {}: {}", root.path.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.into_path())
        .collect()
}

/// Let the user pick one candidate
///
/// Returns `None` when the picker was cancelled or returned a line that
/// matches nothing offered.
pub fn choose<P: InteractivePicker + ?Sized>(
    candidates: &[Candidate],
    picker: &P,
) -> Result<Option<Candidate>> {
    let labels: Vec<String> = candidates.iter().map(Candidate::label).collect();

    let Some(picked) = picker.pick(&labels)? else {
        tracing::debug!("Picker cancelled");
        return Ok(None);
    };

    let chosen = labels
        .iter()
        .position(|label| *label == picked)
        .map(|index| candidates[index].clone());
    if chosen.is_none() {
        tracing::warn!("Picker returned unknown entry {:?}", picked);
    }
    Ok(chosen)
}

/// Build a directory candidate from a user-supplied path
pub fn directory_candidate(target: &str, cwd: &Path) -> Candidate {
    let path = PathBuf::from(target);
    if path.is_absolute() {
        Candidate::Directory(path)
    } else {
        Candidate::Directory(cwd.join(path))
    }
}
