//! Version-control client used by the clone workflow

use std::path::Path;
use std::process::Command;

use tms_utils::{Result, TmsError};

const GIT_BINARY: &str = "git";

/// Materializes a repository on disk
pub trait VersionControlClient {
    /// Clone `url` into `destination`, which must not exist yet
    fn clone_repo(&self, url: &str, destination: &Path) -> Result<()>;
}

/// Client that runs `git clone` with the terminal attached for progress
/// and credential prompts
#[derive(Debug, Default, Clone, Copy)]
pub struct GitClient;

impl GitClient {
    pub fn new() -> Self {
        Self
    }
}

impl VersionControlClient for GitClient {
    fn clone_repo(&self, url: &str, destination: &Path) -> Result<()> {
        tracing::info!("Cloning {} into {}", url, destination.display());
        let status = Command::new(GIT_BINARY)
            .arg("clone")
            .arg(url)
            .arg(destination)
            .status()
            .map_err(|e| TmsError::CloneFailed(format!("failed to start {}: {}", GIT_BINARY, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(TmsError::CloneFailed(format!("git clone exited with {}", status)))
        }
    }
}
