//! Checks that the external tools a command needs are installed

use tms_utils::{Result, TmsError};

pub const TMUX: &str = "tmux";
pub const FZF: &str = "fzf";
pub const GIT: &str = "git";

/// Fail with [`TmsError::PreconditionUnmet`] for the first tool not on `PATH`
pub fn ensure_installed(tools: &[&str]) -> Result<()> {
    for tool in tools {
        match which::which(tool) {
            Ok(path) => tracing::debug!("Found {} at {}", tool, path.display()),
            Err(_) => {
                return Err(TmsError::PreconditionUnmet {
                    tool: tool.to_string(),
                })
            }
        }
    }
    Ok(())
}
