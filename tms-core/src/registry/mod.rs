//! Session registry boundary
//!
//! The multiplexer is the only source of truth for which sessions exist.
//! Every query goes back to it; nothing is cached between calls.

#[cfg(test)]
pub(crate) mod memory;
mod tmux;

use std::path::Path;

use tms_utils::{Result, TmsError};

pub use tmux::TmuxRegistry;

/// Session operations of an external terminal multiplexer
///
/// Implementors provide the raw primitives. The provided methods layer the
/// attachment and existence checks on top of them.
pub trait SessionRegistry {
    /// Whether this process runs inside a multiplexer client
    fn is_attached(&self) -> bool;

    /// Whether a multiplexer server is running at all
    fn is_server_running(&self) -> bool;

    /// Name of the session this process is attached to, if any
    fn current_session(&self) -> Option<String>;

    /// All session names, in the multiplexer's order
    fn list_sessions(&self) -> Result<Vec<String>>;

    /// Create a detached session rooted at `directory`
    fn create_session(&self, name: &str, directory: &Path) -> Result<()>;

    /// Move the attached client to `name`
    fn switch_client(&self, name: &str) -> Result<()>;

    /// Attach the terminal to `name`, blocking until the client detaches
    fn attach_session(&self, name: &str) -> Result<()>;

    /// Rename the attached session without any checks
    fn rename_session(&self, new_name: &str) -> Result<()>;

    /// Kill the attached session
    fn kill_session(&self) -> Result<()>;

    /// Detach the attached client
    fn detach_client(&self) -> Result<()>;

    /// Check for `name` against a fresh listing
    fn has_session(&self, name: &str) -> Result<bool> {
        Ok(self.list_sessions()?.iter().any(|s| s == name))
    }

    /// Switch when attached, otherwise attach interactively
    fn switch_or_attach(&self, name: &str) -> Result<()> {
        if self.is_attached() {
            self.switch_client(name)
        } else {
            self.attach_session(name)
        }
    }

    /// Rename the attached session, refusing names already in use
    fn rename_current_session(&self, new_name: &str) -> Result<()> {
        self.require_attached()?;
        if self.has_session(new_name)? {
            return Err(TmsError::AlreadyExists(new_name.to_string()));
        }
        self.rename_session(new_name)
    }

    fn kill_current_session(&self) -> Result<()> {
        self.require_attached()?;
        self.kill_session()
    }

    fn detach_current(&self) -> Result<()> {
        self.require_attached()?;
        self.detach_client()
    }

    fn require_attached(&self) -> Result<()> {
        if self.is_attached() {
            Ok(())
        } else {
            Err(TmsError::NotAttached)
        }
    }
}
