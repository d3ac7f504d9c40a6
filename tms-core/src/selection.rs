//! Turning a picked candidate into a session to land in

use std::path::PathBuf;

use tms_utils::Result;

use crate::discovery::Candidate;
use crate::naming::session_name_for_dir;
use crate::registry::SessionRegistry;

/// What to do with the registry for a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The session exists; switch to it (or attach when outside tmux)
    SwitchTo(String),
    /// Create a detached session in `directory`, then switch to it
    CreateThenSwitch { name: String, directory: PathBuf },
}

impl Action {
    /// Name of the session the user ends up in
    pub fn session_name(&self) -> &str {
        match self {
            Action::SwitchTo(name) => name,
            Action::CreateThenSwitch { name, .. } => name,
        }
    }
}

/// Decide how to reach `selected`
///
/// Session candidates keep their exact name. Directory candidates are named
/// after their normalized basename and reuse a live session of that name.
pub fn resolve<R: SessionRegistry + ?Sized>(selected: &Candidate, registry: &R) -> Result<Action> {
    let directory = match selected {
        Candidate::Session(name) => return Ok(Action::SwitchTo(name.clone())),
        Candidate::Directory(path) => path,
    };

    let name = session_name_for_dir(directory)?;
    let create = Action::CreateThenSwitch {
        name: name.clone(),
        directory: directory.clone(),
    };

    // Without a server there is nothing to reuse
    if !registry.is_attached() && !registry.is_server_running() {
        tracing::debug!("No tmux server running, creating {}", name);
        return Ok(create);
    }

    if registry.has_session(&name)? {
        tracing::debug!("Reusing existing session {}", name);
        Ok(Action::SwitchTo(name))
    } else {
        Ok(create)
    }
}

/// Carry out `action` against the registry
pub fn execute<R: SessionRegistry + ?Sized>(action: &Action, registry: &R) -> Result<()> {
    if let Action::CreateThenSwitch { name, directory } = action {
        registry.create_session(name, directory)?;
    }
    registry.switch_or_attach(action.session_name())
}
