//! In-memory registry used by tests

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use tms_utils::{Result, TmsError};

use super::SessionRegistry;

/// A mutating call observed by [`MemoryRegistry`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create { name: String, directory: PathBuf },
    Switch(String),
    Attach(String),
    Rename(String),
    Kill,
    Detach,
}

#[derive(Debug, Default)]
struct State {
    sessions: Vec<String>,
    current: Option<String>,
    server_running: bool,
    calls: Vec<Call>,
}

/// Registry backed by a session list in memory
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    state: RefCell<State>,
}

impl MemoryRegistry {
    /// No server, no sessions, not attached
    pub fn stopped() -> Self {
        Self::default()
    }

    /// Running server with `sessions`, not attached
    pub fn detached(sessions: &[&str]) -> Self {
        let registry = Self::default();
        {
            let mut state = registry.state.borrow_mut();
            state.sessions = sessions.iter().map(|s| s.to_string()).collect();
            state.server_running = true;
        }
        registry
    }

    /// Running server with `sessions`, attached to `current`
    pub fn attached(current: &str, sessions: &[&str]) -> Self {
        let registry = Self::detached(sessions);
        registry.state.borrow_mut().current = Some(current.to_string());
        registry
    }

    pub fn sessions(&self) -> Vec<String> {
        self.state.borrow().sessions.clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }
}

impl SessionRegistry for MemoryRegistry {
    fn is_attached(&self) -> bool {
        self.state.borrow().current.is_some()
    }

    fn is_server_running(&self) -> bool {
        self.state.borrow().server_running
    }

    fn current_session(&self) -> Option<String> {
        self.state.borrow().current.clone()
    }

    fn list_sessions(&self) -> Result<Vec<String>> {
        Ok(self.sessions())
    }

    fn create_session(&self, name: &str, directory: &Path) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.sessions.iter().any(|s| s == name) {
            return Err(TmsError::registry(
                "new-session",
                format!("duplicate session: {}", name),
            ));
        }
        state.sessions.push(name.to_string());
        state.server_running = true;
        state.calls.push(Call::Create {
            name: name.to_string(),
            directory: directory.to_path_buf(),
        });
        Ok(())
    }

    fn switch_client(&self, name: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::Switch(name.to_string()));
        state.current = Some(name.to_string());
        Ok(())
    }

    fn attach_session(&self, name: &str) -> Result<()> {
        self.state
            .borrow_mut()
            .calls
            .push(Call::Attach(name.to_string()));
        Ok(())
    }

    fn rename_session(&self, new_name: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if let Some(current) = state.current.take() {
            for session in state.sessions.iter_mut() {
                if *session == current {
                    *session = new_name.to_string();
                }
            }
        }
        state.current = Some(new_name.to_string());
        state.calls.push(Call::Rename(new_name.to_string()));
        Ok(())
    }

    fn kill_session(&self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if let Some(current) = state.current.take() {
            state.sessions.retain(|s| *s != current);
        }
        state.calls.push(Call::Kill);
        Ok(())
    }

    fn detach_client(&self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.current = None;
        state.calls.push(Call::Detach);
        Ok(())
    }
}
