//! tmux-backed session registry
//!
//! Each method is one blocking `tmux` invocation.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};

use tms_utils::{Result, TmsError};

use super::SessionRegistry;

const TMUX_BINARY: &str = "tmux";

/// Set by tmux in every pane it spawns
const TMUX_ENV_VAR: &str = "TMUX";

/// Registry that shells out to the `tmux` binary on `PATH`
#[derive(Debug, Default, Clone, Copy)]
pub struct TmuxRegistry;

impl TmuxRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Run tmux capturing its output; only a spawn failure is an error here
    fn output<I, S>(&self, operation: &str, args: I) -> Result<Output>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        tracing::debug!("tmux {}", operation);
        Command::new(TMUX_BINARY)
            .arg(operation)
            .args(args)
            .output()
            .map_err(|e| TmsError::registry(operation, e.to_string()))
    }

    /// Run tmux capturing its output, failing on a non-zero exit
    fn run<I, S>(&self, operation: &str, args: I) -> Result<Output>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = self.output(operation, args)?;
        if output.status.success() {
            Ok(output)
        } else {
            Err(failure(operation, &output))
        }
    }
}

/// `=name` makes tmux match the session name exactly instead of by prefix
fn exact_target(name: &str) -> String {
    format!("={}", name)
}

fn failure(operation: &str, output: &Output) -> TmsError {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    let message = if stderr.is_empty() {
        format!("exited with {}", output.status)
    } else {
        stderr
    };
    TmsError::registry(operation, message)
}

/// One trimmed, non-empty session name per line
fn parse_session_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

impl SessionRegistry for TmuxRegistry {
    fn is_attached(&self) -> bool {
        std::env::var_os(TMUX_ENV_VAR).is_some_and(|v| !v.is_empty())
    }

    fn is_server_running(&self) -> bool {
        self.output("list-sessions", ["-F", "#{session_name}"])
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn current_session(&self) -> Option<String> {
        if !self.is_attached() {
            return None;
        }
        let output = self.run("display-message", ["-p", "#S"]).ok()?;
        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    fn list_sessions(&self) -> Result<Vec<String>> {
        let output = self.output("list-sessions", ["-F", "#{session_name}"])?;
        if !output.status.success() {
            // No server means no sessions
            tracing::debug!("tmux list-sessions: {}", failure("list-sessions", &output));
            return Ok(Vec::new());
        }
        Ok(parse_session_list(&String::from_utf8_lossy(&output.stdout)))
    }

    fn create_session(&self, name: &str, directory: &Path) -> Result<()> {
        tracing::info!("Creating session {} in {}", name, directory.display());
        self.run(
            "new-session",
            [
                OsStr::new("-d"),
                OsStr::new("-s"),
                OsStr::new(name),
                OsStr::new("-c"),
                directory.as_os_str(),
            ],
        )?;
        Ok(())
    }

    fn switch_client(&self, name: &str) -> Result<()> {
        self.run("switch-client", ["-t".to_string(), exact_target(name)])?;
        Ok(())
    }

    fn attach_session(&self, name: &str) -> Result<()> {
        tracing::debug!("tmux attach-session {}", name);
        let target = exact_target(name);
        // Inherits the terminal; blocks until the client detaches
        let status = Command::new(TMUX_BINARY)
            .args(["attach-session", "-t", target.as_str()])
            .status()
            .map_err(|e| TmsError::registry("attach-session", e.to_string()))?;
        if status.success() {
            Ok(())
        } else {
            Err(TmsError::registry(
                "attach-session",
                format!("exited with {}", status),
            ))
        }
    }

    fn rename_session(&self, new_name: &str) -> Result<()> {
        self.run("rename-session", [new_name])?;
        Ok(())
    }

    fn kill_session(&self) -> Result<()> {
        self.run("kill-session", std::iter::empty::<&str>())?;
        Ok(())
    }

    fn detach_client(&self) -> Result<()> {
        self.run("detach-client", std::iter::empty::<&str>())?;
        Ok(())
    }
}
