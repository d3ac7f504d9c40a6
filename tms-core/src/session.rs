//! Session workflows behind each command
//!
//! [`Sessionizer`] wires discovery, the picker, selection and the registry
//! together. It never prompts; the command-line layer supplies every input.

use std::path::PathBuf;

use tms_utils::Result;

use crate::config::Config;
use crate::discovery::{choose, directory_candidate, find_all, Candidate};
use crate::naming::session_name;
use crate::picker::InteractivePicker;
use crate::registry::SessionRegistry;
use crate::repo::extract_repo_name;
use crate::selection::{execute, resolve, Action};
use crate::vcs::VersionControlClient;

/// Entry point for every tms command
pub struct Sessionizer<R, P, V> {
    config: Config,
    registry: R,
    picker: P,
    vcs: V,
    /// Directory used for `new`, `clone` and relative targets
    work_dir: PathBuf,
}

impl<R, P, V> Sessionizer<R, P, V>
where
    R: SessionRegistry,
    P: InteractivePicker,
    V: VersionControlClient,
{
    pub fn new(config: Config, registry: R, picker: P, vcs: V, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            registry,
            picker,
            vcs,
            work_dir: work_dir.into(),
        }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Jump to `target`, or to whatever the user picks when there is none
    ///
    /// A cancelled pick does nothing and succeeds.
    pub fn run(&self, target: Option<&str>) -> Result<()> {
        let selected = match target.map(str::trim).filter(|t| !t.is_empty()) {
            Some(target) => directory_candidate(target, &self.work_dir),
            None => {
                let candidates = find_all(&self.config, &self.registry)?;
                match choose(&candidates, &self.picker)? {
                    Some(candidate) => candidate,
                    None => return Ok(()),
                }
            }
        };

        self.open(&selected)
    }

    /// Plan a new session called `name` in the working directory
    ///
    /// Returns [`Action::SwitchTo`] when a session of that name already
    /// exists; pass the result to [`Sessionizer::execute`].
    pub fn new_session_action(&self, name: &str) -> Result<Action> {
        let name = session_name(name)?;
        if self.registry.has_session(&name)? {
            return Ok(Action::SwitchTo(name));
        }
        Ok(Action::CreateThenSwitch {
            name,
            directory: self.work_dir.clone(),
        })
    }

    /// Clone `url` into the working directory if needed, then open it
    pub fn clone_and_run(&self, url: &str) -> Result<()> {
        let repo = extract_repo_name(url)?;
        let destination = self.work_dir.join(&repo);

        if destination.exists() {
            tracing::debug!("{} already exists, skipping clone", destination.display());
        } else {
            self.vcs.clone_repo(url.trim(), &destination)?;
        }

        self.open(&Candidate::Directory(destination))
    }

    /// Rename the attached session, returning the name actually used
    pub fn rename(&self, new_name: &str) -> Result<String> {
        self.registry.require_attached()?;
        let name = session_name(new_name)?;
        self.registry.rename_current_session(&name)?;
        Ok(name)
    }

    pub fn kill(&self) -> Result<()> {
        self.registry.kill_current_session()
    }

    /// Detach from the attached session, leaving it running
    pub fn exit(&self) -> Result<()> {
        self.registry.detach_current()
    }

    pub fn execute(&self, action: &Action) -> Result<()> {
        execute(action, &self.registry)
    }

    fn open(&self, selected: &Candidate) -> Result<()> {
        let action = resolve(selected, &self.registry)?;
        self.execute(&action)
    }
}
