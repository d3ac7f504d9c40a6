//! Command implementations

mod session;

use std::path::PathBuf;

use tms_core::preflight::{self, FZF, GIT, TMUX};
use tms_core::{ConfigLoader, FzfPicker, GitClient, Sessionizer, TmuxRegistry};
use tms_utils::{config_file, Result};

use crate::cli::{Cli, Command};

type TmuxSessionizer = Sessionizer<TmuxRegistry, FzfPicker, GitClient>;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<i32> {
    preflight::ensure_installed(&required_tools(cli.command.as_ref(), cli.target.as_deref()))?;

    let tms = sessionizer(cli.config)?;

    match cli.command {
        None => session::open(&tms, cli.target),
        Some(Command::New { name }) => session::new_session(&tms, name),
        Some(Command::Rename { name }) => session::rename_session(&tms, name),
        Some(Command::Kill) => session::kill_session(&tms),
        Some(Command::Exit) => session::exit_session(&tms),
        Some(Command::Clone { url }) => session::clone_repo(&tms, url),
    }
}

/// External tools a command cannot run without
fn required_tools(command: Option<&Command>, target: Option<&str>) -> Vec<&'static str> {
    match command {
        None if target.is_some() => vec![TMUX],
        None => vec![TMUX, FZF],
        Some(Command::Clone { .. }) => vec![TMUX, GIT],
        Some(_) => vec![TMUX],
    }
}

fn sessionizer(config_path: Option<PathBuf>) -> Result<TmuxSessionizer> {
    let cwd = std::env::current_dir()?;
    let path = config_path.unwrap_or_else(config_file);
    let config = ConfigLoader::load_or_default(&path, &cwd);

    Ok(Sessionizer::new(
        config,
        TmuxRegistry::new(),
        FzfPicker::new(),
        GitClient::new(),
        cwd,
    ))
}
