//! Session commands

use std::io::{self, Write};

use tms_core::{Action, SessionRegistry};
use tms_utils::{expand_tilde, home_dir, Result};

use super::TmuxSessionizer;
use crate::prompt::value_or_prompt;

/// Open `target`, or pick a session or directory with fzf
pub fn open(tms: &TmuxSessionizer, target: Option<String>) -> Result<i32> {
    let target = target.map(|t| expand_tilde(&t, &home_dir()).to_string_lossy().into_owned());
    tms.run(target.as_deref())?;
    Ok(0)
}

/// Create a session in the current directory, or switch to it if it exists
pub fn new_session(tms: &TmuxSessionizer, name: Option<String>) -> Result<i32> {
    let name = value_or_prompt(name, "Enter session name: ", "session name")?;

    let action = tms.new_session_action(&name)?;
    if let Action::SwitchTo(existing) = &action {
        report_existing(&mut io::stderr(), existing)?;
    }
    tms.execute(&action)?;
    Ok(0)
}

/// Notice shown on stderr when `new` lands in an existing session
fn report_existing<W: Write>(out: &mut W, name: &str) -> io::Result<()> {
    writeln!(out, "Session '{}' already exists", name)
}

/// Rename the current session
pub fn rename_session(tms: &TmuxSessionizer, name: Option<String>) -> Result<i32> {
    // Fail before prompting when there is nothing to rename
    tms.registry().require_attached()?;

    let name = value_or_prompt(name, "Enter new session name: ", "new session name")?;
    let renamed = tms.rename(&name)?;
    println!("Session renamed to '{}'", renamed);
    Ok(0)
}

/// Kill the current session
pub fn kill_session(tms: &TmuxSessionizer) -> Result<i32> {
    tms.kill()?;
    Ok(0)
}

/// Detach from the current session without killing it
pub fn exit_session(tms: &TmuxSessionizer) -> Result<i32> {
    tms.exit()?;
    Ok(0)
}

/// Clone a repository into the current directory and open it
pub fn clone_repo(tms: &TmuxSessionizer, url: Option<String>) -> Result<i32> {
    let url = value_or_prompt(url, "Enter repository: ", "repository")?;
    tms.clone_and_run(&url)?;
    Ok(0)
}
