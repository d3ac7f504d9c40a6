//! CLI argument parsing

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tmux sessionizer - create and switch between tmux sessions
#[derive(Parser, Debug)]
#[command(name = "tms")]
#[command(about = "Tmux sessionizer - create and switch between tmux sessions")]
#[command(
    long_about = "A tmux session manager that helps you quickly create and switch between tmux sessions based on directories."
)]
#[command(version)]
pub struct Cli {
    /// Directory to open as a session; pick interactively when omitted
    pub target: Option<String>,

    /// Configuration file
    ///
    /// Defaults to $XDG_CONFIG_HOME/tmux-sessionizer/config.yaml.
    #[arg(long, global = true, env = "TMS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create a new tmux session in the current directory
    New {
        /// Session name
        name: Option<String>,
    },

    /// Rename the current tmux session
    Rename {
        /// New session name
        name: Option<String>,
    },

    /// Kill the current tmux session
    Kill,

    /// Exit current tmux session without killing it
    Exit,

    /// Clone a git repository and create a tmux session in it
    Clone {
        /// Repository URL (SSH or HTTPS)
        url: Option<String>,
    },
}
