//! tms: tmux sessionizer
//!
//! Picks a directory or running session and lands the terminal in a tmux
//! session for it, creating the session on demand.

mod cli;
mod commands;
mod prompt;

use clap::Parser;
use cli::Cli;
use tms_utils::{init_logging_with_config, LogConfig};

fn main() {
    let cli = Cli::parse();

    let log_config = if cli.verbose {
        LogConfig::development()
    } else {
        LogConfig::cli()
    };
    if let Err(e) = init_logging_with_config(log_config) {
        eprintln!("warning: {}", e);
    }

    let exit_code = match commands::execute(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!("Command failed: {:?}", e);
            eprintln!("error: {}", e);
            1
        }
    };

    std::process::exit(exit_code);
}
