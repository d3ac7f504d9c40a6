//! Interactive selection through an external fuzzy finder

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use tms_utils::{Result, TmsError};

const FZF_BINARY: &str = "fzf";

/// Blocking interactive choice among lines of text
pub trait InteractivePicker {
    /// Offer `lines` and return the chosen one, or `None` if cancelled
    fn pick(&self, lines: &[String]) -> Result<Option<String>>;
}

/// Picker backed by `fzf`
///
/// fzf draws on the controlling terminal, reads the choices from stdin and
/// prints the selection on stdout. A non-zero exit (Esc, Ctrl-C, no match)
/// counts as a cancellation.
#[derive(Debug, Default, Clone, Copy)]
pub struct FzfPicker;

impl FzfPicker {
    pub fn new() -> Self {
        Self
    }
}

impl InteractivePicker for FzfPicker {
    fn pick(&self, lines: &[String]) -> Result<Option<String>> {
        let mut child = Command::new(FZF_BINARY)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| TmsError::Picker(format!("failed to start {}: {}", FZF_BINARY, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            let input = lines.join("\n");
            match stdin.write_all(input.as_bytes()) {
                // fzf may exit before reading everything
                Err(e) if e.kind() != ErrorKind::BrokenPipe => {
                    return Err(TmsError::Picker(format!("failed to write choices: {}", e)));
                }
                _ => {}
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|e| TmsError::Picker(format!("failed to wait for {}: {}", FZF_BINARY, e)))?;

        if !output.status.success() {
            tracing::debug!("{} exited with {}", FZF_BINARY, output.status);
            return Ok(None);
        }

        Ok(parse_selection(&output.stdout))
    }
}

/// The selected line with only its line terminator removed
///
/// Labels are matched byte for byte, so surrounding spaces belong to the
/// selection. A label containing a newline cannot be selected intact.
pub(crate) fn parse_selection(stdout: &[u8]) -> Option<String> {
    let selected = String::from_utf8_lossy(stdout);
    let selected = selected.trim_end_matches(['\n', '\r']);
    if selected.is_empty() {
        None
    } else {
        Some(selected.to_string())
    }
}
