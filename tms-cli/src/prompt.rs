//! Prompting for positional arguments the user left out

use std::io::{self, BufRead, Write};

use tms_utils::{Result, TmsError};

/// Use `value` if given, otherwise ask on the terminal
///
/// A blank answer is [`TmsError::EmptyInput`] naming `what`.
pub fn value_or_prompt(value: Option<String>, label: &str, what: &str) -> Result<String> {
    match value {
        Some(value) => non_empty(value, what),
        None => {
            let stdin = io::stdin();
            let answer = ask(label, &mut stdin.lock(), &mut io::stdout())?;
            non_empty(answer, what)
        }
    }
}

/// Write `label`, then read one line from `input` without its line ending
fn ask<R: BufRead, W: Write>(label: &str, input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn non_empty(value: String, what: &str) -> Result<String> {
    if value.trim().is_empty() {
        Err(TmsError::empty(what))
    } else {
        Ok(value)
    }
}
