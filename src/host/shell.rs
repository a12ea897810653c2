use anyhow::{bail, Context, Result};
use std::process::{Command, Stdio};

use super::Host;

/// Delivers each action line as the last argument of a configured program,
/// e.g. a remote-control executable shipped with the file manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandHost {
    program: String,
    args: Vec<String>,
}

impl CommandHost {
    /// Split `command` into a program and its leading arguments.
    ///
    /// # Errors
    ///
    /// Fails when `command` contains no program.
    pub fn parse(command: &str) -> Result<Self> {
        let mut parts = split_command_line(command);
        if parts.is_empty() {
            bail!("Empty host command");
        }
        let program = parts.remove(0);
        Ok(Self {
            program,
            args: parts,
        })
    }
}

impl Host for CommandHost {
    fn print(&self, message: &str) {
        eprintln!("{message}");
    }

    fn execute(&self, command_line: &str) -> Result<()> {
        log::debug!("handing {command_line:?} to {}", self.program);
        Command::new(&self.program)
            .args(&self.args)
            .arg(command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to spawn host command {}", self.program))?;
        Ok(())
    }
}

/// Split a command line the way Windows programs split their arguments.
///
/// Backslashes are literal unless they precede a double quote: `2n`
/// backslashes before `"` yield `n` backslashes and toggle quoting, `2n + 1`
/// yield `n` backslashes and a literal quote. `""` is an empty argument.
fn split_command_line(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;
    let mut backslashes = 0usize;

    for c in s.chars() {
        match c {
            '\\' => {
                backslashes += 1;
                in_token = true;
            }
            '"' => {
                current.extend(std::iter::repeat('\\').take(backslashes / 2));
                if backslashes % 2 == 1 {
                    current.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
                backslashes = 0;
                in_token = true;
            }
            ' ' | '\t' if !in_quotes => {
                current.extend(std::iter::repeat('\\').take(backslashes));
                backslashes = 0;
                if in_token {
                    parts.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            _ => {
                current.extend(std::iter::repeat('\\').take(backslashes));
                backslashes = 0;
                current.push(c);
                in_token = true;
            }
        }
    }
    current.extend(std::iter::repeat('\\').take(backslashes));
    if in_token {
        parts.push(current);
    }
    parts
}
