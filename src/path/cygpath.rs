use std::process::{Command, Stdio};

use crate::error::ConvertError;

/// Converts absolute Unix paths that have no fixed drive mapping.
pub trait PathConverter {
    /// Name used in log lines and error messages.
    fn name(&self) -> &str;

    /// Convert `unix_path` to its Windows form.
    ///
    /// # Errors
    ///
    /// Returns a [`ConvertError`] when the conversion cannot be performed.
    fn to_windows(&self, unix_path: &str) -> Result<String, ConvertError>;
}

/// Runs Cygwin's `cygpath -w` and waits for it to exit.
#[derive(Debug, Clone)]
pub struct Cygpath {
    program: String,
}

impl Cygpath {
    /// Use `program` (a name looked up on `PATH`, or a full path) as the converter.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Cygpath {
    fn default() -> Self {
        Self::new("cygpath")
    }
}

impl PathConverter for Cygpath {
    fn name(&self) -> &str {
        &self.program
    }

    fn to_windows(&self, unix_path: &str) -> Result<String, ConvertError> {
        let program = which::which(&self.program).map_err(|source| ConvertError::NotFound {
            program: self.program.clone(),
            source,
        })?;

        log::debug!("running {} -w {unix_path}", program.display());
        let output = Command::new(&program)
            .arg("-w")
            .arg(unix_path)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ConvertError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ConvertError::Failed {
                program: self.program.clone(),
                path: unix_path.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let invalid = || ConvertError::InvalidOutput {
            program: self.program.clone(),
            path: unix_path.to_string(),
        };
        let stdout = String::from_utf8(output.stdout).map_err(|_| invalid())?;
        if stdout.trim().is_empty() {
            return Err(invalid());
        }
        Ok(stdout)
    }
}
