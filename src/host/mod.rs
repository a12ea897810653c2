//! The file manager we report back to.

mod shell;

use anyhow::Result;

use crate::config::HostConfig;

pub use shell::CommandHost;

/// What the core needs from the host file manager.
pub trait Host {
    /// Show one line of text to the user.
    fn print(&self, message: &str);

    /// Carry out a composed action line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line could not be delivered to the host.
    fn execute(&self, command_line: &str) -> Result<()>;
}

/// Writes action lines to stdout and messages to stderr, for hosts that
/// capture the output of the tools they launch.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutHost;

impl Host for StdoutHost {
    fn print(&self, message: &str) {
        eprintln!("{message}");
    }

    fn execute(&self, command_line: &str) -> Result<()> {
        println!("{command_line}");
        Ok(())
    }
}

/// Pick the host described by the configuration.
///
/// # Errors
///
/// Fails when a configured host command is blank.
pub fn from_config(config: &HostConfig) -> Result<Box<dyn Host>> {
    match config.command.as_deref() {
        Some(command) => Ok(Box::new(CommandHost::parse(command)?)),
        None => Ok(Box::new(StdoutHost)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_defaults_to_stdout() {
        assert!(from_config(&HostConfig::default()).is_ok());
    }

    #[test]
    fn test_from_config_rejects_blank_command() {
        let config = HostConfig {
            command: Some("   ".into()),
        };
        assert!(from_config(&config).is_err());
    }
}
