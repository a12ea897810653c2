//! Errors raised by the external path converter.

use std::process::ExitStatus;

use thiserror::Error;

/// Failure of the Unix-to-Windows path conversion utility.
///
/// These are never swallowed: a path that cannot be converted stops the
/// whole invocation instead of being guessed.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The converter program could not be located.
    #[error("path converter `{program}` not found")]
    NotFound {
        /// Program name as configured.
        program: String,
        /// Lookup failure.
        #[source]
        source: which::Error,
    },

    /// The converter could not be started.
    #[error("failed to run path converter `{program}`")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Spawn failure.
        #[source]
        source: std::io::Error,
    },

    /// The converter ran but reported failure.
    #[error("`{program} -w {path}` exited with {status}: {stderr}")]
    Failed {
        /// Program that ran.
        program: String,
        /// Unix path that was being converted.
        path: String,
        /// Exit status of the converter.
        status: ExitStatus,
        /// Whatever the converter wrote to stderr, trimmed.
        stderr: String,
    },

    /// The converter printed something that is not a usable path.
    #[error("path converter `{program}` returned unusable output for {path}")]
    InvalidOutput {
        /// Program that ran.
        program: String,
        /// Unix path that was being converted.
        path: String,
    },
}
