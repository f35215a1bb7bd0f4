//! Extraction error types

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors that can occur while running the extraction tool
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The tool could not be started (missing, not executable, ...)
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The tool ran but reported failure
    #[error("'{program}' exited with {status}")]
    Failed { program: String, status: ExitStatus },
}
