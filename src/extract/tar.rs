//! Extraction through the system `tar` binary

use std::path::Path;
use std::process::{Command, Stdio};

use super::{ArchiveExtractor, ExtractError, ExtractionOutcome};

/// Default program used for extraction
pub const DEFAULT_PROGRAM: &str = "tar";

/// Runs `tar -xzvf <archive> -C <destination>` as a child process
///
/// The child inherits the terminal, so the tool's own progress output is
/// shown to the user as it happens.
#[derive(Debug, Clone)]
pub struct TarExtractor {
    program: String,
    verbose: bool,
}

impl TarExtractor {
    #[must_use]
    pub fn new(program: impl Into<String>, verbose: bool) -> Self {
        Self {
            program: program.into(),
            verbose,
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Build the command without running it
    #[must_use]
    pub fn command(&self, archive: &Path, destination: &Path) -> Command {
        let flags = if self.verbose { "-xzvf" } else { "-xzf" };

        let mut cmd = Command::new(&self.program);
        cmd.arg(flags)
            .arg(archive)
            .arg("-C")
            .arg(destination)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

impl Default for TarExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM, true)
    }
}

impl ArchiveExtractor for TarExtractor {
    fn extract(&self, archive: &Path, destination: &Path) -> Result<ExtractionOutcome, ExtractError> {
        let mut cmd = self.command(archive, destination);
        log::info!("Running: {cmd:?}");

        let status = cmd.status().map_err(|source| ExtractError::Spawn {
            program: self.program.clone(),
            source,
        })?;
        log::debug!("{} finished with {status}", self.program);

        if !status.success() {
            return Err(ExtractError::Failed {
                program: self.program.clone(),
                status,
            });
        }

        Ok(ExtractionOutcome {
            archive: archive.to_path_buf(),
            destination: destination.to_path_buf(),
            status,
        })
    }
}
