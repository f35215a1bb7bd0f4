//! Archive extraction
//!
//! Extraction is delegated to an `ArchiveExtractor`. The production
//! implementation shells out to `tar`; tests substitute a recorder.

mod error;
pub mod tar;

pub use error::ExtractError;
pub use tar::TarExtractor;

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

/// Result of a successful extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionOutcome {
    /// Archive that was extracted
    pub archive: PathBuf,
    /// Directory the archive was extracted into
    pub destination: PathBuf,
    /// Exit status reported by the tool
    pub status: ExitStatus,
}

/// Capability to extract a gzip tar archive into a directory
pub trait ArchiveExtractor {
    /// Extract `archive` into the existing directory `destination`.
    ///
    /// # Errors
    ///
    /// Returns `ExtractError` if the tool cannot be started or reports failure.
    fn extract(&self, archive: &Path, destination: &Path) -> Result<ExtractionOutcome, ExtractError>;
}
