//! Query patterns used to narrow the directory listing down to archive candidates.

pub mod archive;
pub mod error;

pub use archive::ArchiveQuery;
pub use error::PatternError;
