//! Tarpick - find a gzip tar archive by fuzzy name and extract it
//!
//! This library provides the pieces of a small interactive pipeline: scan the
//! working directory, match a case-insensitive query against the file names,
//! pick a candidate, create a destination folder and hand both to an
//! external extraction tool.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod extract;
pub mod patterns;
pub mod provision;
pub mod retry;
pub mod scan;
pub mod select;
pub mod session;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TarpickError {
    /// The query matched no file in the directory
    #[error("No file matches query '{query}'")]
    NoMatch { query: String },
    /// The user cancelled a prompt or closed the input stream
    #[error("Cancelled by user")]
    Cancelled,
    /// A prompt loop ran out of attempts
    #[error("Gave up on {what} after {attempts} attempt(s)")]
    RetriesExhausted { what: &'static str, attempts: usize },
    /// Query error
    #[error("Query error: {0}")]
    PatternError(#[from] patterns::PatternError),
    /// Terminal input error
    #[error("Input error: {0}")]
    InputError(#[from] ui::InputError),
    /// Extraction tool error
    #[error("Extraction error: {0}")]
    ExtractError(#[from] extract::ExtractError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
