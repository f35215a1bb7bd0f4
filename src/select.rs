//! Candidate selection
//!
//! Resolves the matched candidates to a single file name. One candidate is
//! taken as is; several are shown as an indexed table and the user picks one
//! by index. An empty line cancels the pick.

use thiserror::Error;

use crate::TarpickError;
use crate::retry::Attempts;
use crate::ui::{OutputWriter, UserInput};

type Result<T> = std::result::Result<T, TarpickError>;

/// Width of the horizontal rules around listings and tables
pub const RULE_WIDTH: usize = 70;

const NAME_COLUMN: usize = 60;

const INDEX_PROMPT: &str = "Index of the archive to extract (empty line cancels)";

/// Why an index entry was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("Index {index} is out of range (0-{max})", max = .len.saturating_sub(1))]
    OutOfRange { index: usize, len: usize },
}

/// Horizontal rule used to frame listings
#[must_use]
pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Parse a zero-based index into a list of `len` candidates.
///
/// # Errors
///
/// Returns `SelectionError::NotANumber` if `raw` does not parse as an
/// unsigned integer, or `SelectionError::OutOfRange` if it is `>= len`.
pub fn parse_index(raw: &str, len: usize) -> std::result::Result<usize, SelectionError> {
    let trimmed = raw.trim();
    let index: usize = trimmed
        .parse()
        .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))?;

    if index >= len {
        return Err(SelectionError::OutOfRange { index, len });
    }
    Ok(index)
}

/// Render the candidate table, one line per entry
#[must_use]
pub fn candidate_table(query: &str, candidates: &[String]) -> Vec<String> {
    let mut lines = Vec::with_capacity(candidates.len() + 4);
    lines.push(format!("Matches found for query: {query}"));
    lines.push(format!("{:<NAME_COLUMN$} {:>7}", "File Name:", "Index:"));
    lines.push(rule());
    for (index, candidate) in candidates.iter().enumerate() {
        lines.push(format!("{candidate:<NAME_COLUMN$} {index:>7}"));
    }
    lines.push(rule());
    lines
}

/// Pick one candidate.
///
/// # Errors
///
/// * `TarpickError::NoMatch` when `candidates` is empty
/// * `TarpickError::Cancelled` when the user enters an empty line or input closes
/// * `TarpickError::RetriesExhausted` when `max_attempts` invalid entries were made
/// * `TarpickError::InputError` if reading input fails
pub fn select_candidate(
    query: &str,
    mut candidates: Vec<String>,
    input: &dyn UserInput,
    output: &dyn OutputWriter,
    max_attempts: usize,
) -> Result<String> {
    match candidates.len() {
        0 => {
            return Err(TarpickError::NoMatch {
                query: query.to_string(),
            });
        }
        1 => return Ok(candidates.remove(0)),
        _ => {}
    }

    for line in candidate_table(query, &candidates) {
        output.write(&line);
    }

    let mut attempts = Attempts::new(max_attempts);
    while attempts.take() {
        let Some(raw) = input.prompt_text(INDEX_PROMPT, true)? else {
            return Err(TarpickError::Cancelled);
        };
        if raw.trim().is_empty() {
            return Err(TarpickError::Cancelled);
        }

        match parse_index(&raw, candidates.len()) {
            Ok(index) => return Ok(candidates.swap_remove(index)),
            Err(e) => output.error(&format!("Invalid entry: {e}")),
        }
    }

    Err(TarpickError::RetriesExhausted {
        what: "archive selection",
        attempts: attempts.used(),
    })
}
