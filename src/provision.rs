//! Destination folder provisioning
//!
//! Prompts for a folder name and creates it next to the archive. Empty names
//! are re-prompted without touching the filesystem, and a name that cannot
//! be created (already exists, bad characters, no permission) reports the OS
//! error and prompts again.

use std::fs;
use std::path::{Path, PathBuf};

use crate::TarpickError;
use crate::retry::Attempts;
use crate::ui::{OutputWriter, UserInput};

type Result<T> = std::result::Result<T, TarpickError>;

const DESTINATION_PROMPT: &str = "Destination folder to be created";

/// Prompt for a folder name and create it under `base`.
///
/// Returns the path of the newly created directory. Existing directories
/// are never reused.
///
/// # Errors
///
/// * `TarpickError::Cancelled` if the input stream closes
/// * `TarpickError::RetriesExhausted` after `max_attempts` empty or failed names
/// * `TarpickError::InputError` if reading input fails
pub fn provision_destination(
    base: &Path,
    input: &dyn UserInput,
    output: &dyn OutputWriter,
    max_attempts: usize,
) -> Result<PathBuf> {
    let mut attempts = Attempts::new(max_attempts);

    while attempts.take() {
        let Some(raw) = input.prompt_text(DESTINATION_PROMPT, true)? else {
            return Err(TarpickError::Cancelled);
        };

        // Names are used as typed; only a blank line counts as empty.
        if raw.trim().is_empty() {
            output.warning("Folder name cannot be empty");
            continue;
        }
        let name = raw.as_str();

        let destination = base.join(name);
        match fs::create_dir(&destination) {
            Ok(()) => {
                log::debug!("Created destination {}", destination.display());
                return Ok(destination);
            }
            Err(e) => output.error(&format!("Cannot create '{name}': {e}")),
        }
    }

    Err(TarpickError::RetriesExhausted {
        what: "destination folder",
        attempts: attempts.used(),
    })
}
