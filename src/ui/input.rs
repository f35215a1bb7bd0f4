//! User input abstraction layer
//!
//! Prompts are issued through the `UserInput` trait so the session logic can
//! be driven by a terminal (dialoguer) or by a script in tests.

use std::io;

/// Trait for user input operations
///
/// # Examples
///
/// ```no_run
/// use tarpick::ui::input::{UserInput, DialoguerInput};
///
/// let input = DialoguerInput::new();
///
/// if let Some(name) = input.prompt_text("Destination folder", false).unwrap() {
///     println!("Creating {name}");
/// }
/// ```
pub trait UserInput: Send + Sync {
    /// Prompt user for a line of text
    ///
    /// # Arguments
    ///
    /// * `prompt` - The prompt message to display
    /// * `allow_empty` - Whether an empty line is accepted and returned
    ///
    /// # Returns
    ///
    /// * `Ok(Some(String))` - User entered text
    /// * `Ok(None)` - Input stream closed, nothing more can be read
    /// * `Err(_)` - Input operation failed
    fn prompt_text(&self, prompt: &str, allow_empty: bool) -> Result<Option<String>>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input cancelled by user
    #[error("Input cancelled by user")]
    Cancelled,
}

/// CLI-based user input using dialoguer
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_text(&self, prompt: &str, allow_empty: bool) -> Result<Option<String>> {
        use dialoguer::Input;

        let result = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .interact_text();

        match result {
            Ok(text) => Ok(Some(text)),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => {
                Err(InputError::Cancelled)
            }
            Err(e) => Err(InputError::Io(io::Error::other(e))),
        }
    }
}
