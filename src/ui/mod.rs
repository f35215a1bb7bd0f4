//! UI abstraction layer
//!
//! Prompts and status output are routed through traits so the pipeline in
//! `session` never talks to the terminal directly.
//!
//! - **`UserInput`** - line prompts (dialoguer in production)
//! - **`OutputWriter`** - status messages with severity levels
//!
//! ```no_run
//! use tarpick::ui::{DialoguerInput, OutputWriter, StdoutWriter, UserInput};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let input = DialoguerInput::new();
//! let output = StdoutWriter::new();
//!
//! if let Some(query) = input.prompt_text("Archive name or part of it", false)? {
//!     output.info(&format!("Searching for {query}"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod input;
pub mod output;

pub use input::{DialoguerInput, InputError, UserInput};
pub use output::{MessageLevel, OutputWriter, StdoutWriter};
