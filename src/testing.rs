//! Testing utilities for tarpick
//!
//! Scripted stand-ins for the terminal and the extraction tool, plus file
//! fixture helpers.
//!
//! Only available when compiled with `cfg(test)`.

use std::collections::VecDeque;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::extract::{ArchiveExtractor, ExtractError, ExtractionOutcome};
use crate::ui::input::{self, UserInput};
use crate::ui::output::{MessageLevel, OutputWriter};

/// Create a test file with default content
///
/// # Errors
/// Returns an `io::Error` if the file cannot be created or written.
pub fn create_test_file(path: impl AsRef<Path>) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(b"test content")?;
    Ok(())
}

/// Input that replays a fixed list of answers
///
/// Every prompt is recorded. Once the script runs out the input behaves
/// like a closed stream and returns `Ok(None)`.
pub struct ScriptedInput {
    answers: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|s| (*s).to_string()).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts issued so far, in order
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Answers not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }
}

impl UserInput for ScriptedInput {
    fn prompt_text(&self, prompt: &str, _allow_empty: bool) -> input::Result<Option<String>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.answers.lock().unwrap().pop_front())
    }
}

/// Output writer that keeps every message in memory
#[derive(Default)]
pub struct RecordingOutput {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl RecordingOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// Messages recorded at `level`
    #[must_use]
    pub fn at(&self, level: MessageLevel) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg)
            .collect()
    }

    fn push(&self, level: MessageLevel, message: &str) {
        self.messages.lock().unwrap().push((level, message.to_string()));
    }
}

impl OutputWriter for RecordingOutput {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }
}

/// Extractor that records its calls instead of running a tool
#[derive(Default)]
pub struct RecordingExtractor {
    calls: Mutex<Vec<(PathBuf, PathBuf)>>,
    missing_tool: bool,
}

impl RecordingExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extractor that fails as if the tool were not installed
    #[must_use]
    pub fn missing_tool() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            missing_tool: true,
        }
    }

    #[must_use]
    pub fn calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ArchiveExtractor for RecordingExtractor {
    fn extract(&self, archive: &Path, destination: &Path) -> Result<ExtractionOutcome, ExtractError> {
        self.calls
            .lock()
            .unwrap()
            .push((archive.to_path_buf(), destination.to_path_buf()));

        if self.missing_tool {
            return Err(ExtractError::Spawn {
                program: "tar".to_string(),
                source: io::Error::from(io::ErrorKind::NotFound),
            });
        }

        Ok(ExtractionOutcome {
            archive: archive.to_path_buf(),
            destination: destination.to_path_buf(),
            status: std::process::ExitStatus::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_replays_in_order() {
        let input = ScriptedInput::new(&["first", "second"]);
        assert_eq!(input.prompt_text("a", false).unwrap().as_deref(), Some("first"));
        assert_eq!(input.prompt_text("b", true).unwrap().as_deref(), Some("second"));
        assert_eq!(input.prompt_text("c", true).unwrap(), None);
        assert_eq!(input.prompts(), vec!["a", "b", "c"]);
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_recording_output_levels() {
        let output = RecordingOutput::new();
        output.success("done");
        output.error("bad");
        output.error("worse");

        assert_eq!(output.at(MessageLevel::Error), vec!["bad", "worse"]);
        assert_eq!(output.messages().len(), 3);
    }
}
