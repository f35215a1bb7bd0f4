//! Interactive extraction session
//!
//! Wires the pipeline together: scan the directory, ask for a query, pick a
//! candidate, create the destination and run the extractor. Each step is a
//! plain function in its own module; `Session` only sequences them and owns
//! the user-facing messages.

use std::path::{Path, PathBuf};

use crate::TarpickError;
use crate::extract::{ArchiveExtractor, ExtractionOutcome};
use crate::patterns::{ArchiveQuery, PatternError};
use crate::provision::provision_destination;
use crate::retry::Attempts;
use crate::scan::list_files;
use crate::select::{rule, select_candidate};
use crate::ui::{OutputWriter, UserInput};

type Result<T> = std::result::Result<T, TarpickError>;

const QUERY_PROMPT: &str = "Full file name or a portion of it to extract";

/// One run of the pick-and-extract pipeline
pub struct Session<'a> {
    work_dir: PathBuf,
    input: &'a dyn UserInput,
    output: &'a dyn OutputWriter,
    extractor: &'a dyn ArchiveExtractor,
    max_attempts: usize,
    quiet: bool,
}

impl<'a> Session<'a> {
    /// Create a session working in `work_dir`
    #[must_use]
    pub fn new(
        work_dir: impl Into<PathBuf>,
        input: &'a dyn UserInput,
        output: &'a dyn OutputWriter,
        extractor: &'a dyn ArchiveExtractor,
    ) -> Self {
        Self {
            work_dir: work_dir.into(),
            input,
            output,
            extractor,
            max_attempts: 5,
            quiet: false,
        }
    }

    /// Bound every prompt loop to `max` attempts (0 for no limit)
    #[must_use]
    pub const fn max_attempts(mut self, max: usize) -> Self {
        self.max_attempts = max;
        self
    }

    /// Skip the listing and confirmation lines
    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Run the session to completion
    ///
    /// Nothing is created on disk before a candidate has been chosen.
    ///
    /// # Errors
    ///
    /// Returns `TarpickError` when no file matches, the user cancels, a
    /// prompt runs out of attempts, or the extractor fails.
    pub fn run(&self) -> Result<ExtractionOutcome> {
        let files = list_files(&self.work_dir)?;
        self.show_listing(&files);

        let query = self.prompt_query()?;
        let candidates = query.filter(&files);
        log::info!("Query '{}' matched {} file(s)", query.original(), candidates.len());

        let file = select_candidate(
            query.original(),
            candidates,
            self.input,
            self.output,
            self.max_attempts,
        )?;

        let destination =
            provision_destination(&self.work_dir, self.input, self.output, self.max_attempts)?;

        if !self.quiet {
            self.output.info(&format!(
                "Extracting {file} into {}",
                self.relative(&destination).display()
            ));
        }

        let outcome = self
            .extractor
            .extract(&self.work_dir.join(&file), &destination)?;

        self.output.success(&format!(
            "Extracted {file} to {}",
            self.relative(&destination).display()
        ));
        Ok(outcome)
    }

    fn show_listing(&self, files: &[String]) {
        if self.quiet {
            return;
        }
        self.output.write("Present files in directory:");
        self.output.write(&rule());
        for file in files {
            self.output.write(file);
        }
        self.output.write(&rule());
    }

    fn prompt_query(&self) -> Result<ArchiveQuery> {
        let mut attempts = Attempts::new(self.max_attempts);

        while attempts.take() {
            let Some(raw) = self.input.prompt_text(QUERY_PROMPT, false)? else {
                return Err(TarpickError::Cancelled);
            };

            // Whitespace is part of the pattern; a blank line is not a query.
            let parsed = if raw.trim().is_empty() {
                Err(PatternError::InvalidEmpty)
            } else {
                ArchiveQuery::new(&raw)
            };

            match parsed {
                Ok(query) => return Ok(query),
                Err(e) => self.output.error(&e.to_string()),
            }
        }

        Err(TarpickError::RetriesExhausted {
            what: "query",
            attempts: attempts.used(),
        })
    }

    fn relative<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(&self.work_dir).unwrap_or(path)
    }
}
