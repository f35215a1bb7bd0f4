use regex::{Regex, RegexBuilder};

use super::error::PatternError;

/// A user query compiled into a case-insensitive regex
///
/// Matching uses search semantics: a name is a candidate when the pattern
/// matches anywhere inside it.
#[derive(Debug, Clone)]
pub struct ArchiveQuery {
    original: String,
    compiled: Regex,
}

impl ArchiveQuery {
    /// Compile a query.
    ///
    /// # Errors
    /// * Returns `PatternError::InvalidEmpty` if `pattern` is empty.
    /// * Returns `PatternError::InvalidRegex` if the regex fails to compile.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::InvalidEmpty);
        }
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map(|compiled| Self {
                original: pattern.to_string(),
                compiled,
            })
            .map_err(|e| PatternError::regex_compile(pattern, &e.to_string()))
    }

    /// Whether `name` contains a match for this query
    #[must_use]
    pub fn is_match(&self, name: &str) -> bool {
        self.compiled.is_match(name)
    }

    /// Return the names that match, preserving their order.
    #[must_use]
    pub fn filter<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        names
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|name| self.is_match(name))
            .map(str::to_string)
            .collect()
    }

    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }
}
