use crate::artifacts::pipeline::{DOTTED_IDENTIFIER_REGEX, STARTS_WITH_LETTER_REGEX};
use anyhow::Context;
use std::path::PathBuf;

/// A validated pipeline name, possibly dotted (`etl.extract`), where each dot
/// separates a parent folder from the segment below it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PipelineName(String);

impl PipelineName {
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        let base_message = format!("'{}' is not a valid pipeline name.", name);

        let starts_with_letter = regex::Regex::new(STARTS_WITH_LETTER_REGEX)
            .with_context(|| format!("invalid pipeline name regex: {STARTS_WITH_LETTER_REGEX}"))?;
        if !starts_with_letter.is_match(&name) {
            anyhow::bail!("{} It must start with a letter or underscore.", base_message);
        }

        if name.len() < 2 {
            anyhow::bail!("{} It must be at least 2 characters long.", base_message);
        }

        let dotted_identifier = regex::Regex::new(DOTTED_IDENTIFIER_REGEX)
            .with_context(|| format!("invalid pipeline name regex: {DOTTED_IDENTIFIER_REGEX}"))?;
        if !dotted_identifier.is_match(&name) {
            anyhow::bail!(
                "{} It must contain only letters, digits, and/or underscores. \
                Folders should be separated by '.'",
                base_message
            );
        }

        Ok(Self(name))
    }

    /// Splits on the last dot into (parent, leaf); the parent is empty for
    /// an undotted name.
    pub fn split_on_last_dot(&self) -> (&str, &str) {
        match self.0.rsplit_once('.') {
            Some((parent, leaf)) => (parent, leaf),
            None => ("", &self.0),
        }
    }

    pub fn leaf(&self) -> &str {
        self.split_on_last_dot().1
    }

    /// The full dotted name as an OS path, one component per segment.
    pub fn as_path(&self) -> PathBuf {
        dotted_to_path(&self.0)
    }
}

/// Transforms a dotted string into a path with OS-independent separators.
pub fn dotted_to_path(dotted: &str) -> PathBuf {
    dotted.split('.').filter(|part| !part.is_empty()).collect()
}

impl AsRef<str> for PipelineName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PipelineName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
