//! Extraction error types.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ExtractError {
    /// The body is not a document at all. Distinct from a parsed document
    /// with zero candidate elements, which is a normal empty result.
    #[error("document is empty and cannot be parsed as markup")]
    UnparsableDocument,

    /// A selector list compiled to nothing usable. Individually broken
    /// entries are logged and skipped; this fires when a whole list is
    /// unusable.
    #[error("no valid CSS selector for '{field}': {reason}")]
    InvalidSelector { field: &'static str, reason: String },

    /// A numeric-extraction pattern failed to compile.
    #[error("invalid extraction pattern: {0}")]
    InvalidPattern(String),

    /// A candidate is missing a field it cannot be emitted without.
    /// Absorbed per candidate inside the parser; never escapes `extract`.
    #[error("required field '{field}' not found in candidate element")]
    RequiredFieldMissing { field: &'static str },
}

impl ExtractError {
    pub(crate) fn invalid_selector(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSelector {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn required_field_missing(field: &'static str) -> Self {
        Self::RequiredFieldMissing { field }
    }
}

pub type ExtractResult<T> = Result<T, ExtractError>;
