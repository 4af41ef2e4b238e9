//! Error types for parsing and document construction.

use thiserror::Error;

/// Why a piece of labeled markup was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reason {
    #[error("input contains no sections")]
    EmptyInput,

    #[error("entry appears before any section heading")]
    OrphanEntry,

    #[error("text outside of any entry")]
    StrayText,

    #[error("duplicate section heading: {0}")]
    DuplicateHeading(String),

    #[error("duplicate entry label: {0}")]
    DuplicateLabel(String),

    #[error("section has no entries: {0}")]
    EmptySection(String),

    #[error("entry has no body text: {0}")]
    EmptyBody(String),
}

/// Parse failure pinned to a 1-based line number (0 when the input is empty).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {reason}")]
pub struct MalformedInputError {
    pub line: usize,
    pub reason: Reason,
}

impl MalformedInputError {
    pub fn new(line: usize, reason: Reason) -> Self {
        Self { line, reason }
    }
}

/// A Document value that could not survive a render/parse round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("document has no sections")]
    NoSections,

    #[error("duplicate section heading: {0}")]
    DuplicateHeading(String),

    #[error("duplicate entry label {label:?} in section {heading:?}")]
    DuplicateLabel { heading: String, label: String },

    #[error("section has no entries: {0}")]
    EmptySection(String),

    #[error("invalid heading: {0:?}")]
    InvalidHeading(String),

    #[error("heading level {level} out of range 1..=6 for {heading:?}")]
    InvalidLevel { heading: String, level: u8 },

    #[error("invalid entry label: {0:?}")]
    InvalidLabel(String),

    #[error("invalid body for entry {0:?}")]
    InvalidBody(String),
}
