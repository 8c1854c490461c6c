//! Validation and composition error types.

use std::fmt;

use thiserror::Error;

/// A required draft field that is missing or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    /// No hazard category selected.
    AlertType,
    /// Empty title.
    Title,
    /// Empty main message.
    Body,
    /// No regions selected.
    Regions,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingField::AlertType => write!(f, "alert type"),
            MissingField::Title => write!(f, "title"),
            MissingField::Body => write!(f, "message body"),
            MissingField::Regions => write!(f, "target regions"),
        }
    }
}

/// Outcome of checking a draft against the sendable invariant.
///
/// Lists every missing requirement so the UI can surface them all at
/// once. Producing a report never mutates the draft.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// Requirements the draft does not meet, in check order.
    pub missing: Vec<MissingField>,
}

impl ValidationReport {
    /// True when every required field is present.
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.missing.is_empty() {
            return write!(f, "all required fields present");
        }

        write!(f, "missing required fields: ")?;
        for (i, field) in self.missing.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", field)?;
        }
        Ok(())
    }
}

/// Errors that can occur while composing an alert.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// Draft failed the sendable invariant.
    #[error("draft is not sendable: {0}")]
    Invalid(ValidationReport),
}
