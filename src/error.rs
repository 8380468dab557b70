//! Error types for scribber.

use std::fmt;
use thiserror::Error;

/// Result type alias for scribber operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building documents.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An element was constructed with invalid attributes.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The director was asked to build without a builder assigned.
    #[error("Director has no builder assigned")]
    UnconfiguredBuilder,
}

impl Error {
    /// Get the validation details if this is a validation error.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// An element attribute that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {element}.{field}: {kind}")]
pub struct ValidationError {
    element: &'static str,
    field: &'static str,
    kind: ValidationErrorKind,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(element: &'static str, field: &'static str, kind: ValidationErrorKind) -> Self {
        Self {
            element,
            field,
            kind,
        }
    }

    /// A required field was not supplied.
    pub fn missing(element: &'static str, field: &'static str) -> Self {
        Self::new(element, field, ValidationErrorKind::Missing)
    }

    /// A string or sequence field was empty.
    pub fn empty(element: &'static str, field: &'static str) -> Self {
        Self::new(element, field, ValidationErrorKind::Empty)
    }

    /// A numeric field fell outside its inclusive range.
    pub fn out_of_range(
        element: &'static str,
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    ) -> Self {
        Self::new(
            element,
            field,
            ValidationErrorKind::OutOfRange { value, min, max },
        )
    }

    /// Name of the element kind that failed (e.g. `"heading"`).
    pub fn element(&self) -> &'static str {
        self.element
    }

    /// Name of the field that failed (e.g. `"level"`).
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Why the field failed.
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }
}

/// Reason a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The field was absent.
    Missing,

    /// The string or sequence had no content.
    Empty,

    /// The value was outside `min..=max`.
    OutOfRange {
        /// Rejected value
        value: i64,
        /// Smallest accepted value
        min: i64,
        /// Largest accepted value
        max: i64,
    },
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErrorKind::Missing => f.write_str("field is required"),
            ValidationErrorKind::Empty => f.write_str("must not be empty"),
            ValidationErrorKind::OutOfRange { value, min, max } => {
                write!(f, "must be in {}..={} range (got {})", min, max, value)
            }
        }
    }
}

/// Reject an empty string field.
pub(crate) fn require_text(
    element: &'static str,
    field: &'static str,
    value: String,
) -> std::result::Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::empty(element, field));
    }
    Ok(value)
}
