//! Error types for document validation.
//!
//! A [`ValidationError`] is raised while an entity is being reconstructed
//! from a well-formed document whose shape is wrong. It is always raised
//! before the entity exists, so no partially built guide, step or content
//! descriptor can escape.

use thiserror::Error;

use crate::doc::Kind;

/// Structured error types for document validation.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` and `field()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent
    #[error("Missing required field [{field}], {expected} expected")]
    MissingField { field: String, expected: Kind },

    /// A field (or array element) holds a value of the wrong kind
    #[error("Invalid type of field [{field}], {expected} expected but found {found}")]
    WrongType {
        field: String,
        expected: Kind,
        found: Kind,
    },

    /// A required string field is present but empty
    #[error("Field [{field}] must not be empty")]
    EmptyField { field: String },

    /// The step discriminator names no known step type
    #[error("Invalid step type: {value}")]
    InvalidStepType { value: String },

    /// An access entry string is not in canonical form
    #[error("Invalid access entry '{value}': {reason}")]
    InvalidAccessEntry { value: String, reason: String },

    /// A tag string is not in canonical form
    #[error("Invalid tag '{value}': {reason}")]
    InvalidTag { value: String, reason: String },

    /// A timestamp string cannot be parsed
    #[error("Invalid timestamp '{value}', ISO-8601 date-time expected")]
    InvalidTimestamp { value: String },

    /// A malformed canonical value, located at `field`
    #[error("Invalid value of field [{field}]: {source}")]
    InvalidField {
        field: String,
        #[source]
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Check if this error reports an absent required field
    pub fn is_missing_field(&self) -> bool {
        matches!(self, ValidationError::MissingField { .. })
    }

    /// Check if this error reports a value of the wrong kind
    pub fn is_type_error(&self) -> bool {
        matches!(self, ValidationError::WrongType { .. })
    }

    /// Check if this error reports a malformed canonical value string
    pub fn is_format_error(&self) -> bool {
        match self {
            ValidationError::InvalidField { source, .. } => source.is_format_error(),
            _ => matches!(
                self,
                ValidationError::InvalidStepType { .. }
                    | ValidationError::InvalidAccessEntry { .. }
                    | ValidationError::InvalidTag { .. }
                    | ValidationError::InvalidTimestamp { .. }
            ),
        }
    }

    /// Get the offending field name, if this error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::MissingField { field, .. }
            | ValidationError::WrongType { field, .. }
            | ValidationError::EmptyField { field }
            | ValidationError::InvalidField { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Returns the error without its field location.
    pub fn unlocated(&self) -> &ValidationError {
        match self {
            ValidationError::InvalidField { source, .. } => source.unlocated(),
            other => other,
        }
    }

    /// Prefixes the field name with `scope`, e.g. `id` becomes `steps[2].id`.
    pub fn within(mut self, scope: &str) -> Self {
        match &mut self {
            ValidationError::MissingField { field, .. }
            | ValidationError::WrongType { field, .. }
            | ValidationError::EmptyField { field }
            | ValidationError::InvalidField { field, .. } => {
                *field = format!("{scope}.{field}");
            }
            _ => {}
        }
        self
    }

    /// Locates a value error at `field`, e.g. a bad tag at `tags[3]`.
    ///
    /// Errors that already name a field get `field` as their scope instead.
    pub fn at(self, field: &str) -> Self {
        match self {
            ValidationError::MissingField { .. }
            | ValidationError::WrongType { .. }
            | ValidationError::EmptyField { .. }
            | ValidationError::InvalidField { .. } => self.within(field),
            other => ValidationError::InvalidField {
                field: field.to_string(),
                source: Box::new(other),
            },
        }
    }
}

// Conversion from ValidationError to the main Error type
impl From<ValidationError> for crate::Error {
    fn from(err: ValidationError) -> Self {
        crate::Error::Validation(err)
    }
}
