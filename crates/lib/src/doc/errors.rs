//! Error types for document parsing.
//!
//! A [`DocError`] means the input is not a usable document at all: the text is
//! not well-formed JSON, or its top-level value is not an object. Documents
//! that parse but have the wrong shape fail later with a
//! [`ValidationError`](crate::validate::ValidationError).

use thiserror::Error;

use super::Kind;

/// Structured error types for document parsing.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DocError {
    /// The input is not well-formed JSON
    #[error("Malformed document at line {line}, column {column}: {reason}")]
    Syntax {
        line: usize,
        column: usize,
        reason: String,
    },

    /// The input is well-formed but its top-level value is not an object
    #[error("Expected a document object, found {found}")]
    NotAnObject { found: Kind },
}

impl DocError {
    /// Check if this error is a syntax error in the input text
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, DocError::Syntax { .. })
    }

    /// Check if this error is about the shape of the top-level value
    pub fn is_shape_error(&self) -> bool {
        matches!(self, DocError::NotAnObject { .. })
    }
}

impl From<serde_json::Error> for DocError {
    fn from(err: serde_json::Error) -> Self {
        DocError::Syntax {
            line: err.line(),
            column: err.column(),
            reason: err.to_string(),
        }
    }
}

// Conversion from DocError to the main Error type
impl From<DocError> for crate::Error {
    fn from(err: DocError) -> Self {
        crate::Error::Doc(err)
    }
}
