//!
//! guidedoc: a typed document model for interactive, multi-step guides.
//! This library provides the entities of a guide, their validation and their
//! mapping to and from JSON documents.
//!
//! ## Core Concepts
//!
//! * **Documents (`doc::Doc`)**: The generic, ordered JSON-shaped tree every entity is persisted as.
//! * **Guides (`guide::Guide`)**: The aggregate root: an ordered, access-controlled, tagged sequence of steps with per-language content links.
//! * **Steps (`step::Step`)**: One element of a guide, in one of four variants:
//!     * **Action** and **Milestone**: plain tasks and progress markers.
//!     * **Chapter**: a jump into another guide.
//!     * **Branch**: a `step::UserRequest` presenting `step::RequestOption`s to choose from.
//! * **Content (`content::Content`)**: A standalone, language-specific descriptor with media, warnings and hints.
//! * **Value types (`access::AccessEntry`, `tag::Tag`)**: Small values stored in their canonical string form.
//! * **Validation (`validate`)**: Shape checks that run before any entity is built from external input.
//!
//! Entities hold typed fields only; `to_document` derives their document on
//! demand and `from_document` rebuilds them, keeping fields it does not know
//! so that loading and exporting is lossless. The aggregate roots stamp a
//! `lastUpdate` timestamp on every change, including changes to the children
//! they own (see [`tracked`]).

pub mod access;
pub mod clock;
pub mod constants;
pub mod content;
pub mod doc;
pub mod guide;
pub mod io;
pub mod step;
pub mod tag;
pub mod tracked;
pub mod validate;

pub use access::{AccessEntry, AccessKind};
#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;
pub use clock::{Clock, SystemClock, Timestamp};
pub use content::{Content, IconizedMessage, Media};
pub use doc::{Doc, DocError, List, Value};
pub use guide::Guide;
pub use step::{RequestOption, Step, StepError, StepKind, StepType, UserRequest};
pub use tag::{Tag, TagKind};
pub use validate::ValidationError;

/// Result type used throughout the guidedoc library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the guidedoc library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structured parse errors from the doc module
    #[error(transparent)]
    Doc(doc::DocError),

    /// Structured validation errors from the validate module
    #[error(transparent)]
    Validation(validate::ValidationError),

    /// Structured step errors from the step module
    #[error(transparent)]
    Step(step::StepError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Doc(_) => "doc",
            Error::Validation(_) => "validate",
            Error::Step(_) => "step",
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if the input is not a well-formed document.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::Doc(_))
    }

    /// Check if this error is validation-related.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this error reports a missing required field.
    pub fn is_missing_field(&self) -> bool {
        match self {
            Error::Validation(err) => err.is_missing_field(),
            _ => false,
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Validation(err) => err.is_type_error(),
            Error::Doc(err) => err.is_shape_error(),
            _ => false,
        }
    }

    /// Check if this error reports an operation on the wrong step variant.
    pub fn is_unsupported(&self) -> bool {
        match self {
            Error::Step(err) => err.is_unsupported(),
            _ => false,
        }
    }
}
