//! Error types for step operations.

use thiserror::Error;

use super::StepType;

/// Structured error types for step operations.
///
/// Step variants form a closed set, so the only misuse left to report is
/// calling a variant-specific operation on a step of another variant.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StepError {
    /// The operation is only defined for another step variant
    #[error("Operation '{operation}' is not supported by {step_type} steps")]
    Unsupported {
        operation: &'static str,
        step_type: StepType,
    },
}

impl StepError {
    /// Check if this error reports an operation on the wrong step variant
    pub fn is_unsupported(&self) -> bool {
        matches!(self, StepError::Unsupported { .. })
    }

    /// Get the variant of the step the operation was attempted on
    pub fn step_type(&self) -> StepType {
        match self {
            StepError::Unsupported { step_type, .. } => *step_type,
        }
    }
}

// Conversion from StepError to the main Error type
impl From<StepError> for crate::Error {
    fn from(err: StepError) -> Self {
        crate::Error::Step(err)
    }
}
