//! Result type aliases and the operation result envelope.

use crate::EcomError;
use serde::{Deserialize, Serialize};

/// A specialized `Result` type for catalog operations.
///
/// `Err` carries faults (storage, validation, mapping) that terminate the
/// operation. Expected business outcomes travel in [`OperationResult`].
pub type EcomResult<T> = Result<T, EcomError>;

/// Uniform success/failure envelope returned by every service operation.
///
/// Expected outcomes — including "not found" — are modeled as data rather
/// than errors, since they are frequent, ordinary results. Invariants:
/// a failure envelope never carries a payload, and a success envelope
/// carries one whenever the operation promises it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OperationResult<T> {
    /// Whether the operation achieved its expected outcome.
    pub success: bool,
    /// The payload, present only on success (when the operation returns one).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable success detail or failure reason.
    pub message: String,
}

impl<T> OperationResult<T> {
    /// Creates a success envelope carrying a payload.
    #[must_use]
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
        }
    }

    /// Creates a success envelope without a payload.
    #[must_use]
    pub fn ok_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: message.into(),
        }
    }

    /// Creates a failure envelope. Failures never carry a payload.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
        }
    }

    /// Returns true if the envelope is a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }
}
