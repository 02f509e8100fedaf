//! Domain-level error types.
//!
//! These errors are transport agnostic. The inbound HTTP adapter maps them to
//! status codes and the canonical `{"error": "<message>"}` JSON body; no
//! other error shape is produced anywhere in the service.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request is malformed or missing required input.
    InvalidRequest,
    /// The referenced user does not exist.
    NotFound,
    /// The user exists but has no spending records to aggregate.
    NoData,
    /// A bonus record already exists for the user.
    Conflict,
    /// The reported total spending is below the bonus threshold.
    ThresholdNotMet,
    /// A backing store failed; details stay server-side.
    StoreError,
}

/// Domain error payload: a code for adapters plus a human-readable message.
///
/// Serializes as a single-key object so every failure on the wire reads
/// `{"error": "..."}` regardless of category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Create an error from a code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::NoData`].
    pub fn no_data(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NoData, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::ThresholdNotMet`].
    pub fn threshold_not_met(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ThresholdNotMet, message)
    }

    /// Convenience constructor for [`ErrorCode::StoreError`].
    pub fn store(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreError, message)
    }
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut body = serializer.serialize_struct("Error", 1)?;
        body.serialize_field("error", &self.message)?;
        body.end()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
