//! Catalogue error payload shared by every driving port.
//!
//! Adapters decide how an [`ErrorCode`] is surfaced (the HTTP adapter maps
//! it to a status line); the domain only records what went wrong.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Failure category reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Malformed input or an unknown vocabulary.
    InvalidRequest,
    /// No plant carries the requested identifier.
    NotFound,
    /// A repository or option store could not be reached.
    ServiceUnavailable,
    /// Anything else; never shown verbatim to clients.
    InternalError,
}

impl ErrorCode {
    /// Message used when an error is raised without one.
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::InvalidRequest => "Invalid request",
            Self::NotFound => "Not found",
            Self::ServiceUnavailable => "Service unavailable",
            Self::InternalError => "Internal server error",
        }
    }
}

/// Catalogue error with a stable code, a message, and optional details.
///
/// The message is never blank: constructors and deserialisation replace an
/// empty or whitespace-only message with [`ErrorCode::default_message`].
///
/// # Examples
/// ```
/// use plant_catalogue::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("plant 42 not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
///
/// let blank = Error::invalid_request("  ");
/// assert_eq!(blank.message(), "Invalid request");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ErrorBody")]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ErrorBody {
    code: ErrorCode,
    #[serde(default)]
    message: String,
    #[serde(default)]
    details: Option<Value>,
}

impl From<ErrorBody> for Error {
    fn from(body: ErrorBody) -> Self {
        let mut error = Self::new(body.code, body.message);
        error.details = body.details;
        error
    }
}

impl Error {
    /// Build an error, substituting the code's default message for a blank
    /// one.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            code.default_message().to_owned()
        } else {
            message
        };
        Self {
            code,
            message,
            details: None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Whether the error must be redacted before leaving the process.
    pub fn is_internal(&self) -> bool {
        self.code == ErrorCode::InternalError
    }

    /// Attach structured details, such as the offending field.
    ///
    /// # Examples
    /// ```
    /// use plant_catalogue::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("unknown category")
    ///     .with_details(json!({ "category": "colours" }));
    /// assert_eq!(err.details(), Some(&json!({ "category": "colours" })));
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
