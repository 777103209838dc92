//! Error Types
//!
//! Failures surfaced by the command layer and the chore form.

use serde::Deserialize;
use thiserror::Error;

/// Generic message shown when the server gave us nothing usable
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response at all
    #[error("network error: {message}")]
    Network { message: String },

    /// Non-success status with a JSON `{message}` body
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Non-success status whose body is not JSON
    #[error("unexpected response: HTTP {status}")]
    UnreadableBody { status: u16 },

    /// Success status, but the body did not match the expected shape
    #[error("failed to decode response: {message}")]
    Decode { message: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode { message: message.into() }
    }

    /// Build the error for a non-success response body
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(err) => Self::Server { status, message: err.message },
            Err(_) => Self::UnreadableBody { status },
        }
    }

    /// Text for the notice bar. Server messages are shown verbatim.
    pub fn user_message(&self) -> String {
        match self {
            Self::Server { message, .. } => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Chore form validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Please choose who the chore is assigned to")]
    MissingAssignee,

    #[error("Frequency must be a whole number of days, at least 1")]
    InvalidFrequency,

    #[error("Last completed must be a valid date")]
    InvalidDate,
}
