//! Failure classification for portfolio API calls.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("API returned {status}")]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },

    /// Nothing came back: connect failure, timeout, broken transport.
    #[error("no response from API: {0}")]
    NoResponse(String),

    /// The request could not be built (bad URL, bad body).
    #[error("could not build request: {0}")]
    Request(String),

    /// A success response whose body was not what we expected.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// A success response missing a field the caller needs.
    #[error("{0}")]
    MissingField(&'static str),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// Server-supplied `detail`, when the error carried one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Message shown inline next to the form or list that failed.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Status { status, .. } => match *status {
                StatusCode::UNAUTHORIZED => "Authentication failed. Please log in again.".into(),
                StatusCode::NOT_FOUND => "The requested resource was not found.".into(),
                StatusCode::INTERNAL_SERVER_ERROR => "Server error. Please try again later.".into(),
                _ => "An error occurred. Please try again.".into(),
            },
            ApiError::NoResponse(_) => {
                "No response from server. Please check your connection.".into()
            }
            ApiError::Request(msg) => msg.clone(),
            ApiError::Decode(_) => "An error occurred. Please try again.".into(),
            ApiError::MissingField(msg) => (*msg).to_string(),
        }
    }

    /// Build a status error from a failed response body.
    ///
    /// FastAPI puts a human-readable string in `detail`; validation errors put
    /// a list there instead, which we ignore.
    pub(crate) fn from_status_body(status: StatusCode, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
            .filter(|d| !d.is_empty());
        ApiError::Status { status, detail }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ApiError::Request(err.to_string())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status {
                status,
                detail: None,
            }
        } else {
            ApiError::NoResponse(err.to_string())
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::Request(err.to_string())
    }
}
