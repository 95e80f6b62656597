/*
[INPUT]:  Error sources (HTTP, API, serialization, URL parsing)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the taskboard adapter
#[derive(Error, Debug)]
pub enum TaskboardError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Record does not exist
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TaskboardError {
    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        TaskboardError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// HTTP status carried by the error, if any. Logged with remote failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            TaskboardError::Api { status, .. } => Some(*status),
            TaskboardError::Http(err) => err.status().map(|status| status.as_u16()),
            TaskboardError::NotFound { .. } => Some(StatusCode::NOT_FOUND.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for taskboard operations
pub type Result<T> = std::result::Result<T, TaskboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = TaskboardError::api_error(StatusCode::BAD_REQUEST, "title is required");
        match err {
            TaskboardError::Api { status, ref message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "title is required");
            }
            _ => panic!("Expected Api error variant"),
        }
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_not_found_display() {
        let err = TaskboardError::NotFound {
            kind: "task",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "task not found: abc");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_config_error_has_no_status() {
        assert_eq!(TaskboardError::Config("bad".to_string()).status(), None);
    }
}
