//! Client error types.

use std::collections::BTreeMap;

use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Validation {
        message: String,
        errors: BTreeMap<String, Vec<String>>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Build an error from a non-success status and the response body.
    ///
    /// The server answers with `{"message": ...}` and, for validation
    /// failures, an `errors` map. Anything else is kept as raw text.
    pub fn from_response(status: u16, body: &str) -> Self {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            message: String,
            #[serde(default)]
            errors: BTreeMap<String, Vec<String>>,
        }

        let parsed = serde_json::from_str::<ErrorBody>(body).ok();
        match (status, parsed) {
            (404, Some(body)) => ClientError::NotFound {
                message: body.message,
            },
            (404, None) => ClientError::NotFound {
                message: "Resource not found".to_string(),
            },
            (422, Some(body)) => ClientError::Validation {
                message: body.message,
                errors: body.errors,
            },
            (status, Some(body)) => ClientError::ServerError {
                status,
                message: body.message,
            },
            (status, None) => ClientError::ServerError {
                status,
                message: body.to_string(),
            },
        }
    }
}
