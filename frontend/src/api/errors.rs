use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::session::{DecodeError, ValidationError};

/// Failures a caller of the API client can observe.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// Non-success status, carrying the server's error body untouched.
    #[error("Server responded with {status}")]
    Http {
        status: StatusCode,
        body: Option<Value>,
    },

    #[error("Session terminated")]
    SessionTerminated,

    #[error("Failed to parse response: {0}")]
    Parse(#[source] reqwest::Error),

    #[error("Invalid access token: {0}")]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl GatewayError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GatewayError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human readable message from a `{"detail": ...}` or `{"error": ...}` body.
    pub fn server_message(&self) -> Option<String> {
        let GatewayError::Http {
            body: Some(body), ..
        } = self
        else {
            return None;
        };
        ["detail", "error", "message"]
            .iter()
            .find_map(|key| body.get(*key).and_then(Value::as_str))
            .map(str::to_string)
    }
}

/// Why a refresh attempt could not produce a usable access token. Never leaves
/// the client: callers only see [`GatewayError::SessionTerminated`].
#[derive(Debug, Error)]
pub(crate) enum RefreshError {
    #[error("no refresh token stored")]
    MissingRefreshToken,

    #[error("refresh request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("refresh rejected with {0}")]
    Rejected(StatusCode),

    #[error("failed to parse refresh response: {0}")]
    Parse(#[source] reqwest::Error),

    #[error("refresh response carried no access token")]
    MissingAccessToken,

    #[error("refreshed token is invalid: {0}")]
    InvalidToken(#[from] DecodeError),

    #[error("refreshed token is already expired")]
    Expired,
}
