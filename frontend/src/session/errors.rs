use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unrecognized role `{0}`")]
    UnknownRole(String),

    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("passwords do not match")]
    PasswordMismatch,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("token is not a dot-separated JWT")]
    Malformed,

    #[error("claims segment is not valid base64url: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("claims segment is not valid JSON: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("missing {claim} claim")]
    MissingClaim { claim: &'static str },

    #[error("exp claim out of range: {0}")]
    ExpiryOutOfRange(i64),

    #[error(transparent)]
    Role(#[from] ValidationError),
}
