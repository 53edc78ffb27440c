use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("HTTP error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("No user found in local storage")]
    Missing,

    #[error("Stored user is malformed: {0}")]
    Malformed(String),

    #[error("Stored user has no id")]
    BlankId,
}

pub type ApiResult<T> = Result<T, ApiError>;
