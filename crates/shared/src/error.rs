//! Share codec errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShareError {
    /// The template could not be written as JSON
    #[error("Failed to serialize template: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The token is not base64
    #[error("Share token is not valid base64: {0}")]
    InvalidToken(#[from] base64::DecodeError),

    /// The unescaped payload is not UTF-8
    #[error("Share payload is not valid UTF-8 after unescaping")]
    InvalidEscape(#[from] std::str::Utf8Error),

    /// The payload is not a serialized template
    #[error("Share payload is not a valid template: {0}")]
    InvalidTemplate(#[source] serde_json::Error),
}
