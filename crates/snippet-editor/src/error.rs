//! Error types for the snippet editor.

use snippet_forms::ValidationErrors;
use thiserror::Error;

/// A create, update or delete request that did not reach the backend.
///
/// HTTP error statuses are not failures; only the transport failing is.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request could not be sent or no response was received.
    #[error("request failed: {0}")]
    Transport(String),

    /// The request payload could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors surfaced to callers of the editor outside the form flow.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Reading a snippet file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A snippet document was not valid JSON for a snippet.
    #[error("invalid snippet document: {0}")]
    Json(#[from] serde_json::Error),

    /// A request failed.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The form did not pass validation.
    #[error("invalid snippet:\n{0}")]
    Invalid(ValidationErrors),
}

/// Result type alias for editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;
