use thiserror::Error;

/// Failures talking to OMDb or interpreting what it sent back.
#[derive(Debug, Error)]
pub enum OmdbError {
    /// The request could not be sent or the body could not be read
    #[error("OMDb request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The body was not the JSON object OMDb documents
    #[error("OMDb sent malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// OMDb answered with a non-success HTTP status
    #[error("OMDb HTTP {status_code}: {message}")]
    Api { status_code: u16, message: String },
    /// OMDb answered, but reported that no movie matched
    #[error("Movie not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, OmdbError>;
