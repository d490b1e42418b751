use thiserror::Error;

/// All possible errors outside the checker itself.
///
/// The acyclicity check is a pure function and cannot fail; these cover the
/// transport and CLI plumbing around it. Malformed request bodies never show
/// up here either — the HTTP boundary rejects them before the core runs.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid allowed origin {origin:?}: {source}")]
    InvalidOrigin {
        origin: String,
        source: axum::http::header::InvalidHeaderValue,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PipelineError>;
