//! Error handling for Tubelens

use thiserror::Error;

/// Main error type for Tubelens
#[derive(Debug, Error)]
pub enum TubelensError {
    /// The input did not match any supported video URL shape.
    /// The offending input is kept for logging only; it is not part of the message.
    #[error("Invalid video URL")]
    InvalidUrl(String),

    #[error("Error fetching video information: {0}")]
    FetchFailed(String),

    /// The API answered, but flagged an error in the payload
    #[error("{0}")]
    UpstreamError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to open link: {0}")]
    LinkOpen(String),
}

impl TubelensError {
    /// True for the errors that end a single lookup and are shown to the user
    /// as its result.
    pub fn is_terminal_for_request(&self) -> bool {
        matches!(
            self,
            TubelensError::InvalidUrl(_)
                | TubelensError::FetchFailed(_)
                | TubelensError::UpstreamError(_)
        )
    }
}

impl From<reqwest::Error> for TubelensError {
    fn from(err: reqwest::Error) -> Self {
        TubelensError::FetchFailed(err.to_string())
    }
}
