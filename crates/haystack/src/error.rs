use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Pinboard API error [{status}]: {body}")]
    Remote {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to decode Pinboard response: {0}")]
    Decode(String),
}

impl From<haystack_core::error::CoreError> for Error {
    fn from(err: haystack_core::error::CoreError) -> Self {
        Error::Decode(err.to_string())
    }
}
