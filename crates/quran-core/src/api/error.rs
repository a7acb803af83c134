use thiserror::Error;

use crate::strings;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API answered with code {0}")]
    Status(u16),
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Response carried no data")]
    Empty,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// A non-200 `code`, or a 200 envelope without `data`. Chapter detail
    /// loads drop these without telling the user.
    pub fn is_silent(&self) -> bool {
        matches!(self, ApiError::Status(_) | ApiError::Empty)
    }

    pub fn hint(&self) -> &'static str {
        match self {
            ApiError::Http(e) if e.is_timeout() => strings::HINT_TIMEOUT,
            ApiError::Http(e) if e.is_decode() => strings::HINT_DECODE,
            ApiError::Http(_) | ApiError::Io(_) => strings::HINT_CONNECTION,
            ApiError::Status(_) | ApiError::Decode(_) | ApiError::Empty => strings::HINT_DECODE,
        }
    }
}
