//! Fetch Errors
//!
//! Callers treat every variant as the same "fetch failed" outcome; the
//! variants only exist so the logs say what went wrong.

/// Common result type for remote calls
pub type FetchResult<T> = Result<T, FetchError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response
    Transport(String),
    /// The service answered with a non-success status
    Status(u16),
    /// The response body did not match the expected shape
    Decode(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "Transport failure: {}", msg),
            FetchError::Status(code) => write!(f, "Unexpected status: {}", code),
            FetchError::Decode(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}
