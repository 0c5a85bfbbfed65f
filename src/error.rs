// Error types for the larder engine.
// Classifies transport, decode, and storage failures into one taxonomy.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LarderError {
    #[error("network unreachable: {0}")]
    Connectivity(String),

    #[error("request timed out")]
    Timeout,

    #[error("server returned HTTP {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("recipe not found: {0}")]
    NotFound(String),

    #[error("no results for this query")]
    EmptyResult,

    #[error("storage unavailable: {0}")]
    Storage(#[from] std::io::Error),

    #[error("{0}")]
    Unknown(String),
}

impl From<reqwest::Error> for LarderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LarderError::Timeout
        } else if err.is_connect() {
            LarderError::Connectivity(err.to_string())
        } else if err.is_decode() {
            LarderError::Malformed(err.to_string())
        } else {
            LarderError::Unknown(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LarderError {
    fn from(err: serde_json::Error) -> Self {
        LarderError::Malformed(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LarderError>;
