//! Error types for loading and rendering the treemap

use thiserror::Error;

/// Result type alias for treemap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading the dataset or writing output
///
/// Rendering itself never fails: malformed trees degrade to zero-area cells.
#[derive(Error, Debug)]
pub enum Error {
    /// The retrieval failed (transport error or non-success status)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The response body was not a valid JSON tree
    #[error("Failed to parse dataset: {0}")]
    ParseError(String),

    /// Invalid configuration (bad URL, empty canvas, ...)
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Local file access failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ParseError(err.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::NetworkError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_map_to_parse_error() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err().into();
        assert!(matches!(err, Error::ParseError(_)));
        assert!(err.to_string().starts_with("Failed to parse dataset"));
    }
}
