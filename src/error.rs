//! Error types for savesora

use thiserror::Error;

/// Main error type for savesora operations
#[derive(Debug, Error)]
pub enum SaveSoraError {
    #[error("Please paste a valid video URL")]
    EmptyUrl,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Download failed: {0}")]
    DownloadFailed(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Suggestion service error: {0}")]
    SuggestionError(String),

    #[error("Generic error: {0}")]
    Generic(String),
}

impl SaveSoraError {
    /// Check if error stems from user input rather than I/O
    pub fn is_input_error(&self) -> bool {
        matches!(self, SaveSoraError::EmptyUrl | SaveSoraError::InvalidUrl(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_input_error() {
        assert!(SaveSoraError::EmptyUrl.is_input_error());
        assert!(SaveSoraError::InvalidUrl("missing scheme".to_string()).is_input_error());
        assert!(!SaveSoraError::Generic("oops".to_string()).is_input_error());
    }

    #[test]
    fn test_error_messages_non_empty() {
        assert!(!SaveSoraError::EmptyUrl.to_string().is_empty());
        assert!(SaveSoraError::InvalidUrl("no scheme".to_string())
            .to_string()
            .contains("no scheme"));
    }
}
