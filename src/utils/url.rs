//! Input URL validation

use crate::error::SaveSoraError;

/// Validate raw user input before synthesis runs.
///
/// Synthesis itself tolerates any non-empty string; this gate only
/// enforces the product rule that input looks like a scheme-prefixed URL.
pub fn validate_input_url(url: &str) -> Result<(), SaveSoraError> {
    let trimmed = url.trim();

    if trimmed.is_empty() {
        return Err(SaveSoraError::EmptyUrl);
    }

    if !trimmed.starts_with("http") {
        return Err(SaveSoraError::InvalidUrl(
            "URL must start with http:// or https://".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_input_url_accepts_http() {
        assert!(validate_input_url("https://www.tiktok.com/@creator1/video/123").is_ok());
        assert!(validate_input_url("http://example.com").is_ok());
    }

    #[test]
    fn test_validate_input_url_rejects_empty() {
        assert!(matches!(
            validate_input_url(""),
            Err(SaveSoraError::EmptyUrl)
        ));
        assert!(matches!(
            validate_input_url("   "),
            Err(SaveSoraError::EmptyUrl)
        ));
    }

    #[test]
    fn test_validate_input_url_rejects_schemeless() {
        let err = validate_input_url("not a url").unwrap_err();
        assert!(matches!(err, SaveSoraError::InvalidUrl(_)));
        assert!(!err.to_string().is_empty());

        assert!(validate_input_url("ftp://example.com").is_err());
        assert!(validate_input_url("www.tiktok.com/@creator1").is_err());
    }
}
