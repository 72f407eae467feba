//! Error types for completion oracle clients.

use thiserror::Error;

/// Result type for LLM operations.
pub type Result<T> = std::result::Result<T, LlmError>;

/// Errors that can occur when talking to a completion provider.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP request failed (connection refused, DNS, timeout, ...).
    ///
    /// The request URL is stripped on conversion; see the `From` impl.
    #[error("HTTP request failed")]
    HttpError(#[source] reqwest::Error),

    /// Failed to serialize/deserialize data.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// API authentication failed.
    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    /// API key not found in environment.
    #[error("API key not found: {0}")]
    ApiKeyNotFound(String),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// The provider answered, but not with anything we can use.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Non-success status from the provider.
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl LlmError {
    /// Check if this error is due to authentication.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            LlmError::AuthenticationError(_) | LlmError::ApiKeyNotFound(_)
        )
    }

    /// Check if the provider was reached but its answer was unusable.
    ///
    /// Callers that only need a best-effort answer (such as a classifier)
    /// may fold these into a default instead of failing.
    pub fn is_malformed_response(&self) -> bool {
        matches!(
            self,
            LlmError::InvalidResponse(_) | LlmError::SerializationError(_)
        )
    }
}

// Query strings may carry credentials, keep them out of error text.
impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::HttpError(err.without_url())
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(LlmError::AuthenticationError("bad key".into()).is_auth_error());
        assert!(LlmError::ApiKeyNotFound("GEMINI_API_KEY".into()).is_auth_error());
        assert!(!LlmError::ProviderError("500".into()).is_auth_error());

        assert!(LlmError::InvalidResponse("no candidates".into()).is_malformed_response());
        assert!(!LlmError::RateLimitExceeded("slow down".into()).is_malformed_response());
    }

    #[test]
    fn test_serde_error_conversion() {
        let err: LlmError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, LlmError::SerializationError(_)));
        assert!(err.to_string().starts_with("Serialization error"));
    }
}
