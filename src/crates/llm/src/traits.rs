//! The completion capability.
//!
//! Callers depend only on [`CompletionModel`]; the concrete provider and its
//! wire format stay behind it. A single prompt goes in, the provider's answer
//! text comes out.
//!
//! # Example Implementation
//!
//! ```rust,ignore
//! use llm::{CompletionModel, Result};
//! use async_trait::async_trait;
//!
//! struct Echo;
//!
//! #[async_trait]
//! impl CompletionModel for Echo {
//!     async fn complete(&self, _model: &str, prompt: &str) -> Result<String> {
//!         Ok(prompt.to_string())
//!     }
//!
//!     fn default_model(&self) -> &str {
//!         "echo"
//!     }
//! }
//! ```

use crate::error::Result;
use async_trait::async_trait;

/// Request/response completion against a language model.
///
/// Implementations must be `Send + Sync`; share them as
/// `Arc<dyn CompletionModel>`.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Send `prompt` as a single user turn to `model` and return the answer text.
    ///
    /// # Errors
    ///
    /// - [`LlmError::HttpError`](crate::LlmError::HttpError) on transport failures
    /// - [`LlmError::AuthenticationError`](crate::LlmError::AuthenticationError) on 401/403
    /// - [`LlmError::RateLimitExceeded`](crate::LlmError::RateLimitExceeded) on 429
    /// - [`LlmError::InvalidResponse`](crate::LlmError::InvalidResponse) when the
    ///   body cannot be decoded or carries no answer
    async fn complete(&self, model: &str, prompt: &str) -> Result<String>;

    /// The model configured for this client.
    fn default_model(&self) -> &str;

    /// Short provider name, used in logs.
    fn provider_name(&self) -> &'static str {
        "custom"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct Upper;

    #[async_trait]
    impl CompletionModel for Upper {
        async fn complete(&self, _model: &str, prompt: &str) -> Result<String> {
            Ok(prompt.to_uppercase())
        }

        fn default_model(&self) -> &str {
            "upper-1"
        }
    }

    #[tokio::test]
    async fn test_trait_object() {
        let model: Arc<dyn CompletionModel> = Arc::new(Upper);

        let answer = model.complete(model.default_model(), "hi").await.unwrap();

        assert_eq!(answer, "HI");
        assert_eq!(model.provider_name(), "custom");
    }
}
