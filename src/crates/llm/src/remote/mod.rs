//! Remote completion providers.
//!
//! - **Gemini** - Google's Gemini models via `generateContent`
//! - **OpenAI** - any OpenAI-compatible `chat/completions` endpoint

pub mod gemini;
pub mod openai;

pub use gemini::GeminiClient;
pub use openai::OpenAiClient;

use crate::error::LlmError;
use reqwest::{Client, Response};
use std::time::Duration;

fn http_client(timeout: Option<Duration>) -> crate::Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Turn a non-success response into the matching error.
async fn status_error(provider: &str, response: Response) -> LlmError {
    let status = response.status();
    let error_text = response.text().await.unwrap_or_default();

    match status.as_u16() {
        401 | 403 => LlmError::AuthenticationError(error_text),
        429 => LlmError::RateLimitExceeded(error_text),
        _ => LlmError::ProviderError(format!("{} API error {}: {}", provider, status, error_text)),
    }
}
