//! Google Gemini client implementation.
//!
//! Talks to the Gemini API's `generateContent` endpoint. The API key travels
//! in the `x-goog-api-key` header, never in the URL.
//!
//! # Example
//!
//! ```rust,ignore
//! use llm::remote::GeminiClient;
//! use llm::config::RemoteLlmConfig;
//! use llm::CompletionModel;
//!
//! let config = RemoteLlmConfig::from_env(
//!     "GEMINI_API_KEY",
//!     "https://generativelanguage.googleapis.com/v1beta",
//!     "gemini-1.5-flash"
//! )?;
//! let client = GeminiClient::new(config)?;
//!
//! let answer = client.complete("gemini-1.5-flash", "Hello!").await?;
//! ```

use super::{http_client, status_error};
use crate::config::RemoteLlmConfig;
use crate::error::{LlmError, Result};
use crate::traits::CompletionModel;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Google Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    config: RemoteLlmConfig,
    client: Client,
}

impl GeminiClient {
    /// Create a new Gemini client with the given configuration.
    pub fn new(config: RemoteLlmConfig) -> Result<Self> {
        let client = http_client(config.timeout)?;
        Ok(Self { config, client })
    }

    fn build_request(prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiMessage {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }

    /// Pull the answer text out of the first candidate.
    fn extract_text(gemini_resp: GeminiResponse) -> Result<String> {
        let candidate = gemini_resp
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("Gemini returned no candidates".to_string()))?;

        if let Some(reason) = &candidate.finish_reason {
            debug!(finish_reason = %reason, "Gemini candidate finished");
        }

        let content = candidate.content.ok_or_else(|| {
            LlmError::InvalidResponse("Gemini candidate has no content".to_string())
        })?;

        Ok(content
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect::<Vec<_>>()
            .join(""))
    }
}

#[async_trait]
impl CompletionModel for GeminiClient {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String> {
        // Gemini API URL format: base_url/models/{model}:generateContent
        let url = format!("{}/models/{}:generateContent", self.config.base_url, model);
        debug!(%url, "Sending Gemini request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&Self::build_request(prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error("Gemini", response).await);
        }

        let gemini_resp: GeminiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.without_url().to_string()))?;

        Self::extract_text(gemini_resp)
    }

    fn default_model(&self) -> &str {
        &self.config.model
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

// Gemini API types
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiMessage {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let config = RemoteLlmConfig::new(
            "test-key",
            "https://generativelanguage.googleapis.com/v1beta",
            "gemini-1.5-flash",
        );
        let client = GeminiClient::new(config).unwrap();
        assert_eq!(client.default_model(), "gemini-1.5-flash");
        assert_eq!(client.provider_name(), "gemini");
    }

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(GeminiClient::build_request("Hello")).unwrap();

        assert_eq!(
            body,
            json!({"contents": [{"role": "user", "parts": [{"text": "Hello"}]}]})
        );
    }

    #[test]
    fn test_extract_joins_parts() {
        let resp: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "fo"}, {"text": "und"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 3, "candidatesTokenCount": 1}
        }))
        .unwrap();

        assert_eq!(GeminiClient::extract_text(resp).unwrap(), "found");
    }

    #[test]
    fn test_extract_without_candidates() {
        let resp: GeminiResponse =
            serde_json::from_value(json!({"promptFeedback": {"blockReason": "SAFETY"}})).unwrap();

        let err = GeminiClient::extract_text(resp).unwrap_err();
        assert!(err.is_malformed_response());
    }
}
