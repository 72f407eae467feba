//! Provider selection and credential loading.
//!
//! The credential is read once at start, from the process environment or an
//! env file, and handed to the oracle at construction. Nothing reads the
//! environment after that.

use crate::error::{NamesakeError, Result};
use llm::remote::{GeminiClient, OpenAiClient};
use llm::{CompletionModel, LlmError, RemoteLlmConfig};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Supported completion providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Gemini,
    OpenAi,
}

impl Provider {
    /// Environment variable holding the API key
    pub fn api_key_env(&self) -> &'static str {
        match self {
            Self::Gemini => "GEMINI_API_KEY",
            Self::OpenAi => "OPENAI_API_KEY",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::Gemini => "https://generativelanguage.googleapis.com/v1beta",
            Self::OpenAi => "https://api.openai.com/v1",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini-1.5-flash",
            Self::OpenAi => "gpt-4o-mini",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gemini => write!(f, "gemini"),
            Self::OpenAi => write!(f, "openai"),
        }
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(Self::Gemini),
            "openai" => Ok(Self::OpenAi),
            other => Err(format!(
                "Unsupported LLM provider: {}. Available: gemini, openai",
                other
            )),
        }
    }
}

/// Resolved configuration for one run
#[derive(Debug, Clone)]
pub struct NamesakeConfig {
    pub provider: Provider,
    pub llm: RemoteLlmConfig,
}

impl NamesakeConfig {
    /// Build a configuration with an explicit API key and provider defaults
    pub fn new(provider: Provider, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            llm: RemoteLlmConfig::new(api_key, provider.default_base_url(), provider.default_model()),
        }
    }

    /// Read the provider's default key variable from the environment
    pub fn from_env(provider: Provider) -> Result<Self> {
        Self::from_env_var(provider, provider.api_key_env())
    }

    /// Read the API key from `env_var`; missing or blank fails with [`NamesakeError::Config`]
    pub fn from_env_var(provider: Provider, env_var: &str) -> Result<Self> {
        let llm = RemoteLlmConfig::from_env(env_var, provider.default_base_url(), provider.default_model())
            .map_err(|e| match e {
                LlmError::ApiKeyNotFound(detail) => NamesakeError::Config(format!(
                    "{} API key not configured ({})",
                    provider, detail
                )),
                other => NamesakeError::Config(other.to_string()),
            })?;

        debug!(%provider, env_var, "Loaded API key");
        Ok(Self { provider, llm })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.llm.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.llm.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Bound each oracle call; without this a call waits for the provider
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.llm = self.llm.with_timeout(timeout);
        self
    }

    /// Model used for both oracle calls
    pub fn model(&self) -> &str {
        &self.llm.model
    }

    /// Construct the completion client for the configured provider
    pub fn build_model(&self) -> Result<Arc<dyn CompletionModel>> {
        info!(provider = %self.provider, model = %self.llm.model, "Creating completion client");

        let model: Arc<dyn CompletionModel> = match self.provider {
            Provider::Gemini => Arc::new(GeminiClient::new(self.llm.clone()).map_err(config_err)?),
            Provider::OpenAi => Arc::new(OpenAiClient::new(self.llm.clone()).map_err(config_err)?),
        };
        Ok(model)
    }
}

fn config_err(err: LlmError) -> NamesakeError {
    NamesakeError::Config(format!("Failed to create HTTP client: {}", err))
}

/// Load `KEY=value` pairs from an env file into the process environment.
///
/// Variables already set in the environment win. Returns `false` when the
/// file does not exist.
pub fn load_env_file(path: &Path) -> Result<bool> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!(path = %path.display(), "Loaded env file");
            Ok(true)
        }
        Err(e) if e.not_found() => {
            debug!(path = %path.display(), "No env file, using process environment");
            Ok(false)
        }
        Err(e) => Err(NamesakeError::Config(format!(
            "Failed to read env file {}: {}",
            path.display(),
            e
        ))),
    }
}
