//! Completion oracle clients for namesake.
//!
//! This crate defines the [`CompletionModel`] capability, a single
//! `complete(model, prompt) -> String` call, and implements it for remote
//! providers:
//!
//! - **Gemini** - Google's Gemini models (default)
//! - **OpenAI** - OpenAI and OpenAI-compatible servers
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use llm::remote::GeminiClient;
//! use llm::config::RemoteLlmConfig;
//! use llm::CompletionModel;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RemoteLlmConfig::from_env(
//!         "GEMINI_API_KEY",
//!         "https://generativelanguage.googleapis.com/v1beta",
//!         "gemini-1.5-flash"
//!     )?;
//!     let client = GeminiClient::new(config)?;
//!
//!     let answer = client.complete(client.default_model(), "What is Rust?").await?;
//!     println!("Response: {}", answer);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod traits;

#[cfg(feature = "remote")]
pub mod remote;

// Re-export commonly used types
pub use config::RemoteLlmConfig;
pub use error::{LlmError, Result};
pub use traits::CompletionModel;
