//! Error types for namesake.
//!
//! Every variant is fatal to a run. A classification answer that is neither
//! `found` nor `not_found` is not an error; it routes to the apology branch.

use llm::LlmError;
use thiserror::Error;

/// Result type alias for namesake operations
pub type Result<T> = std::result::Result<T, NamesakeError>;

/// Main error type for namesake operations
#[derive(Debug, Error)]
pub enum NamesakeError {
    /// Console input unavailable (end of input or I/O failure)
    #[error("Input error: {0}")]
    Input(String),

    /// Missing credential or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The completion oracle call failed; details live in `source()`
    #[error("Oracle error")]
    Oracle(#[from] LlmError),
}

impl NamesakeError {
    /// Short kind name, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Input(_) => "input",
            Self::Config(_) => "config",
            Self::Oracle(_) => "oracle",
        }
    }
}
