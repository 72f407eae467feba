//! Classification and explanation capabilities.
//!
//! The sequencer only sees [`Classifier`] and [`Explainer`]. [`LlmOracle`]
//! implements both on top of any [`CompletionModel`]; tests plug in stubs.

use crate::error::{NamesakeError, Result};
use async_trait::async_trait;
use llm::CompletionModel;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Discrete output of the classification step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchLabel {
    Found,
    NotFound,
}

impl BranchLabel {
    /// Route an oracle answer.
    ///
    /// Only `found` (after trimming, ignoring case) is `Found`. Everything
    /// else, including `not_found`, empty text and prose, is `NotFound`.
    pub fn from_answer(answer: &str) -> Self {
        if answer.trim().to_lowercase() == "found" {
            Self::Found
        } else {
            Self::NotFound
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Found => "found",
            Self::NotFound => "not_found",
        }
    }
}

impl fmt::Display for BranchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides whether a name's meaning is known
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, user_name: &str) -> Result<BranchLabel>;
}

/// Produces a free-text explanation of a name's meaning
#[async_trait]
pub trait Explainer: Send + Sync {
    async fn explain(&self, user_name: &str) -> Result<String>;
}

pub fn classification_prompt(user_name: &str) -> String {
    format!(
        "Do you know the meaning of the name '{}'? If yes, return 'found'. If not, return 'not_found'.",
        user_name
    )
}

pub fn explanation_prompt(user_name: &str) -> String {
    format!("Tell me the meaning of the name '{}'.", user_name)
}

/// Both capabilities backed by one completion model
#[derive(Clone)]
pub struct LlmOracle {
    model: Arc<dyn CompletionModel>,
    model_name: String,
}

impl LlmOracle {
    pub fn new(model: Arc<dyn CompletionModel>, model_name: impl Into<String>) -> Self {
        Self {
            model,
            model_name: model_name.into(),
        }
    }

    /// Use the client's configured model
    pub fn with_default_model(model: Arc<dyn CompletionModel>) -> Self {
        let model_name = model.default_model().to_string();
        Self::new(model, model_name)
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

impl fmt::Debug for LlmOracle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmOracle")
            .field("provider", &self.model.provider_name())
            .field("model_name", &self.model_name)
            .finish()
    }
}

#[async_trait]
impl Classifier for LlmOracle {
    async fn classify(&self, user_name: &str) -> Result<BranchLabel> {
        let prompt = classification_prompt(user_name);
        debug!(%prompt, model = %self.model_name, "Classification prompt");

        match self.model.complete(&self.model_name, &prompt).await {
            Ok(answer) => {
                let label = BranchLabel::from_answer(&answer);
                if label == BranchLabel::NotFound && answer.trim().to_lowercase() != "not_found" {
                    warn!(%answer, "Unexpected classification answer, treating as not_found");
                } else {
                    debug!(%answer, %label, "Classification answer");
                }
                Ok(label)
            }
            Err(e) if e.is_malformed_response() => {
                warn!(error = %e, "Unusable classification response, treating as not_found");
                Ok(BranchLabel::NotFound)
            }
            Err(e) => Err(NamesakeError::Oracle(e)),
        }
    }
}

#[async_trait]
impl Explainer for LlmOracle {
    async fn explain(&self, user_name: &str) -> Result<String> {
        let prompt = explanation_prompt(user_name);
        debug!(%prompt, model = %self.model_name, "Explanation prompt");

        let meaning = self.model.complete(&self.model_name, &prompt).await?;
        debug!(chars = meaning.len(), "Explanation received");
        Ok(meaning)
    }
}
