//! # namesake
//!
//! Asks the user for a name, asks a language model whether it knows what the
//! name means, then either returns the model's explanation or a fixed apology.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use namesake::{LlmOracle, NameSequencer, NamesakeConfig, Provider};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = NamesakeConfig::from_env(Provider::Gemini)?;
//! let oracle = Arc::new(LlmOracle::new(config.build_model()?, config.model()));
//!
//! let mut sequencer = NameSequencer::new(
//!     std::io::stdin().lock(),
//!     std::io::stdout(),
//!     oracle.clone(),
//!     oracle,
//! );
//! let outcome = sequencer.run().await?;
//! println!("Final Result: {}", outcome.result);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod oracle;
pub mod sequencer;

mod error;

pub use config::{load_env_file, NamesakeConfig, Provider};
pub use error::{NamesakeError, Result};
pub use oracle::{BranchLabel, Classifier, Explainer, LlmOracle};
pub use sequencer::{FlowOutcome, FlowState, NameSequencer, Session, Stage};
