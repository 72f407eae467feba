//! Naming-lookup state machine.
//!
//! ```text
//!                              ┌─ found ─────→ Explaining ──┐
//! AwaitingName → Classifying ──┤                            ├─→ Done
//!                              └─ not_found ─→ Apologizing ─┘
//! ```
//!
//! [`NameSequencer::step`] performs exactly one transition and
//! [`NameSequencer::run`] drives it from `AwaitingName` to `Done`. Each step
//! finishes before the next starts. Errors end the run; nothing is retried.

use crate::error::{NamesakeError, Result};
use crate::oracle::{BranchLabel, Classifier, Explainer};
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{debug, info};

pub const NAME_PROMPT: &str = "Enter your name...";

/// Mutable state of a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_name: String,
    pub name_meaning: Option<String>,
}

impl Session {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            name_meaning: None,
        }
    }
}

/// Position of the machine, without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    AwaitingName,
    Classifying,
    Explaining,
    Apologizing,
    Done,
}

/// Machine state with the data each state owns.
///
/// Every state after `AwaitingName` carries the session, so no step can read
/// a user name that was never collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    AwaitingName,
    Classifying(Session),
    Explaining(Session),
    Apologizing(Session),
    Done {
        session: Session,
        branch: BranchLabel,
        result: String,
    },
}

impl Stage {
    pub fn state(&self) -> FlowState {
        match self {
            Self::AwaitingName => FlowState::AwaitingName,
            Self::Classifying(_) => FlowState::Classifying,
            Self::Explaining(_) => FlowState::Explaining,
            Self::Apologizing(_) => FlowState::Apologizing,
            Self::Done { .. } => FlowState::Done,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done { .. })
    }
}

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowOutcome {
    pub result: String,
    pub branch: BranchLabel,
    pub session: Session,
    /// States visited, in order, from `AwaitingName` to `Done`
    pub trace: Vec<FlowState>,
}

pub fn apology(user_name: &str) -> String {
    format!("Sorry, I couldn't find the meaning of the name '{}'.", user_name)
}

/// Runs the collect → classify → explain/apologize sequence
pub struct NameSequencer<R, W> {
    input: R,
    output: W,
    classifier: Arc<dyn Classifier>,
    explainer: Arc<dyn Explainer>,
}

impl<R: BufRead, W: Write> NameSequencer<R, W> {
    pub fn new(
        input: R,
        output: W,
        classifier: Arc<dyn Classifier>,
        explainer: Arc<dyn Explainer>,
    ) -> Self {
        Self {
            input,
            output,
            classifier,
            explainer,
        }
    }

    /// Write the prompt line and read one line of input.
    ///
    /// Only the line terminator is stripped; an empty name is accepted.
    pub fn collect_name(&mut self) -> Result<Session> {
        info!("Asking user for name");
        writeln!(self.output, "{}", NAME_PROMPT)
            .and_then(|_| self.output.flush())
            .map_err(|e| NamesakeError::Input(format!("failed to write prompt: {}", e)))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| NamesakeError::Input(format!("failed to read name: {}", e)))?;
        if read == 0 {
            return Err(NamesakeError::Input("end of input before a name was entered".to_string()));
        }

        let name = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(line.as_str());
        debug!(user_name = %name, "Name collected");
        Ok(Session::new(name))
    }

    pub async fn classify(&self, user_name: &str) -> Result<BranchLabel> {
        info!(%user_name, "Checking whether the name's meaning is known");
        self.classifier.classify(user_name).await
    }

    /// Ask for the explanation and record it on the session
    pub async fn explain(&self, session: &mut Session) -> Result<String> {
        info!(user_name = %session.user_name, "Fetching meaning of name");
        let meaning = self.explainer.explain(&session.user_name).await?;
        session.name_meaning = Some(meaning.clone());
        Ok(meaning)
    }

    pub fn apologize(&self, session: &Session) -> String {
        info!(user_name = %session.user_name, "Name not found");
        apology(&session.user_name)
    }

    /// Advance by exactly one transition. `Done` maps to itself.
    pub async fn step(&mut self, stage: Stage) -> Result<Stage> {
        let next = match stage {
            Stage::AwaitingName => Stage::Classifying(self.collect_name()?),
            Stage::Classifying(session) => match self.classify(&session.user_name).await? {
                BranchLabel::Found => Stage::Explaining(session),
                BranchLabel::NotFound => Stage::Apologizing(session),
            },
            Stage::Explaining(mut session) => {
                let result = self.explain(&mut session).await?;
                Stage::Done {
                    session,
                    branch: BranchLabel::Found,
                    result,
                }
            }
            Stage::Apologizing(session) => {
                let result = self.apologize(&session);
                Stage::Done {
                    session,
                    branch: BranchLabel::NotFound,
                    result,
                }
            }
            done @ Stage::Done { .. } => done,
        };

        debug!(state = ?next.state(), "Transition");
        Ok(next)
    }

    /// Drive the machine from `AwaitingName` until `Done`
    pub async fn run(&mut self) -> Result<FlowOutcome> {
        let mut stage = Stage::AwaitingName;
        let mut trace = vec![stage.state()];

        loop {
            match stage {
                Stage::Done {
                    session,
                    branch,
                    result,
                } => {
                    info!(%branch, "Run complete");
                    return Ok(FlowOutcome {
                        result,
                        branch,
                        session,
                        trace,
                    });
                }
                pending => {
                    stage = self.step(pending).await?;
                    trace.push(stage.state());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::io::Cursor;

    struct Fixed(BranchLabel);

    #[async_trait]
    impl Classifier for Fixed {
        async fn classify(&self, _user_name: &str) -> Result<BranchLabel> {
            Ok(self.0)
        }
    }

    #[async_trait]
    impl Explainer for Fixed {
        async fn explain(&self, user_name: &str) -> Result<String> {
            Ok(format!("{} means something", user_name))
        }
    }

    fn sequencer(input: &str, label: BranchLabel) -> NameSequencer<Cursor<Vec<u8>>, Vec<u8>> {
        let oracle = Arc::new(Fixed(label));
        NameSequencer::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            oracle.clone(),
            oracle,
        )
    }

    #[test]
    fn test_collect_name_strips_only_terminator() {
        let mut seq = sequencer("  Ada Lovelace \r\nignored\n", BranchLabel::Found);

        let session = seq.collect_name().unwrap();

        assert_eq!(session.user_name, "  Ada Lovelace ");
        assert_eq!(String::from_utf8(seq.output.clone()).unwrap(), "Enter your name...\n");
    }

    #[test]
    fn test_collect_name_accepts_empty_line_and_missing_newline() {
        assert_eq!(sequencer("\n", BranchLabel::Found).collect_name().unwrap().user_name, "");
        assert_eq!(sequencer("Ada", BranchLabel::Found).collect_name().unwrap().user_name, "Ada");
    }

    #[test]
    fn test_collect_name_eof_is_input_error() {
        let err = sequencer("", BranchLabel::Found).collect_name().unwrap_err();
        assert!(matches!(err, NamesakeError::Input(_)));
    }

    #[tokio::test]
    async fn test_step_by_step() {
        let mut seq = sequencer("Ada\n", BranchLabel::Found);

        let stage = seq.step(Stage::AwaitingName).await.unwrap();
        assert_eq!(stage, Stage::Classifying(Session::new("Ada")));

        let stage = seq.step(stage).await.unwrap();
        assert_eq!(stage.state(), FlowState::Explaining);

        let stage = seq.step(stage).await.unwrap();
        let Stage::Done { session, branch, result } = stage.clone() else {
            panic!("expected Done, got {:?}", stage);
        };
        assert_eq!(branch, BranchLabel::Found);
        assert_eq!(result, "Ada means something");
        assert_eq!(session.name_meaning.as_deref(), Some("Ada means something"));

        // Done is a fixed point
        assert_eq!(seq.step(stage.clone()).await.unwrap(), stage);
    }

    #[test]
    fn test_apology_text() {
        assert_eq!(apology("Xqzty"), "Sorry, I couldn't find the meaning of the name 'Xqzty'.");
    }
}
