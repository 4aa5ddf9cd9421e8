//! Outcome sink port
//!
//! Receives every [`Outcome`] in the order commands produce them.
//! Implementations live in the presentation layer and decide how an
//! outcome is rendered (text lines, JSON, ...).

use gradebook_domain::Outcome;
use thiserror::Error;

/// Errors raised while delivering an outcome
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub trait OutcomeSink {
    fn emit(&mut self, outcome: &Outcome) -> Result<(), SinkError>;
}

/// Sink that keeps every outcome in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    outcomes: Vec<Outcome>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn into_outcomes(self) -> Vec<Outcome> {
        self.outcomes
    }
}

impl OutcomeSink for CollectingSink {
    fn emit(&mut self, outcome: &Outcome) -> Result<(), SinkError> {
        self.outcomes.push(outcome.clone());
        Ok(())
    }
}
