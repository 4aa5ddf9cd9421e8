//! Run Based Sum use case
//!
//! Reads `N`, then `N` digit strings, then `N` bases from a token source and
//! computes the mixed-base checksum.

use crate::ports::token_source::{SourceError, TokenSource};
use gradebook_domain::{BasedSumError, BasedSumInput};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum RunBasedSumError {
    /// The input itself is invalid; reported as a result, not a failure
    #[error(transparent)]
    Rejected(#[from] BasedSumError),

    #[error(transparent)]
    Source(#[from] SourceError),
}

#[derive(Debug, Default)]
pub struct RunBasedSumUseCase;

impl RunBasedSumUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, source: &mut dyn TokenSource) -> Result<i64, RunBasedSumError> {
        let count_token = source
            .next_token()?
            .ok_or_else(|| BasedSumError::InvalidCount(String::new()))?;
        let count = BasedSumInput::parse_count(&count_token)?;
        debug!(count, "Reading based-sum entries");

        let numbers = read_tokens(source, count)?;
        let bases = read_tokens(source, count)?;
        let sum = BasedSumInput::new(numbers, bases)?.sum()?;

        info!(count, sum, "Based sum computed");
        Ok(sum)
    }
}

fn read_tokens(source: &mut dyn TokenSource, count: usize) -> Result<Vec<String>, RunBasedSumError> {
    let mut tokens = Vec::with_capacity(count);
    for _ in 0..count {
        match source.next_token()? {
            Some(token) => tokens.push(token),
            None => return Err(BasedSumError::MissingTokens { expected: count }.into()),
        }
    }
    Ok(tokens)
}
