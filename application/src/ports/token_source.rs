//! Token source port
//!
//! Commands and their arguments arrive as whitespace-separated tokens,
//! consumed strictly left to right.

use std::collections::VecDeque;
use thiserror::Error;

/// Errors raised while pulling tokens from the input
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// A stream of input tokens
///
/// Implementations live in the infrastructure layer (files, readers).
pub trait TokenSource {
    /// Next token, or `None` at end of stream
    fn next_token(&mut self) -> Result<Option<String>, SourceError>;
}

/// In-memory token source over a prepared text
#[derive(Debug, Default)]
pub struct MemoryTokenSource {
    tokens: VecDeque<String>,
}

impl MemoryTokenSource {
    pub fn from_text(text: &str) -> Self {
        Self {
            tokens: text.split_whitespace().map(str::to_string).collect(),
        }
    }
}

impl TokenSource for MemoryTokenSource {
    fn next_token(&mut self) -> Result<Option<String>, SourceError> {
        Ok(self.tokens.pop_front())
    }
}
