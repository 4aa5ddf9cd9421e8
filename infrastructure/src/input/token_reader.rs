//! Whitespace token reader over any buffered reader.
//!
//! Lines are pulled lazily, one at a time, so a command stream is consumed
//! only as far as the dispatcher asks for it. Tokens are split on raw bytes;
//! a token that is not valid UTF-8 is decoded lossily, so it fails whatever
//! field check it reaches instead of ending the run.

use gradebook_application::{SourceError, TokenSource};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Errors raised while opening an input file
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Could not open input file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Splits a reader into whitespace-separated tokens
pub struct WhitespaceTokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
    line: usize,
    exhausted: bool,
}

impl<R: BufRead> WhitespaceTokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: 0,
            exhausted: false,
        }
    }

    /// Number of lines read so far
    pub fn lines_read(&self) -> usize {
        self.line
    }

    fn fill(&mut self) -> Result<(), SourceError> {
        let mut buf = Vec::new();
        while self.pending.is_empty() && !self.exhausted {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                self.exhausted = true;
                break;
            }
            self.line += 1;
            for raw in buf.split(|&b| is_separator(b)).filter(|t| !t.is_empty()) {
                let token = String::from_utf8_lossy(raw);
                if let std::borrow::Cow::Owned(_) = token {
                    warn!(line = self.lines_read(), "Input token is not valid UTF-8");
                }
                self.pending.push_back(token.into_owned());
            }
        }
        Ok(())
    }
}

/// ASCII whitespace, including vertical tab
fn is_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0b
}

impl WhitespaceTokenReader<BufReader<File>> {
    /// Open a file for token reading
    pub fn open(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TokenSource for WhitespaceTokenReader<R> {
    fn next_token(&mut self) -> Result<Option<String>, SourceError> {
        if self.pending.is_empty() {
            self.fill()?;
        }
        Ok(self.pending.pop_front())
    }
}
