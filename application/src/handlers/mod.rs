//! Command handlers
//!
//! One handler per command. A handler reads its own fixed argument list from
//! the token source, validates in a fixed order (first failure wins), mutates
//! the store only when every check passed, and returns the outcomes to report.

mod exam;
mod grade;
mod student;

use crate::ports::token_source::{SourceError, TokenSource};
use gradebook_domain::{CommandName, DomainError, EntityStore, Outcome, parse_integer};
use thiserror::Error;
use tracing::debug;

/// Errors that stop a command before it produces any outcome
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("{command} ended before all of its arguments were read")]
    Truncated { command: CommandName },

    #[error("{command} skipped: {error}")]
    Malformed {
        command: CommandName,
        #[source]
        error: DomainError,
    },

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Reads the arguments of one command from the shared token source
pub struct ArgReader<'a> {
    command: CommandName,
    source: &'a mut dyn TokenSource,
}

impl<'a> ArgReader<'a> {
    pub fn new(command: CommandName, source: &'a mut dyn TokenSource) -> Self {
        Self { command, source }
    }

    pub fn command(&self) -> CommandName {
        self.command
    }

    /// Next argument; end of stream inside an argument list is an error
    pub fn token(&mut self) -> Result<String, HandlerError> {
        self.source
            .next_token()?
            .ok_or(HandlerError::Truncated {
                command: self.command,
            })
    }

    /// Next argument as an integer.
    ///
    /// A malformed token yields `None`, which every range check rejects.
    pub fn integer(&mut self) -> Result<Option<i64>, HandlerError> {
        let token = self.token()?;
        match parse_integer(&token) {
            Ok(value) => Ok(Some(value)),
            Err(error) => {
                debug!(command = %self.command, %error, "Malformed integer argument");
                Ok(None)
            }
        }
    }

    /// Next argument as an integer, with no fallback
    pub fn strict_integer(&mut self) -> Result<i64, HandlerError> {
        let token = self.token()?;
        parse_integer(&token).map_err(|error| HandlerError::Malformed {
            command: self.command,
            error,
        })
    }

    /// Discard the next token, if there is one
    pub fn skip(&mut self) -> Result<(), HandlerError> {
        self.source.next_token()?;
        Ok(())
    }
}

/// Run the handler for `command`
pub fn handle(
    command: CommandName,
    args: &mut ArgReader<'_>,
    store: &mut EntityStore,
) -> Result<Vec<Outcome>, HandlerError> {
    match command {
        CommandName::AddStudent => student::add(args, store).map(|o| vec![o]),
        CommandName::SearchStudent => student::search(args, store).map(|o| vec![o]),
        CommandName::DeleteStudent => student::delete(args, store).map(|o| vec![o]),
        CommandName::ListAllStudents => Ok(student::list_all(store)),
        CommandName::AddExam => exam::add(args, store).map(|o| vec![o]),
        CommandName::UpdateExam => exam::update(args, store).map(|o| vec![o]),
        CommandName::AddGrade => grade::add(args, store).map(|o| vec![o]),
        CommandName::UpdateGrade => grade::update(args, store).map(|o| vec![o]),
        CommandName::SearchGrade => grade::search(args, store),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::ports::token_source::MemoryTokenSource;

    /// Run one command whose arguments are given as text
    pub fn run(store: &mut EntityStore, command: CommandName, args: &str) -> Vec<Outcome> {
        try_run(store, command, args).unwrap()
    }

    pub fn try_run(
        store: &mut EntityStore,
        command: CommandName,
        args: &str,
    ) -> Result<Vec<Outcome>, HandlerError> {
        let mut source = MemoryTokenSource::from_text(args);
        let mut reader = ArgReader::new(command, &mut source);
        handle(command, &mut reader, store)
    }
}
