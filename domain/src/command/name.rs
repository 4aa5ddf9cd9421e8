//! Command names recognised by the record-store interpreter

use crate::core::error::DomainError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Token that ends processing before the end of the stream
pub const END_OF_INPUT: &str = "END";

/// A command understood by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandName {
    AddStudent,
    AddExam,
    UpdateExam,
    AddGrade,
    UpdateGrade,
    SearchStudent,
    SearchGrade,
    DeleteStudent,
    ListAllStudents,
}

impl CommandName {
    pub const ALL: [CommandName; 9] = [
        CommandName::AddStudent,
        CommandName::AddExam,
        CommandName::UpdateExam,
        CommandName::AddGrade,
        CommandName::UpdateGrade,
        CommandName::SearchStudent,
        CommandName::SearchGrade,
        CommandName::DeleteStudent,
        CommandName::ListAllStudents,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandName::AddStudent => "ADD_STUDENT",
            CommandName::AddExam => "ADD_EXAM",
            CommandName::UpdateExam => "UPDATE_EXAM",
            CommandName::AddGrade => "ADD_GRADE",
            CommandName::UpdateGrade => "UPDATE_GRADE",
            CommandName::SearchStudent => "SEARCH_STUDENT",
            CommandName::SearchGrade => "SEARCH_GRADE",
            CommandName::DeleteStudent => "DELETE_STUDENT",
            CommandName::ListAllStudents => "LIST_ALL_STUDENTS",
        }
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| DomainError::UnknownCommand(s.to_string()))
    }
}
