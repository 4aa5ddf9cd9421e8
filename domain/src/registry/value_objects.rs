//! Value objects for registry records.
//!
//! Every constructor returns `None` when its validation rule fails, so a
//! record can only ever be assembled from valid fields.

use crate::core::error::DomainError;
use crate::core::validation::is_letters_within;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Student name: 2 to 19 ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Name(String);

impl Name {
    pub const MIN_LEN: usize = 2;
    pub const MAX_LEN: usize = 19;

    pub fn parse(s: &str) -> Option<Self> {
        is_letters_within(s, Self::MIN_LEN, Self::MAX_LEN).then(|| Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Faculty name: 5 to 29 ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faculty(String);

impl Faculty {
    pub const MIN_LEN: usize = 5;
    pub const MAX_LEN: usize = 29;

    pub fn parse(s: &str) -> Option<Self> {
        is_letters_within(s, Self::MIN_LEN, Self::MAX_LEN).then(|| Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Software used by a digital exam: 3 to 19 ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Software(String);

impl Software {
    pub const MIN_LEN: usize = 3;
    pub const MAX_LEN: usize = 19;

    pub fn parse(s: &str) -> Option<Self> {
        is_letters_within(s, Self::MIN_LEN, Self::MAX_LEN).then(|| Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Written exam duration in minutes, `40..=180`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Duration(u16);

impl Duration {
    pub const MIN: i64 = 40;
    pub const MAX: i64 = 180;

    pub fn new(minutes: i64) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&minutes)
            .then(|| Self(minutes as u16))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }
}

/// Grade value, `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score(u8);

impl Score {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 100;

    pub fn new(raw: i64) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&raw)
            .then(|| Self(raw as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

macro_rules! display_inner {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        })*
    };
}

display_inner!(Name, Faculty, Software, Duration, Score);

/// Exam type token as it appears in commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExamType {
    Written,
    Digital,
}

impl ExamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExamType::Written => "WRITTEN",
            ExamType::Digital => "DIGITAL",
        }
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExamType {
    type Err = DomainError;

    /// Case-sensitive: only `WRITTEN` and `DIGITAL` are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WRITTEN" => Ok(ExamType::Written),
            "DIGITAL" => Ok(ExamType::Digital),
            other => Err(DomainError::UnknownExamType(other.to_string())),
        }
    }
}
