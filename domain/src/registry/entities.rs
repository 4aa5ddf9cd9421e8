//! Registry entities: students and exams.

use super::value_objects::{Duration, ExamType, Faculty, Name, Software};
use crate::core::ids::{ExamId, StudentId};
use serde::Serialize;

/// A registered student (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: StudentId,
    pub name: Name,
    pub faculty: Faculty,
}

impl Student {
    pub fn new(id: StudentId, name: Name, faculty: Faculty) -> Self {
        Self { id, name, faculty }
    }
}

/// Type-specific exam payload
///
/// Exactly one payload exists per exam; the variant is the exam type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum ExamKind {
    Written { duration: Duration },
    Digital { software: Software },
}

impl ExamKind {
    pub fn exam_type(&self) -> ExamType {
        match self {
            ExamKind::Written { .. } => ExamType::Written,
            ExamKind::Digital { .. } => ExamType::Digital,
        }
    }
}

/// A registered exam (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exam {
    pub id: ExamId,
    pub kind: ExamKind,
}

impl Exam {
    pub fn new(id: ExamId, kind: ExamKind) -> Self {
        Self { id, kind }
    }

    pub fn exam_type(&self) -> ExamType {
        self.kind.exam_type()
    }
}
