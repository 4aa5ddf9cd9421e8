//! Command outcomes (Result Records)
//!
//! Every handled command produces one or more [`Outcome`]s. Each outcome
//! carries exactly the fields needed to render one output line; rendering
//! itself belongs to the presentation layer.

use crate::core::ids::{ExamId, StudentId};
use crate::registry::entities::{ExamKind, Student};
use crate::registry::value_objects::{Name, Score};
use serde::Serialize;

/// Snapshot produced by a successful grade search.
///
/// `score` and `exam` are optional: a grade search reports a missing exam but
/// keeps going, and a pair with no recorded grade still produces a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeReport {
    pub exam_id: ExamId,
    pub student_id: StudentId,
    pub name: Name,
    pub score: Option<Score>,
    pub exam: Option<ExamKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    // Students
    StudentAdded { id: StudentId },
    StudentExists { id: StudentId },
    InvalidStudentId,
    InvalidName,
    InvalidFaculty,
    StudentFound { student: Student },
    StudentListed { student: Student },
    /// Carries the raw id: deletion performs no range check
    StudentDeleted { id: i64 },
    StudentNotFound,

    // Exams
    ExamAdded { id: ExamId },
    ExamExists { id: ExamId },
    ExamUpdated { id: ExamId },
    InvalidExamId,
    InvalidExamType,
    InvalidDuration,
    InvalidSoftware,
    ExamNotFound,

    // Grades
    GradeAdded { student_id: StudentId, score: Score },
    GradeUpdated { student_id: StudentId, score: Score },
    GradeFound(GradeReport),
    InvalidGrade,
}

impl Outcome {
    /// Whether this outcome reports a completed operation rather than a
    /// validation failure
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Outcome::StudentAdded { .. }
                | Outcome::StudentFound { .. }
                | Outcome::StudentListed { .. }
                | Outcome::StudentDeleted { .. }
                | Outcome::ExamAdded { .. }
                | Outcome::ExamUpdated { .. }
                | Outcome::GradeAdded { .. }
                | Outcome::GradeUpdated { .. }
                | Outcome::GradeFound(_)
        )
    }

    /// Stable snake_case identifier, matching the serialized `kind` tag
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::StudentAdded { .. } => "student_added",
            Outcome::StudentExists { .. } => "student_exists",
            Outcome::InvalidStudentId => "invalid_student_id",
            Outcome::InvalidName => "invalid_name",
            Outcome::InvalidFaculty => "invalid_faculty",
            Outcome::StudentFound { .. } => "student_found",
            Outcome::StudentListed { .. } => "student_listed",
            Outcome::StudentDeleted { .. } => "student_deleted",
            Outcome::StudentNotFound => "student_not_found",
            Outcome::ExamAdded { .. } => "exam_added",
            Outcome::ExamExists { .. } => "exam_exists",
            Outcome::ExamUpdated { .. } => "exam_updated",
            Outcome::InvalidExamId => "invalid_exam_id",
            Outcome::InvalidExamType => "invalid_exam_type",
            Outcome::InvalidDuration => "invalid_duration",
            Outcome::InvalidSoftware => "invalid_software",
            Outcome::ExamNotFound => "exam_not_found",
            Outcome::GradeAdded { .. } => "grade_added",
            Outcome::GradeUpdated { .. } => "grade_updated",
            Outcome::GradeFound(_) => "grade_found",
            Outcome::InvalidGrade => "invalid_grade",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_classification() {
        let id = StudentId::new(1).unwrap();
        assert!(Outcome::StudentAdded { id }.is_success());
        assert!(Outcome::StudentDeleted { id: -4 }.is_success());
        assert!(!Outcome::StudentExists { id }.is_success());
        assert!(!Outcome::ExamNotFound.is_success());
        assert!(!Outcome::InvalidGrade.is_success());
    }

    #[test]
    fn test_kind_matches_serde_tag() {
        let outcomes = [
            Outcome::StudentAdded {
                id: StudentId::new(3).unwrap(),
            },
            Outcome::InvalidExamType,
            Outcome::GradeUpdated {
                student_id: StudentId::new(3).unwrap(),
                score: Score::new(88).unwrap(),
            },
            Outcome::StudentDeleted { id: 12 },
        ];
        for outcome in outcomes {
            let json = serde_json::to_value(&outcome).unwrap();
            assert_eq!(json["kind"], outcome.kind());
        }
    }
}
