//! Result line formatting
//!
//! One output line per outcome, in the exact text the result file uses.

use gradebook_domain::{ExamKind, GradeReport, Outcome, Student};

/// Formats outcomes into result file lines (without the trailing newline)
pub struct LineFormatter;

impl LineFormatter {
    pub fn format(outcome: &Outcome) -> String {
        match outcome {
            Outcome::StudentAdded { id } => format!("Student: {} added", id),
            Outcome::StudentExists { id } => format!("Student: {} already exists", id),
            Outcome::InvalidStudentId => "Invalid student id".to_string(),
            Outcome::InvalidName => "Invalid name".to_string(),
            Outcome::InvalidFaculty => "Invalid faculty".to_string(),
            Outcome::StudentFound { student } | Outcome::StudentListed { student } => {
                Self::student(student)
            }
            Outcome::StudentDeleted { id } => format!("Student: {} deleted", id),
            Outcome::StudentNotFound => "Student not found".to_string(),

            Outcome::ExamAdded { id } => format!("Exam: {} added", id),
            Outcome::ExamExists { id } => format!("Exam: {} already exists", id),
            Outcome::ExamUpdated { id } => format!("Exam: {} updated", id),
            Outcome::InvalidExamId => "Invalid exam id".to_string(),
            Outcome::InvalidExamType => "Invalid exam type".to_string(),
            Outcome::InvalidDuration => "Invalid duration".to_string(),
            Outcome::InvalidSoftware => "Invalid software".to_string(),
            Outcome::ExamNotFound => "Exam not found".to_string(),

            Outcome::GradeAdded { student_id, score } => {
                format!("Grade {} added for the student: {}", score, student_id)
            }
            Outcome::GradeUpdated { student_id, score } => {
                format!("Grade {} updated for the student: {}", score, student_id)
            }
            Outcome::GradeFound(report) => Self::grade_report(report),
            Outcome::InvalidGrade => "Invalid grade".to_string(),
        }
    }

    /// The single based-sum line: the sum, or `Invalid inputs` when rejected
    pub fn based_sum(sum: Option<i64>) -> String {
        match sum {
            Some(sum) => sum.to_string(),
            None => "Invalid inputs".to_string(),
        }
    }

    fn student(student: &Student) -> String {
        format!(
            "ID: {}, Name: {}, Faculty: {}",
            student.id, student.name, student.faculty
        )
    }

    fn grade_report(report: &GradeReport) -> String {
        // A missing grade or exam renders as an empty record: 0 and WRITTEN 0
        let score = report.score.map_or(0, |s| s.get());
        let (exam_type, info) = match &report.exam {
            Some(ExamKind::Written { duration }) => ("WRITTEN", duration.to_string()),
            Some(ExamKind::Digital { software }) => ("DIGITAL", software.to_string()),
            None => ("WRITTEN", "0".to_string()),
        };
        format!(
            "Exam: {}, Student: {}, Name: {}, Grade: {}, Type: {}, Info: {}",
            report.exam_id, report.student_id, report.name, score, exam_type, info
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradebook_domain::{Duration, ExamId, Faculty, Name, Score, Software, StudentId};

    fn sid(raw: i64) -> StudentId {
        StudentId::new(raw).unwrap()
    }

    fn eid(raw: i64) -> ExamId {
        ExamId::new(raw).unwrap()
    }

    fn john() -> Student {
        Student::new(
            sid(1),
            Name::parse("John").unwrap(),
            Faculty::parse("Smith").unwrap(),
        )
    }

    #[test]
    fn test_student_lines() {
        assert_eq!(
            LineFormatter::format(&Outcome::StudentAdded { id: sid(1) }),
            "Student: 1 added"
        );
        assert_eq!(
            LineFormatter::format(&Outcome::StudentExists { id: sid(1) }),
            "Student: 1 already exists"
        );
        assert_eq!(
            LineFormatter::format(&Outcome::StudentFound { student: john() }),
            "ID: 1, Name: John, Faculty: Smith"
        );
        assert_eq!(
            LineFormatter::format(&Outcome::StudentDeleted { id: 1500 }),
            "Student: 1500 deleted"
        );
        assert_eq!(
            LineFormatter::format(&Outcome::InvalidFaculty),
            "Invalid faculty"
        );
    }

    #[test]
    fn test_exam_lines() {
        assert_eq!(
            LineFormatter::format(&Outcome::ExamAdded { id: eid(10) }),
            "Exam: 10 added"
        );
        assert_eq!(
            LineFormatter::format(&Outcome::ExamExists { id: eid(10) }),
            "Exam: 10 already exists"
        );
        assert_eq!(
            LineFormatter::format(&Outcome::ExamUpdated { id: eid(10) }),
            "Exam: 10 updated"
        );
        assert_eq!(
            LineFormatter::format(&Outcome::InvalidExamType),
            "Invalid exam type"
        );
    }

    #[test]
    fn test_grade_lines() {
        let score = Score::new(85).unwrap();
        assert_eq!(
            LineFormatter::format(&Outcome::GradeAdded {
                student_id: sid(1),
                score
            }),
            "Grade 85 added for the student: 1"
        );
        assert_eq!(
            LineFormatter::format(&Outcome::GradeUpdated {
                student_id: sid(1),
                score
            }),
            "Grade 85 updated for the student: 1"
        );
    }

    #[test]
    fn test_grade_report_lines() {
        let written = GradeReport {
            exam_id: eid(10),
            student_id: sid(1),
            name: Name::parse("John").unwrap(),
            score: Score::new(85),
            exam: Some(ExamKind::Written {
                duration: Duration::new(60).unwrap(),
            }),
        };
        assert_eq!(
            LineFormatter::format(&Outcome::GradeFound(written.clone())),
            "Exam: 10, Student: 1, Name: John, Grade: 85, Type: WRITTEN, Info: 60"
        );

        let digital = GradeReport {
            exam: Some(ExamKind::Digital {
                software: Software::parse("Python").unwrap(),
            }),
            ..written.clone()
        };
        assert_eq!(
            LineFormatter::format(&Outcome::GradeFound(digital)),
            "Exam: 10, Student: 1, Name: John, Grade: 85, Type: DIGITAL, Info: Python"
        );
    }

    #[test]
    fn test_empty_grade_report_renders_zeroes() {
        let report = GradeReport {
            exam_id: eid(7),
            student_id: sid(1),
            name: Name::parse("John").unwrap(),
            score: None,
            exam: None,
        };
        assert_eq!(
            LineFormatter::format(&Outcome::GradeFound(report)),
            "Exam: 7, Student: 1, Name: John, Grade: 0, Type: WRITTEN, Info: 0"
        );
    }

    #[test]
    fn test_based_sum_line() {
        assert_eq!(LineFormatter::based_sum(Some(25)), "25");
        assert_eq!(LineFormatter::based_sum(Some(-20)), "-20");
        assert_eq!(LineFormatter::based_sum(None), "Invalid inputs");
    }
}
