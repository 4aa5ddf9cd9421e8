//! ADD_GRADE, UPDATE_GRADE, SEARCH_GRADE

use super::{ArgReader, HandlerError};
use gradebook_domain::{EntityStore, ExamId, GradeReport, Outcome, Score, StudentId};

/// Shared checks for adding and updating a grade:
/// exam id range, exam exists, student id range, student exists, grade range.
fn validate_grade(
    args: &mut ArgReader<'_>,
    store: &EntityStore,
) -> Result<Result<(ExamId, StudentId, Score), Outcome>, HandlerError> {
    let raw_exam = args.integer()?;
    let raw_student = args.integer()?;
    let raw_score = args.integer()?;

    Ok(check_grade(store, raw_exam, raw_student, raw_score))
}

fn check_grade(
    store: &EntityStore,
    raw_exam: Option<i64>,
    raw_student: Option<i64>,
    raw_score: Option<i64>,
) -> Result<(ExamId, StudentId, Score), Outcome> {
    let exam_id = raw_exam.and_then(ExamId::new).ok_or(Outcome::InvalidExamId)?;
    if !store.has_exam(exam_id) {
        return Err(Outcome::ExamNotFound);
    }
    let student_id = raw_student
        .and_then(StudentId::new)
        .ok_or(Outcome::InvalidStudentId)?;
    if !store.has_student(student_id) {
        return Err(Outcome::StudentNotFound);
    }
    let score = raw_score.and_then(Score::new).ok_or(Outcome::InvalidGrade)?;
    Ok((exam_id, student_id, score))
}

/// `ADD_GRADE <exam_id> <student_id> <grade>`
pub(super) fn add(args: &mut ArgReader<'_>, store: &mut EntityStore) -> Result<Outcome, HandlerError> {
    Ok(match validate_grade(args, store)? {
        Ok((exam_id, student_id, score)) => {
            store.put_grade(exam_id, student_id, score);
            Outcome::GradeAdded { student_id, score }
        }
        Err(rejection) => rejection,
    })
}

/// `UPDATE_GRADE <exam_id> <student_id> <grade>`
pub(super) fn update(args: &mut ArgReader<'_>, store: &mut EntityStore) -> Result<Outcome, HandlerError> {
    Ok(match validate_grade(args, store)? {
        Ok((exam_id, student_id, score)) => {
            store.put_grade(exam_id, student_id, score);
            Outcome::GradeUpdated { student_id, score }
        }
        Err(rejection) => rejection,
    })
}

/// `SEARCH_GRADE <exam_id> <student_id>`
///
/// A missing exam is reported but does not end the search: the student
/// checks still run, and when they pass a report follows the
/// `ExamNotFound` outcome with no exam attached.
pub(super) fn search(args: &mut ArgReader<'_>, store: &EntityStore) -> Result<Vec<Outcome>, HandlerError> {
    let raw_exam = args.integer()?;
    let raw_student = args.integer()?;

    let Some(exam_id) = raw_exam.and_then(ExamId::new) else {
        return Ok(vec![Outcome::InvalidExamId]);
    };

    let mut outcomes = Vec::with_capacity(2);
    let exam = store.exam(exam_id).map(|exam| exam.kind.clone());
    if exam.is_none() {
        outcomes.push(Outcome::ExamNotFound);
    }

    let Some(student_id) = raw_student.and_then(StudentId::new) else {
        outcomes.push(Outcome::InvalidStudentId);
        return Ok(outcomes);
    };
    let Some(student) = store.student(student_id) else {
        outcomes.push(Outcome::StudentNotFound);
        return Ok(outcomes);
    };

    outcomes.push(Outcome::GradeFound(GradeReport {
        exam_id,
        student_id,
        name: student.name.clone(),
        score: store.grade(exam_id, student_id),
        exam,
    }));
    Ok(outcomes)
}
