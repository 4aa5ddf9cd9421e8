//! In-memory entity store.
//!
//! Holds every student, exam and grade for the lifetime of one run. Lookups
//! return `Option`; there is no capacity limit beyond the identifier ranges.
//!
//! Listing order is tracked separately from the student map: a student id is
//! appended when the student is stored and removed (closing the gap) when the
//! student is removed, so [`EntityStore::students_in_order`] always yields the
//! present students in insertion order.

use super::entities::{Exam, Student};
use super::value_objects::Score;
use crate::core::ids::{ExamId, StudentId};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct EntityStore {
    students: HashMap<StudentId, Student>,
    student_order: Vec<StudentId>,
    exams: HashMap<ExamId, Exam>,
    grades: HashMap<(ExamId, StudentId), Score>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Students ====================

    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.get(&id)
    }

    pub fn has_student(&self, id: StudentId) -> bool {
        self.students.contains_key(&id)
    }

    /// Store a student, appending its id to the listing order.
    ///
    /// Replacing an existing student keeps its original listing position.
    pub fn put_student(&mut self, student: Student) {
        let id = student.id;
        if self.students.insert(id, student).is_none() {
            self.student_order.push(id);
        }
    }

    /// Remove a student and its listing position. Grades are left untouched;
    /// see [`EntityStore::clear_grades_for_student`].
    pub fn remove_student(&mut self, id: StudentId) -> Option<Student> {
        let removed = self.students.remove(&id);
        if removed.is_some() {
            self.student_order.retain(|&present| present != id);
        }
        removed
    }

    pub fn students_in_order(&self) -> impl Iterator<Item = &Student> + '_ {
        self.student_order
            .iter()
            .filter_map(|id| self.students.get(id))
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    // ==================== Exams ====================

    pub fn exam(&self, id: ExamId) -> Option<&Exam> {
        self.exams.get(&id)
    }

    pub fn has_exam(&self, id: ExamId) -> bool {
        self.exams.contains_key(&id)
    }

    /// Store an exam, replacing any previous exam with the same id
    pub fn put_exam(&mut self, exam: Exam) -> Option<Exam> {
        self.exams.insert(exam.id, exam)
    }

    /// Remove an exam. Grades recorded for it are kept.
    pub fn remove_exam(&mut self, id: ExamId) -> Option<Exam> {
        self.exams.remove(&id)
    }

    pub fn exam_count(&self) -> usize {
        self.exams.len()
    }

    // ==================== Grades ====================

    pub fn grade(&self, exam_id: ExamId, student_id: StudentId) -> Option<Score> {
        self.grades.get(&(exam_id, student_id)).copied()
    }

    /// Store a grade, overwriting any previous grade for the same pair
    pub fn put_grade(
        &mut self,
        exam_id: ExamId,
        student_id: StudentId,
        score: Score,
    ) -> Option<Score> {
        self.grades.insert((exam_id, student_id), score)
    }

    /// Remove every grade of a student across all exams, returning how many
    /// were removed
    pub fn clear_grades_for_student(&mut self, student_id: StudentId) -> usize {
        let before = self.grades.len();
        self.grades.retain(|&(_, sid), _| sid != student_id);
        before - self.grades.len()
    }

    pub fn grade_count(&self) -> usize {
        self.grades.len()
    }
}
