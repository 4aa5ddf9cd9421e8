//! ADD_STUDENT, SEARCH_STUDENT, DELETE_STUDENT, LIST_ALL_STUDENTS

use super::{ArgReader, HandlerError};
use gradebook_domain::{EntityStore, Faculty, Name, Outcome, Student, StudentId};
use tracing::debug;

/// `ADD_STUDENT <id> <name> <faculty>`
pub(super) fn add(args: &mut ArgReader<'_>, store: &mut EntityStore) -> Result<Outcome, HandlerError> {
    let raw_id = args.integer()?;
    let name = args.token()?;
    let faculty = args.token()?;

    let Some(id) = raw_id.and_then(StudentId::new) else {
        return Ok(Outcome::InvalidStudentId);
    };
    if store.has_student(id) {
        return Ok(Outcome::StudentExists { id });
    }
    let Some(name) = Name::parse(&name) else {
        return Ok(Outcome::InvalidName);
    };
    let Some(faculty) = Faculty::parse(&faculty) else {
        return Ok(Outcome::InvalidFaculty);
    };

    store.put_student(Student::new(id, name, faculty));
    Ok(Outcome::StudentAdded { id })
}

/// `SEARCH_STUDENT <id>`
pub(super) fn search(args: &mut ArgReader<'_>, store: &EntityStore) -> Result<Outcome, HandlerError> {
    let Some(id) = args.integer()?.and_then(StudentId::new) else {
        return Ok(Outcome::InvalidStudentId);
    };

    Ok(match store.student(id) {
        Some(student) => Outcome::StudentFound {
            student: student.clone(),
        },
        None => Outcome::StudentNotFound,
    })
}

/// `DELETE_STUDENT <id>`
///
/// No range or existence check: any integer id is "deleted", and only ids
/// that name a stored student change the store. The student's grades go
/// with it.
pub(super) fn delete(args: &mut ArgReader<'_>, store: &mut EntityStore) -> Result<Outcome, HandlerError> {
    let raw_id = args.strict_integer()?;

    if let Some(id) = StudentId::new(raw_id) {
        let removed = store.remove_student(id).is_some();
        let grades = store.clear_grades_for_student(id);
        debug!(%id, removed, grades, "Deleted student");
    }

    Ok(Outcome::StudentDeleted { id: raw_id })
}

/// `LIST_ALL_STUDENTS`, one outcome per student in insertion order
pub(super) fn list_all(store: &EntityStore) -> Vec<Outcome> {
    store
        .students_in_order()
        .map(|student| Outcome::StudentListed {
            student: student.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{run, try_run};
    use crate::handlers::HandlerError;
    use gradebook_domain::{CommandName, EntityStore, ExamId, Outcome, Score, StudentId};

    fn sid(raw: i64) -> StudentId {
        StudentId::new(raw).unwrap()
    }

    fn add(store: &mut EntityStore, args: &str) -> Outcome {
        run(store, CommandName::AddStudent, args).remove(0)
    }

    // ==================== ADD_STUDENT ====================

    #[test]
    fn test_add_student_success() {
        let mut store = EntityStore::new();
        assert_eq!(
            add(&mut store, "1 John Smith"),
            Outcome::StudentAdded { id: sid(1) }
        );
        let student = store.student(sid(1)).unwrap();
        assert_eq!(student.name.as_str(), "John");
        assert_eq!(student.faculty.as_str(), "Smith");
    }

    #[test]
    fn test_add_student_out_of_range_ids() {
        let mut store = EntityStore::new();
        for raw in ["0", "-1", "1000", "123456", "abc"] {
            let args = format!("{raw} John Smith");
            assert_eq!(add(&mut store, &args), Outcome::InvalidStudentId);
        }
        assert_eq!(store.student_count(), 0);
    }

    #[test]
    fn test_add_student_twice_keeps_first() {
        let mut store = EntityStore::new();
        add(&mut store, "1 John Smith");
        assert_eq!(
            add(&mut store, "1 Jane Doeee"),
            Outcome::StudentExists { id: sid(1) }
        );
        assert_eq!(store.student(sid(1)).unwrap().name.as_str(), "John");
    }

    #[test]
    fn test_existence_checked_before_name() {
        let mut store = EntityStore::new();
        add(&mut store, "1 John Smith");
        assert_eq!(
            add(&mut store, "1 J 4"),
            Outcome::StudentExists { id: sid(1) }
        );
    }

    #[test]
    fn test_add_student_name_and_faculty_rules() {
        let mut store = EntityStore::new();
        assert_eq!(add(&mut store, "1 J Smith"), Outcome::InvalidName);
        assert_eq!(add(&mut store, "1 J0hn Smith"), Outcome::InvalidName);
        assert_eq!(add(&mut store, "1 John Math"), Outcome::InvalidFaculty);
        assert_eq!(add(&mut store, "1 John Math3matics"), Outcome::InvalidFaculty);
        assert_eq!(store.student_count(), 0);
    }

    // ==================== SEARCH_STUDENT ====================

    #[test]
    fn test_search_student() {
        let mut store = EntityStore::new();
        add(&mut store, "5 Alice Physics");

        let found = run(&mut store, CommandName::SearchStudent, "5").remove(0);
        match found {
            Outcome::StudentFound { student } => assert_eq!(student.faculty.as_str(), "Physics"),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(
            run(&mut store, CommandName::SearchStudent, "6"),
            vec![Outcome::StudentNotFound]
        );
        assert_eq!(
            run(&mut store, CommandName::SearchStudent, "1000"),
            vec![Outcome::InvalidStudentId]
        );
    }

    // ==================== DELETE_STUDENT ====================

    #[test]
    fn test_delete_removes_student_order_and_grades() {
        let mut store = EntityStore::new();
        add(&mut store, "1 Alice Physics");
        add(&mut store, "2 Bob Physics");
        store.put_grade(ExamId::new(3).unwrap(), sid(1), Score::new(90).unwrap());
        store.put_grade(ExamId::new(4).unwrap(), sid(1), Score::new(80).unwrap());
        store.put_grade(ExamId::new(3).unwrap(), sid(2), Score::new(70).unwrap());

        assert_eq!(
            run(&mut store, CommandName::DeleteStudent, "1"),
            vec![Outcome::StudentDeleted { id: 1 }]
        );
        assert!(store.student(sid(1)).is_none());
        assert_eq!(store.grade_count(), 1);
        assert_eq!(
            run(&mut store, CommandName::SearchStudent, "1"),
            vec![Outcome::StudentNotFound]
        );
    }

    #[test]
    fn test_delete_absent_or_out_of_range_still_reports() {
        let mut store = EntityStore::new();
        assert_eq!(
            run(&mut store, CommandName::DeleteStudent, "42"),
            vec![Outcome::StudentDeleted { id: 42 }]
        );
        assert_eq!(
            run(&mut store, CommandName::DeleteStudent, "-3"),
            vec![Outcome::StudentDeleted { id: -3 }]
        );
    }

    #[test]
    fn test_delete_malformed_id_is_skipped() {
        let mut store = EntityStore::new();
        let result = try_run(&mut store, CommandName::DeleteStudent, "one");
        assert!(matches!(result, Err(HandlerError::Malformed { .. })));
    }

    // ==================== LIST_ALL_STUDENTS ====================

    #[test]
    fn test_list_skips_deleted_in_order() {
        let mut store = EntityStore::new();
        add(&mut store, "7 Gina Physics");
        add(&mut store, "3 Carl Physics");
        add(&mut store, "9 Iris Physics");
        run(&mut store, CommandName::DeleteStudent, "3");

        let ids: Vec<u16> = run(&mut store, CommandName::ListAllStudents, "")
            .into_iter()
            .map(|outcome| match outcome {
                Outcome::StudentListed { student } => student.id.get(),
                other => panic!("unexpected outcome: {other:?}"),
            })
            .collect();
        assert_eq!(ids, vec![7, 9]);
    }
}
