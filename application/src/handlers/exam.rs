//! ADD_EXAM, UPDATE_EXAM

use super::{ArgReader, HandlerError};
use gradebook_domain::{
    Duration, EntityStore, Exam, ExamId, ExamKind, ExamType, Outcome, Software,
};
use tracing::debug;

/// Payload argument read according to the exam type, not yet validated
enum RawPayload {
    Duration(Option<i64>),
    Software(String),
}

impl RawPayload {
    fn validate(self) -> Result<ExamKind, Outcome> {
        match self {
            RawPayload::Duration(raw) => raw
                .and_then(Duration::new)
                .map(|duration| ExamKind::Written { duration })
                .ok_or(Outcome::InvalidDuration),
            RawPayload::Software(token) => Software::parse(&token)
                .map(|software| ExamKind::Digital { software })
                .ok_or(Outcome::InvalidSoftware),
        }
    }
}

/// Read `<id> <type> <duration|software>`.
///
/// An unknown type yields `None`; its payload token is still consumed.
fn read_args(args: &mut ArgReader<'_>) -> Result<Option<(Option<i64>, RawPayload)>, HandlerError> {
    let raw_id = args.integer()?;
    let exam_type = args.token()?;

    match exam_type.parse::<ExamType>() {
        Ok(ExamType::Written) => Ok(Some((raw_id, RawPayload::Duration(args.integer()?)))),
        Ok(ExamType::Digital) => Ok(Some((raw_id, RawPayload::Software(args.token()?)))),
        Err(error) => {
            debug!(command = %args.command(), %error, "Discarding payload of unknown exam type");
            args.skip()?;
            Ok(None)
        }
    }
}

/// `ADD_EXAM <id> <type> <payload>`
///
/// Checks run type, existence, range, payload. Existence comes before the
/// range check; an out-of-range id can never be present, so it still ends up
/// as an invalid id.
pub(super) fn add(args: &mut ArgReader<'_>, store: &mut EntityStore) -> Result<Outcome, HandlerError> {
    let Some((raw_id, payload)) = read_args(args)? else {
        return Ok(Outcome::InvalidExamType);
    };

    let id = raw_id.and_then(ExamId::new);
    if let Some(id) = id.filter(|&id| store.has_exam(id)) {
        return Ok(Outcome::ExamExists { id });
    }
    let Some(id) = id else {
        return Ok(Outcome::InvalidExamId);
    };
    let kind = match payload.validate() {
        Ok(kind) => kind,
        Err(outcome) => return Ok(outcome),
    };

    store.put_exam(Exam::new(id, kind));
    Ok(Outcome::ExamAdded { id })
}

/// `UPDATE_EXAM <id> <type> <payload>`
///
/// Replaces type and payload entirely. The exam does not have to exist; an
/// update of an unknown id creates it.
pub(super) fn update(args: &mut ArgReader<'_>, store: &mut EntityStore) -> Result<Outcome, HandlerError> {
    let Some((raw_id, payload)) = read_args(args)? else {
        return Ok(Outcome::InvalidExamType);
    };

    let Some(id) = raw_id.and_then(ExamId::new) else {
        return Ok(Outcome::InvalidExamId);
    };
    let kind = match payload.validate() {
        Ok(kind) => kind,
        Err(outcome) => return Ok(outcome),
    };

    if store.put_exam(Exam::new(id, kind)).is_none() {
        debug!(%id, "Update created a new exam");
    }
    Ok(Outcome::ExamUpdated { id })
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::run;
    use gradebook_domain::{CommandName, EntityStore, ExamId, ExamKind, ExamType, Outcome};

    fn eid(raw: i64) -> ExamId {
        ExamId::new(raw).unwrap()
    }

    fn add(store: &mut EntityStore, args: &str) -> Outcome {
        run(store, CommandName::AddExam, args).remove(0)
    }

    fn update(store: &mut EntityStore, args: &str) -> Outcome {
        run(store, CommandName::UpdateExam, args).remove(0)
    }

    // ==================== ADD_EXAM ====================

    #[test]
    fn test_add_written_and_digital() {
        let mut store = EntityStore::new();
        assert_eq!(add(&mut store, "10 WRITTEN 60"), Outcome::ExamAdded { id: eid(10) });
        assert_eq!(add(&mut store, "11 DIGITAL Zoom"), Outcome::ExamAdded { id: eid(11) });
        assert_eq!(store.exam(eid(10)).unwrap().exam_type(), ExamType::Written);
        assert_eq!(store.exam(eid(11)).unwrap().exam_type(), ExamType::Digital);
    }

    #[test]
    fn test_invalid_type_consumes_payload() {
        use crate::handlers::ArgReader;
        use crate::ports::token_source::{MemoryTokenSource, TokenSource};

        let mut store = EntityStore::new();
        let mut source = MemoryTokenSource::from_text("10 ORAL 60 NEXT");
        let mut reader = ArgReader::new(CommandName::AddExam, &mut source);
        let outcomes = crate::handlers::handle(CommandName::AddExam, &mut reader, &mut store).unwrap();

        assert_eq!(outcomes, vec![Outcome::InvalidExamType]);
        assert_eq!(source.next_token().unwrap().as_deref(), Some("NEXT"));
        assert_eq!(store.exam_count(), 0);
    }

    #[test]
    fn test_type_checked_before_id() {
        let mut store = EntityStore::new();
        assert_eq!(add(&mut store, "900 written 60"), Outcome::InvalidExamType);
    }

    #[test]
    fn test_existing_before_range_and_payload() {
        let mut store = EntityStore::new();
        add(&mut store, "10 WRITTEN 60");
        assert_eq!(add(&mut store, "10 WRITTEN 5"), Outcome::ExamExists { id: eid(10) });
        assert_eq!(add(&mut store, "10 DIGITAL X"), Outcome::ExamExists { id: eid(10) });
    }

    #[test]
    fn test_add_exam_range_and_payload_rules() {
        let mut store = EntityStore::new();
        assert_eq!(add(&mut store, "0 WRITTEN 60"), Outcome::InvalidExamId);
        assert_eq!(add(&mut store, "500 WRITTEN 60"), Outcome::InvalidExamId);
        assert_eq!(add(&mut store, "1 WRITTEN 39"), Outcome::InvalidDuration);
        assert_eq!(add(&mut store, "1 WRITTEN 181"), Outcome::InvalidDuration);
        assert_eq!(add(&mut store, "1 WRITTEN long"), Outcome::InvalidDuration);
        assert_eq!(add(&mut store, "1 DIGITAL VS"), Outcome::InvalidSoftware);
        assert_eq!(add(&mut store, "1 DIGITAL Office365"), Outcome::InvalidSoftware);
        assert_eq!(store.exam_count(), 0);
    }

    // ==================== UPDATE_EXAM ====================

    #[test]
    fn test_update_replaces_type_and_payload() {
        let mut store = EntityStore::new();
        add(&mut store, "10 WRITTEN 60");
        assert_eq!(update(&mut store, "10 DIGITAL Moodle"), Outcome::ExamUpdated { id: eid(10) });

        match &store.exam(eid(10)).unwrap().kind {
            ExamKind::Digital { software } => assert_eq!(software.as_str(), "Moodle"),
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_update_absent_exam_creates_it() {
        let mut store = EntityStore::new();
        assert_eq!(update(&mut store, "20 WRITTEN 90"), Outcome::ExamUpdated { id: eid(20) });
        assert!(store.has_exam(eid(20)));
    }

    #[test]
    fn test_failed_update_leaves_exam_untouched() {
        let mut store = EntityStore::new();
        add(&mut store, "10 WRITTEN 60");
        assert_eq!(update(&mut store, "10 WRITTEN 200"), Outcome::InvalidDuration);
        assert_eq!(update(&mut store, "10 PAPER 60"), Outcome::InvalidExamType);
        assert_eq!(update(&mut store, "600 WRITTEN 60"), Outcome::InvalidExamId);

        match &store.exam(eid(10)).unwrap().kind {
            ExamKind::Written { duration } => assert_eq!(duration.minutes(), 60),
            other => panic!("unexpected kind: {other:?}"),
        }
    }
}
