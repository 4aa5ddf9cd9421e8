//! Record identifiers (Value Objects)
//!
//! An identifier can only be built from a value inside its valid range, so
//! holding a [`StudentId`] or [`ExamId`] means the range check already passed.
//! The ranges are part of the external contract, not a storage capacity.

use serde::Serialize;
use std::fmt;

/// Identifier of a student, always within `1..=999`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StudentId(u16);

impl StudentId {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 999;

    /// Returns `None` when `raw` is outside the valid range
    pub fn new(raw: i64) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&raw) {
            Some(Self(raw as u16))
        } else {
            None
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an exam, always within `1..=499`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ExamId(u16);

impl ExamId {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 499;

    /// Returns `None` when `raw` is outside the valid range
    pub fn new(raw: i64) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&raw) {
            Some(Self(raw as u16))
        } else {
            None
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ExamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_id_bounds() {
        assert!(StudentId::new(0).is_none());
        assert!(StudentId::new(-1).is_none());
        assert!(StudentId::new(1000).is_none());
        assert_eq!(StudentId::new(1).unwrap().get(), 1);
        assert_eq!(StudentId::new(999).unwrap().get(), 999);
    }

    #[test]
    fn test_exam_id_bounds() {
        assert!(ExamId::new(0).is_none());
        assert!(ExamId::new(500).is_none());
        assert!(ExamId::new(i64::MAX).is_none());
        assert_eq!(ExamId::new(499).unwrap().get(), 499);
    }

    #[test]
    fn test_display_is_plain_number() {
        assert_eq!(StudentId::new(42).unwrap().to_string(), "42");
        assert_eq!(ExamId::new(7).unwrap().to_string(), "7");
    }
}
