//! Domain layer for gradebook
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Registry
//!
//! Students, exams and grades live in an [`EntityStore`] for the duration of
//! one run:
//!
//! - **Student**: id `1..=999`, letters-only name and faculty
//! - **Exam**: id `1..=499`, either WRITTEN (duration) or DIGITAL (software)
//! - **Grade**: `0..=100`, at most one per (exam, student) pair
//!
//! ## Outcomes
//!
//! Every handled command yields [`Outcome`] records. They carry data only;
//! turning them into output lines is the presentation layer's job.
//!
//! ## Based sum
//!
//! A standalone checksum over numbers written in bases 2, 8, 10 and 16
//! (see [`based_sum`]).

pub mod based_sum;
pub mod command;
pub mod core;
pub mod registry;

// Re-export commonly used types
pub use based_sum::{Base, BasedSumError, BasedSumInput};
pub use command::{
    name::{CommandName, END_OF_INPUT},
    outcome::{GradeReport, Outcome},
};
pub use core::{
    error::DomainError,
    ids::{ExamId, StudentId},
    validation::{has_len_between, is_letters_only, parse_integer},
};
pub use registry::{
    entities::{Exam, ExamKind, Student},
    store::EntityStore,
    value_objects::{Duration, ExamType, Faculty, Name, Score, Software},
};
