//! Core domain concepts shared across all subdomains.
//!
//! - [`ids::StudentId`] / [`ids::ExamId`]: range-checked identifiers
//! - [`validation`]: field predicates (letters-only, length, integer tokens)
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod ids;
pub mod validation;
