//! Command vocabulary of the record-store interpreter.
//!
//! - [`name::CommandName`]: the recognised command tokens
//! - [`outcome::Outcome`]: the result record every handled command produces

pub mod name;
pub mod outcome;
