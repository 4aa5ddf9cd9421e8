//! Student, exam and grade records and the store that holds them.

pub mod entities;
pub mod store;
pub mod value_objects;
