//! Output rendering

pub mod line;
pub mod reporter;
pub mod summary;
