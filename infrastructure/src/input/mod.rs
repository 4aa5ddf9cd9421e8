//! Command input adapters

mod token_reader;

pub use token_reader::{InputError, WhitespaceTokenReader};
