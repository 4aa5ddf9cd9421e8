//! Field validation rules.
//!
//! Pure predicates with no side effects. Each record type composes these in
//! its own order; the first failing check decides the outcome.

use super::error::DomainError;

/// True iff every byte is an ASCII letter (`A-Z`, `a-z`).
///
/// An empty string passes; emptiness is the length check's concern.
pub fn is_letters_only(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Inclusive byte-length check
pub fn has_len_between(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.len())
}

/// Letters-only text whose length lies within `min..=max`
pub fn is_letters_within(s: &str, min: usize, max: usize) -> bool {
    has_len_between(s, min, max) && is_letters_only(s)
}

/// Parse a whole token as a signed decimal integer.
///
/// Accepts an optional leading sign. Anything else, including values that
/// overflow `i64`, is [`DomainError::MalformedInteger`].
pub fn parse_integer(token: &str) -> Result<i64, DomainError> {
    token
        .parse::<i64>()
        .map_err(|_| DomainError::MalformedInteger(token.to_string()))
}
