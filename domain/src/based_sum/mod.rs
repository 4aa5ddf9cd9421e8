//! Mixed-base checksum.
//!
//! The input is a count `N` (1 to 40), then `N` digit strings, then `N` bases.
//! Every digit string is converted from its own base. Entries at even
//! positions (0-based) contribute `value - 10`, entries at odd positions
//! contribute `value + 10`; the result is the sum of all contributions.
//!
//! | Base | Digits |
//! |------|--------|
//! | 2    | `0-1` |
//! | 8    | `0-7` |
//! | 10   | `0-9` |
//! | 16   | `0-9`, `A-F` (uppercase only) |

use crate::core::validation::parse_integer;
use std::str::FromStr;
use thiserror::Error;

pub const MIN_COUNT: i64 = 1;
pub const MAX_COUNT: i64 = 40;

/// Offset subtracted at even positions and added at odd positions
const POSITION_OFFSET: i64 = 10;

/// Reasons a based-sum input is rejected. All of them render as the same
/// `Invalid inputs` line; the variants exist for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BasedSumError {
    #[error("count must be within 1..=40, got '{0}'")]
    InvalidCount(String),

    #[error("expected {expected} numbers and {expected} bases, input ended early")]
    MissingTokens { expected: usize },

    #[error("unsupported base '{0}'")]
    InvalidBase(String),

    #[error("'{digits}' is not a valid base-{radix} number")]
    InvalidDigits { digits: String, radix: u32 },

    #[error("sum does not fit in a 64-bit integer")]
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Base {
    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }

    fn digit_value(self, byte: u8) -> Option<u32> {
        let value = match byte {
            b'0'..=b'9' => u32::from(byte - b'0'),
            b'A'..=b'F' => u32::from(byte - b'A') + 10,
            _ => return None,
        };
        (value < self.radix()).then_some(value)
    }

    /// Convert a digit string written in this base
    pub fn convert(self, digits: &str) -> Result<i64, BasedSumError> {
        let invalid = || BasedSumError::InvalidDigits {
            digits: digits.to_string(),
            radix: self.radix(),
        };

        if digits.is_empty() {
            return Err(invalid());
        }

        digits.bytes().try_fold(0i64, |acc, byte| {
            let digit = self.digit_value(byte).ok_or_else(invalid)?;
            acc.checked_mul(i64::from(self.radix()))
                .and_then(|v| v.checked_add(i64::from(digit)))
                .ok_or(BasedSumError::Overflow)
        })
    }
}

impl FromStr for Base {
    type Err = BasedSumError;

    /// Bases are written in plain decimal digits; leading zeros are allowed
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BasedSumError::InvalidBase(s.to_string());

        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        match s.parse::<u32>().map_err(|_| invalid())? {
            2 => Ok(Base::Binary),
            8 => Ok(Base::Octal),
            10 => Ok(Base::Decimal),
            16 => Ok(Base::Hexadecimal),
            _ => Err(invalid()),
        }
    }
}

/// Parsed but not yet validated based-sum input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasedSumInput {
    numbers: Vec<String>,
    bases: Vec<String>,
}

impl BasedSumInput {
    /// Validate the leading count token
    pub fn parse_count(token: &str) -> Result<usize, BasedSumError> {
        match parse_integer(token) {
            Ok(n) if (MIN_COUNT..=MAX_COUNT).contains(&n) => Ok(n as usize),
            _ => Err(BasedSumError::InvalidCount(token.to_string())),
        }
    }

    /// Pair up digit strings with their bases
    pub fn new(numbers: Vec<String>, bases: Vec<String>) -> Result<Self, BasedSumError> {
        if numbers.len() != bases.len() {
            return Err(BasedSumError::MissingTokens {
                expected: numbers.len().max(bases.len()),
            });
        }
        Ok(Self { numbers, bases })
    }

    /// Validate every entry and compute the sum
    pub fn sum(&self) -> Result<i64, BasedSumError> {
        self.numbers
            .iter()
            .zip(&self.bases)
            .enumerate()
            .try_fold(0i64, |acc, (index, (digits, base))| {
                let value = base.parse::<Base>()?.convert(digits)?;
                let adjusted = if index % 2 == 0 {
                    value.checked_sub(POSITION_OFFSET)
                } else {
                    value.checked_add(POSITION_OFFSET)
                };
                adjusted
                    .and_then(|v| acc.checked_add(v))
                    .ok_or(BasedSumError::Overflow)
            })
    }
}
