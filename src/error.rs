//! Error returned when a decimal string cannot be turned into a [`BigInt`](crate::BigInt).

use thiserror::Error as ThisError;

/// Invalid input handed to the decimal string constructor.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ParseBigIntError {
    /// The incoming string is empty.
    #[error("Empty string")]
    Empty,

    /// The incoming string holds something other than an optional leading
    /// sign followed by ASCII digits. Carries the character and its byte
    /// offset in the input.
    #[error("Illegal character {0:?} at position {1}")]
    InvalidDigit(char, usize),
}
