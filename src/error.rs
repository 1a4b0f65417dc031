//! Errors that may occur when building code tables or coding words.

use thiserror::Error;

/// Hamming code errors.
///
/// Words that can't be corrected are not errors: they're reported through
/// [`Status::Uncorrectable`](crate::codec::Status::Uncorrectable).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum HammingError {
    /// A data word or codeword didn't have the expected number of bits. For packed
    /// words, `found` is the number of bits up to and including the highest set bit.
    #[error("expected {expected} bits, found {found}")]
    InputLength { expected: usize, found: usize },
    /// An element of a bit sequence was something other than 0 or 1.
    #[error("element {index} has value {value}, which is not a bit")]
    InvalidBit { index: usize, value: u8 },
    /// A matrix had the wrong shape for the code variant.
    #[error("a {rows}x{cols} matrix doesn't fit the code")]
    Dimension { rows: usize, cols: usize },
    /// A matrix row had bits set beyond the matrix width.
    #[error("row {row} has bits outside of {width} columns")]
    RowWidth { row: usize, width: usize },
    /// A generator row produced a nonzero syndrome.
    #[error("generator row {row} is not orthogonal to the parity-check matrix")]
    NotOrthogonal { row: usize },
    /// Two codeword positions produce the same single-error syndrome.
    #[error("errors at positions {first} and {second} produce the same syndrome")]
    AmbiguousSyndrome { first: usize, second: usize },
    /// A single error at the position would go unnoticed.
    #[error("an error at position {position} produces a zero syndrome")]
    ZeroSyndrome { position: usize },
    /// A data bit isn't copied unmodified into any codeword position.
    #[error("data bit {bit} has no systematic position in the codeword")]
    NotSystematic { bit: usize },
}

/// Standard result using `HammingError`.
pub type Result<T> = std::result::Result<T, HammingError>;
