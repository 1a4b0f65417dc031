//! Literal generator and parity-check tables for the supported layouts.
//!
//! Every table is written in its (8, 4) form: the last column of each generator row is
//! the overall parity of the row, and the last column of each parity-check row is zero.
//! The (7, 4) forms drop that column.

/// Number of data bits per codeword.
pub const DATA_BITS: usize = 4;

/// Number of bits in a core syndrome.
pub const SYNDROME_BITS: usize = 3;

/// Data bits at codeword indices 0 to 3, parity at 4 to 6.
///
/// ```text
///       d d d d   p p p   P
/// G = [ 1 0 0 0 | 0 1 1 | 1 ]
///     [ 0 1 0 0 | 1 0 1 | 1 ]
///     [ 0 0 1 0 | 1 1 0 | 1 ]
///     [ 0 0 0 1 | 1 1 1 | 0 ]
/// ```
pub const SYSTEMATIC_GEN: [u8; DATA_BITS] = [
    0b1000_011_1,
    0b0100_101_1,
    0b0010_110_1,
    0b0001_111_0,
];

/// Parity-check matrix for `SYSTEMATIC_GEN`, of the form [Pᵀ | I].
pub const SYSTEMATIC_PAR: [u8; SYNDROME_BITS] = [
    0b0111_100_0,
    0b1011_010_0,
    0b1101_001_0,
];

/// Parity bits at codeword indices 0, 1, and 3, data at 2, 4, 5, and 6.
///
/// ```text
///       p p d p d d d   P
/// G = [ 1 1 1 0 0 0 0 | 1 ]
///     [ 1 0 0 1 1 0 0 | 1 ]
///     [ 0 1 0 1 0 1 0 | 1 ]
///     [ 1 1 0 1 0 0 1 | 0 ]
/// ```
pub const POSITIONAL_GEN: [u8; DATA_BITS] = [
    0b1110000_1,
    0b1001100_1,
    0b0101010_1,
    0b1101001_0,
];

/// Parity-check matrix for `POSITIONAL_GEN`. Column `i` holds the bits of `i + 1`,
/// least significant bit in row 0.
pub const POSITIONAL_PAR: [u8; SYNDROME_BITS] = [
    0b1010101_0,
    0b0110011_0,
    0b0001111_0,
];
