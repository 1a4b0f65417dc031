//! Utilities for packing/unpacking bit sequences into/out of words.
//!
//! A word of `len` bits holds index 0 in its most significant used bit (bit `len - 1`)
//! and index `len - 1` in bit 0, matching the order GF(2) row products are
//! accumulated in.

use num::PrimInt;

use crate::error::{HammingError, Result};

/// Verify the given word fits in `width` bits and return it.
///
/// A packed word has no length of its own, so on failure the error's `found` is the
/// number of bits up to and including the highest set bit.
pub fn check_width(word: u8, width: usize) -> Result<u8> {
    debug_assert!(width <= 8);

    if width < 8 && word >> width != 0 {
        Err(HammingError::InputLength {
            expected: width,
            found: 8 - word.leading_zeros() as usize,
        })
    } else {
        Ok(word)
    }
}

/// Get the bit at the given index of the `len`-bit word.
pub fn bit(word: u8, len: usize, index: usize) -> u8 {
    assert!(index < len);
    word >> (len - 1 - index) & 1
}

/// Flip the bit at the given index of the `len`-bit word.
pub fn flip(word: u8, len: usize, index: usize) -> u8 {
    assert!(index < len);
    word ^ 1 << (len - 1 - index)
}

/// Compute the GF(2) sum of all bits in the word.
pub fn parity<T: PrimInt>(word: T) -> u8 {
    (word.count_ones() & 1) as u8
}

/// Pack exactly `len` bits, each 0 or 1, into a word.
pub fn pack(bits: &[u8], len: usize) -> Result<u8> {
    if bits.len() != len {
        return Err(HammingError::InputLength {
            expected: len,
            found: bits.len(),
        });
    }

    bits.iter().enumerate().try_fold(0, |word, (index, &value)| {
        if value > 1 {
            Err(HammingError::InvalidBit { index, value })
        } else {
            Ok(word << 1 | value)
        }
    })
}

/// Unpack the `len`-bit word into a sequence of 0/1 values.
pub fn unpack(word: u8, len: usize) -> Vec<u8> {
    (0..len).map(|i| bit(word, len, i)).collect()
}
