//! Generator and parity-check tables for the (7, 4) and (8, 4) Hamming codes.
//!
//! Tables are checked once when they're built: the generator must be orthogonal to the
//! parity-check matrix, every single-bit error must produce its own nonzero syndrome,
//! and every data bit must be copied unmodified into some codeword position. A
//! `CodeTables` that exists is therefore always safe to decode with.

use log::{debug, warn};

use crate::bits;
use crate::consts::{
    DATA_BITS, POSITIONAL_GEN, POSITIONAL_PAR, SYNDROME_BITS, SYSTEMATIC_GEN, SYSTEMATIC_PAR,
};
use crate::error::{HammingError, Result};
use crate::matrix::Matrix;

/// Codeword length.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "ser", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum Variant {
    /// (7, 4) code: 3 parity bits, corrects 1 error.
    SevenBit,
    /// (8, 4) code: 3 parity bits and an overall parity bit, corrects 1 error and
    /// detects 2.
    EightBit,
}

impl Variant {
    /// Number of bits in a codeword.
    pub fn word_bits(&self) -> usize {
        match *self {
            Variant::SevenBit => 7,
            Variant::EightBit => 8,
        }
    }

    /// Whether codewords carry an overall parity bit.
    pub fn extended(&self) -> bool { *self == Variant::EightBit }
}

/// Arrangement of data and parity bits within a codeword.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "ser", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum Layout {
    /// Data bits first, followed by parity bits.
    #[default]
    Systematic,
    /// Parity bits at power-of-two positions (counting from 1), data bits between.
    Positional,
}

/// Fixed matrices and syndrome lookups for one code.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CodeTables {
    variant: Variant,
    /// Generator matrix G, 4 × n.
    gen: Matrix,
    /// Transpose of G, so data·G is a row product.
    gen_cols: Matrix,
    /// Core parity-check matrix H, 3 × n.
    par: Matrix,
    /// Maps each core syndrome to the codeword position a single error there flips.
    locations: [Option<usize>; 1 << SYNDROME_BITS],
    /// Position whose errors only show up in the overall parity.
    parity_position: Option<usize>,
    /// Codeword positions holding data bits, most significant data bit first.
    data_positions: [usize; DATA_BITS],
}

impl CodeTables {
    /// Construct the tables for the given variant using the systematic layout.
    pub fn new(variant: Variant) -> Result<CodeTables> {
        CodeTables::with_layout(variant, Layout::Systematic)
    }

    /// Construct the built-in tables for the given variant and layout.
    pub fn with_layout(variant: Variant, layout: Layout) -> Result<CodeTables> {
        let (gen, par) = match layout {
            Layout::Systematic => (SYSTEMATIC_GEN, SYSTEMATIC_PAR),
            Layout::Positional => (POSITIONAL_GEN, POSITIONAL_PAR),
        };

        // Drop the overall parity column for shorter words.
        let shift = 8 - variant.word_bits();
        let n = variant.word_bits();

        CodeTables::from_matrices(
            variant,
            Matrix::new(&gen.map(|row| row >> shift), n)?,
            Matrix::new(&par.map(|row| row >> shift), n)?,
        )
    }

    /// Construct tables from the given generator and core parity-check matrices,
    /// verifying they form a single-error-correcting code for the variant.
    pub fn from_matrices(variant: Variant, gen: Matrix, par: Matrix) -> Result<CodeTables> {
        let tables = CodeTables::build(variant, gen, par);

        match &tables {
            Ok(t) => debug!("built {:?} tables with data at {:?}", variant, t.data_positions),
            Err(e) => warn!("rejected {:?} tables: {}", variant, e),
        }

        tables
    }

    fn build(variant: Variant, gen: Matrix, par: Matrix) -> Result<CodeTables> {
        let n = variant.word_bits();

        if gen.height() != DATA_BITS || gen.width() != n {
            return Err(HammingError::Dimension {
                rows: gen.height(),
                cols: gen.width(),
            });
        }

        if par.height() != SYNDROME_BITS || par.width() != n {
            return Err(HammingError::Dimension {
                rows: par.height(),
                cols: par.width(),
            });
        }

        // The overall parity row is all ones, so it's only orthogonal to even-weight
        // generator rows.
        let check = if variant.extended() {
            par.with_row(0xFF >> (8 - n))?
        } else {
            par
        };

        check
            .annihilates(&gen)
            .map_err(|row| HammingError::NotOrthogonal { row })?;

        let mut seen = [None; 1 << (SYNDROME_BITS + 1)];
        let mut locations = [None; 1 << SYNDROME_BITS];
        let mut parity_position = None;

        for pos in 0..n {
            let s = check.column(pos) as usize;

            if s == 0 {
                return Err(HammingError::ZeroSyndrome { position: pos });
            }

            if let Some(first) = seen[s] {
                return Err(HammingError::AmbiguousSyndrome { first, second: pos });
            }

            seen[s] = Some(pos);

            match par.column(pos) as usize {
                0 => parity_position = Some(pos),
                core => locations[core] = Some(pos),
            }
        }

        let gen_cols = gen.transpose();
        let mut data_positions = [0; DATA_BITS];

        for (bit, slot) in data_positions.iter_mut().enumerate() {
            let unit = 1 << (DATA_BITS - 1 - bit);

            *slot = gen_cols
                .rows()
                .iter()
                .position(|&col| col == unit)
                .ok_or(HammingError::NotSystematic { bit })?;
        }

        Ok(CodeTables {
            variant,
            gen,
            gen_cols,
            par,
            locations,
            parity_position,
            data_positions,
        })
    }

    /// Code variant the tables are for.
    pub fn variant(&self) -> Variant { self.variant }

    /// Number of bits in a codeword.
    pub fn word_bits(&self) -> usize { self.variant.word_bits() }

    /// Whether codewords carry an overall parity bit.
    pub fn extended(&self) -> bool { self.variant.extended() }

    /// Generator matrix G.
    pub fn generator(&self) -> &Matrix { &self.gen }

    /// Core parity-check matrix H. The overall parity check of the (8, 4) code is the
    /// GF(2) sum of all codeword bits and isn't included.
    pub fn parity_check(&self) -> &Matrix { &self.par }

    /// Map the given core syndrome to the codeword position a single error there would
    /// flip. Return `None` for the zero syndrome.
    pub fn syndrome_to_position(&self, syndrome: u8) -> Option<usize> {
        self.locations.get(syndrome as usize).cloned().flatten()
    }

    /// Codeword position of the overall parity bit, if the code has one.
    pub fn parity_position(&self) -> Option<usize> { self.parity_position }

    /// Codeword positions holding data bits, most significant data bit first.
    pub fn data_positions(&self) -> &[usize] { &self.data_positions }

    /// Compute data·G for the given 4-bit data word.
    pub(crate) fn generate(&self, data: u8) -> u8 { self.gen_cols.mul_word(data) }

    /// Compute the core syndrome H·wᵀ for the given codeword.
    pub(crate) fn syndrome(&self, word: u8) -> u8 { self.par.mul_word(word) }

    /// Gather the data bits out of the given codeword.
    pub(crate) fn extract(&self, word: u8) -> u8 {
        let n = self.word_bits();

        self.data_positions
            .iter()
            .fold(0, |data, &pos| data << 1 | bits::bit(word, n, pos))
    }
}
