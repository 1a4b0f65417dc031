//! Encoding and decoding of single 4-bit data words.
//!
//! Decoding computes the core syndrome of the received word and, for the (8, 4) code,
//! its overall parity, then acts on the combination:
//!
//! | syndrome | overall parity | result                                  |
//! |----------|----------------|-----------------------------------------|
//! | zero     | even / none    | no error                                |
//! | zero     | odd            | overall parity bit flipped, corrected   |
//! | nonzero  | odd / none     | single error, corrected                 |
//! | nonzero  | even           | double error, uncorrectable             |

use log::{debug, trace};

use crate::bits;
use crate::consts::DATA_BITS;
use crate::error::Result;
use crate::tables::CodeTables;

/// Outcome of decoding a word.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "ser", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum Status {
    /// The word was a valid codeword.
    NoError,
    /// The bit at the given codeword position was flipped back.
    Corrected(usize),
    /// More errors occurred than the code can correct. Only the (8, 4) code detects
    /// this, as two errors in a (7, 4) word look like one error elsewhere.
    Uncorrectable,
}

impl Status {
    /// Number of bits that were corrected.
    pub fn errors(&self) -> usize {
        match *self {
            Status::Corrected(_) => 1,
            Status::NoError | Status::Uncorrectable => 0,
        }
    }

    /// Whether the decoded data can be trusted.
    pub fn is_ok(&self) -> bool { *self != Status::Uncorrectable }
}

/// Encodes and decodes words using a borrowed set of tables.
#[derive(Copy, Clone, Debug)]
pub struct Codec<'a> {
    tables: &'a CodeTables,
}

impl<'a> Codec<'a> {
    /// Construct a new `Codec` over the given tables.
    pub fn new(tables: &'a CodeTables) -> Self { Codec { tables } }

    /// Tables used for coding.
    pub fn tables(&self) -> &'a CodeTables { self.tables }

    /// Encode the given 4 data bits into a codeword.
    pub fn encode(&self, data: u8) -> Result<u8> {
        bits::check_width(data, DATA_BITS)?;
        Ok(self.tables.generate(data))
    }

    /// Correct up to one error in the given codeword.
    ///
    /// Return `(word, status)`, where `word` is the corrected codeword. For an
    /// uncorrectable word the bit its syndrome points at is still flipped, so `word` is
    /// a best guess that shouldn't be trusted.
    pub fn correct(&self, word: u8) -> Result<(u8, Status)> {
        let n = self.tables.word_bits();
        bits::check_width(word, n)?;

        let syndrome = self.tables.syndrome(word);
        let odd = bits::parity(word) == 1;

        match self.tables.syndrome_to_position(syndrome) {
            None => {
                // Tables map every nonzero syndrome to a position.
                debug_assert_eq!(syndrome, 0);

                match self.tables.parity_position() {
                    Some(pos) if odd => {
                        trace!("odd parity: flipping bit {} of {:0w$b}", pos, word, w = n);
                        Ok((bits::flip(word, n, pos), Status::Corrected(pos)))
                    },
                    _ => Ok((word, Status::NoError)),
                }
            },
            Some(pos) if self.tables.extended() && !odd => {
                // Two errors: the flip lands on a third bit, but the word is the
                // nearest guess available.
                debug!("syndrome {:03b}: uncorrectable word {:0w$b}", syndrome, word, w = n);
                Ok((bits::flip(word, n, pos), Status::Uncorrectable))
            },
            Some(pos) => {
                trace!("syndrome {:03b}: flipping bit {} of {:0w$b}", syndrome, pos, word, w = n);
                Ok((bits::flip(word, n, pos), Status::Corrected(pos)))
            },
        }
    }

    /// Try to decode the given codeword to the nearest codeword, correcting up to 1
    /// error.
    ///
    /// Return `(data, status)`, where `data` is the 4 data bits. When the status is
    /// `Uncorrectable`, the data bits come from the best-guess word of `correct`.
    pub fn decode(&self, word: u8) -> Result<(u8, Status)> {
        let (word, status) = self.correct(word)?;
        Ok((self.tables.extract(word), status))
    }

    /// Encode the given sequence of 4 bits, each 0 or 1, into a sequence of codeword
    /// bits.
    pub fn encode_bits(&self, data: &[u8]) -> Result<Vec<u8>> {
        let word = self.encode(bits::pack(data, DATA_BITS)?)?;
        Ok(bits::unpack(word, self.tables.word_bits()))
    }

    /// Decode the given sequence of codeword bits, each 0 or 1, into a sequence of 4
    /// data bits.
    pub fn decode_bits(&self, word: &[u8]) -> Result<(Vec<u8>, Status)> {
        let (data, status) = self.decode(bits::pack(word, self.tables.word_bits())?)?;
        Ok((bits::unpack(data, DATA_BITS), status))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::HammingError;
    use crate::tables::{Layout, Variant};

    #[test]
    fn test_encode() {
        let t = CodeTables::new(Variant::SevenBit).unwrap();
        let c = Codec::new(&t);

        assert_eq!(c.encode(0).unwrap(), 0);
        assert_eq!(c.encode(0b1011).unwrap(), 0b1011_010);
        assert_eq!(c.encode(0b1111).unwrap(), 0b1111_111);
        assert_eq!(
            c.encode(0b10000),
            Err(HammingError::InputLength { expected: 4, found: 5 })
        );

        let t = CodeTables::new(Variant::EightBit).unwrap();
        let c = Codec::new(&t);

        assert_eq!(c.encode(0b1011).unwrap(), 0b1011_010_0);
        assert_eq!(c.encode(0b0001).unwrap(), 0b0001_111_0);
        assert_eq!(c.encode(0b1000).unwrap(), 0b1000_011_1);
    }

    #[test]
    fn test_decode_seven() {
        let t = CodeTables::new(Variant::SevenBit).unwrap();
        let c = Codec::new(&t);
        let e = c.encode(0b1011).unwrap();

        assert_eq!(c.decode(e).unwrap(), (0b1011, Status::NoError));
        assert_eq!(c.decode(e ^ 0b1000000).unwrap(), (0b1011, Status::Corrected(0)));
        assert_eq!(c.decode(e ^ 0b0100000).unwrap(), (0b1011, Status::Corrected(1)));
        assert_eq!(c.decode(e ^ 0b0010000).unwrap(), (0b1011, Status::Corrected(2)));
        assert_eq!(c.decode(e ^ 0b0001000).unwrap(), (0b1011, Status::Corrected(3)));
        assert_eq!(c.decode(e ^ 0b0000100).unwrap(), (0b1011, Status::Corrected(4)));
        assert_eq!(c.decode(e ^ 0b0000010).unwrap(), (0b1011, Status::Corrected(5)));
        assert_eq!(c.decode(e ^ 0b0000001).unwrap(), (0b1011, Status::Corrected(6)));

        assert_eq!(
            c.decode(0x80),
            Err(HammingError::InputLength { expected: 7, found: 8 })
        );
    }

    #[test]
    fn test_decode_eight() {
        let t = CodeTables::new(Variant::EightBit).unwrap();
        let c = Codec::new(&t);
        let e = c.encode(0b0110).unwrap();

        assert_eq!(c.decode(e).unwrap(), (0b0110, Status::NoError));
        assert_eq!(c.decode(e ^ 0b10000000).unwrap(), (0b0110, Status::Corrected(0)));
        assert_eq!(c.decode(e ^ 0b00010000).unwrap(), (0b0110, Status::Corrected(3)));
        assert_eq!(c.decode(e ^ 0b00000010).unwrap(), (0b0110, Status::Corrected(6)));
        assert_eq!(c.decode(e ^ 0b00000001).unwrap(), (0b0110, Status::Corrected(7)));
        // Errors at 0 and 1 give the syndrome of position 2, which is flipped anyway.
        assert_eq!(c.decode(e ^ 0b11000000).unwrap(), (0b1000, Status::Uncorrectable));
        assert_eq!(c.decode(e ^ 0b00000011).unwrap().1, Status::Uncorrectable);
    }

    #[test]
    fn test_parity_bit_error() {
        let t = CodeTables::new(Variant::EightBit).unwrap();
        let c = Codec::new(&t);

        for d in 0..1 << 4 {
            let e = c.encode(d).unwrap();

            // The data bits are intact either way, but the repaired word is only a
            // valid codeword once the parity bit is flipped back.
            assert_eq!(c.correct(e ^ 1).unwrap(), (e, Status::Corrected(7)));
            assert_eq!(c.decode(e ^ 1).unwrap(), (d, Status::Corrected(7)));
        }
    }

    #[test]
    fn test_correct_uncorrectable() {
        let t = CodeTables::new(Variant::EightBit).unwrap();
        let c = Codec::new(&t);
        let e = c.encode(0b1001).unwrap();

        // Errors at 2 and 5 give the syndrome of position 4.
        assert_eq!(
            c.correct(e ^ 0b00100100).unwrap(),
            (e ^ 0b00101100, Status::Uncorrectable)
        );
    }

    #[test]
    fn test_double_error_best_guess() {
        let t = CodeTables::new(Variant::EightBit).unwrap();
        let c = Codec::new(&t);

        for d in 0..1 << 4 {
            let e = c.encode(d).unwrap();

            for i in 0..7 {
                for j in i + 1..8 {
                    let errored = e ^ (1 << (7 - i) | 1 << (7 - j));
                    let pos = t.syndrome_to_position(t.syndrome(errored)).unwrap();
                    let guess = bits::flip(errored, 8, pos);

                    assert_eq!(c.correct(errored).unwrap(), (guess, Status::Uncorrectable));
                    assert_eq!(
                        c.decode(errored).unwrap(),
                        (t.extract(guess), Status::Uncorrectable)
                    );
                }
            }
        }
    }

    #[test]
    fn test_positional() {
        let t = CodeTables::with_layout(Variant::SevenBit, Layout::Positional).unwrap();
        let c = Codec::new(&t);

        assert_eq!(c.encode(0b1011).unwrap(), 0b0110011);
        assert_eq!(c.encode(0b1000).unwrap(), 0b1110000);
        assert_eq!(c.decode(0b0110011 ^ 0b0000100).unwrap(), (0b1011, Status::Corrected(4)));
    }

    #[test]
    fn test_bits() {
        let t = CodeTables::new(Variant::SevenBit).unwrap();
        let c = Codec::new(&t);

        assert_eq!(c.encode_bits(&[1, 0, 1, 1]).unwrap(), vec![1, 0, 1, 1, 0, 1, 0]);
        assert_eq!(
            c.decode_bits(&[1, 0, 0, 1, 0, 1, 0]).unwrap(),
            (vec![1, 0, 1, 1], Status::Corrected(2))
        );
        assert_eq!(
            c.encode_bits(&[1, 0, 1]),
            Err(HammingError::InputLength { expected: 4, found: 3 })
        );
        assert_eq!(
            c.decode_bits(&[1, 0, 1, 1, 0, 1, 0, 0]),
            Err(HammingError::InputLength { expected: 7, found: 8 })
        );
        assert_eq!(
            c.decode_bits(&[1, 0, 1, 1, 0, 7, 0]),
            Err(HammingError::InvalidBit { index: 5, value: 7 })
        );
    }

    #[test]
    fn test_status() {
        assert_eq!(Status::NoError.errors(), 0);
        assert_eq!(Status::Corrected(3).errors(), 1);
        assert_eq!(Status::Uncorrectable.errors(), 0);
        assert!(Status::Corrected(7).is_ok());
        assert!(!Status::Uncorrectable.is_ok());
    }
}
