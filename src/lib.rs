//! Encoding and decoding of the (7, 4) and (8, 4) Hamming codes.
//!
//! Both codes carry 4 data bits and correct up to 1 error per word. The (8, 4) code adds
//! an overall parity bit, which lets it also detect (but not correct) 2 errors.
//!
//! ```
//! use hamming84::{CodeTables, Codec, Status, Variant};
//!
//! let tables = CodeTables::new(Variant::EightBit).unwrap();
//! let codec = Codec::new(&tables);
//!
//! let word = codec.encode(0b1011).unwrap();
//! assert_eq!(codec.decode(word ^ 0b0010_0000).unwrap(), (0b1011, Status::Corrected(2)));
//! assert_eq!(codec.decode(word ^ 0b0010_0001).unwrap().1, Status::Uncorrectable);
//! ```

pub mod bits;
pub mod codec;
pub mod consts;
pub mod error;
pub mod matrix;
pub mod stats;
pub mod tables;

pub use codec::{Codec, Status};
pub use error::{HammingError, Result};
pub use matrix::Matrix;
pub use stats::CodeStats;
pub use tables::{CodeTables, Layout, Variant};
