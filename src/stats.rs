//! Runtime statistics.

use crate::codec::Status;

/// Tracks decoding outcomes for a stream of words.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "ser", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct CodeStats {
    /// Total number of received words.
    words: usize,
    /// Number of corrected bits.
    fixed: usize,
    /// Number of uncorrectable words.
    err: usize,
}

impl CodeStats {
    /// Create a new `CodeStats` with empty counters.
    pub fn new() -> Self { CodeStats::default() }

    /// Record that a word was decoded with the given status.
    pub fn record(&mut self, status: Status) {
        self.words += 1;

        match status {
            Status::Uncorrectable => self.err += 1,
            _ => self.fixed += status.errors(),
        }
    }

    /// Merge in the stats from the given object and clear the other stats.
    pub fn merge(&mut self, other: &mut CodeStats) {
        self.words += other.words;
        self.err += other.err;
        self.fixed += other.fixed;

        other.clear();
    }

    /// Clear all stats.
    pub fn clear(&mut self) {
        *self = CodeStats::default();
    }

    /// Total number of received words.
    pub fn words(&self) -> usize { self.words }

    /// Number of corrected bits.
    pub fn fixed(&self) -> usize { self.fixed }

    /// Number of uncorrectable words.
    pub fn errors(&self) -> usize { self.err }
}
