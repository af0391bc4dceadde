//! Symbol frequency tables.
//!
//! A [`FrequencyTable`] carries one weight per byte value plus the weight of
//! the end-of-stream symbol. The encoder and decoder must agree on the table
//! bit for bit, because the tree (and therefore every code) is derived from it.

use crate::config::{EOF_SYMBOL, MAX_SYMBOLS};
use crate::error::{HuffmanError, Result};

/// Built-in weights tuned for generic byte streams.
///
/// Byte 0 dominates with `2^30`; the remaining bytes follow a text-like
/// distribution. The final slot is kept for layout compatibility only: the
/// default table always uses an end-of-stream weight of 1.
#[rustfmt::skip]
pub const DEFAULT_FREQUENCIES: [u32; MAX_SYMBOLS] = [
    1 << 30, 4545, 2657, 431, 1950, 919, 444, 482, 2244, 617, 838, 542, 715, 1814, 304, 240,
    754, 212, 647, 186, 283, 131, 146, 166, 543, 164, 167, 136, 179, 859, 363, 113,
    157, 154, 204, 108, 137, 180, 202, 176, 872, 404, 168, 134, 151, 111, 113, 109,
    120, 126, 129, 100, 41, 20, 16, 22, 18, 18, 17, 19, 16, 37, 13, 21,
    362, 166, 99, 78, 95, 88, 81, 70, 83, 284, 91, 187, 77, 68, 52, 68,
    59, 66, 61, 638, 71, 157, 50, 46, 69, 43, 11, 24, 13, 19, 10, 12,
    12, 20, 14, 9, 20, 20, 10, 10, 15, 15, 12, 12, 7, 19, 15, 14,
    13, 18, 35, 19, 17, 14, 8, 5, 15, 17, 9, 15, 14, 18, 8, 10,
    2173, 134, 157, 68, 188, 60, 170, 60, 194, 62, 175, 71, 148, 67, 167, 78,
    211, 67, 156, 69, 1674, 90, 174, 53, 147, 89, 181, 51, 174, 63, 163, 80,
    167, 94, 128, 122, 223, 153, 218, 77, 200, 110, 190, 73, 174, 69, 145, 66,
    277, 143, 141, 60, 136, 53, 180, 57, 142, 57, 158, 61, 166, 112, 152, 92,
    26, 22, 21, 28, 20, 26, 30, 21, 32, 27, 20, 17, 23, 21, 30, 22,
    22, 21, 27, 25, 17, 27, 23, 18, 39, 26, 15, 21, 12, 18, 18, 27,
    20, 18, 15, 19, 11, 17, 33, 12, 18, 15, 19, 18, 16, 26, 17, 18,
    9, 10, 25, 22, 22, 17, 20, 16, 6, 16, 15, 20, 14, 18, 24, 335,
    1517,
];

/// Weights for every symbol of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrequencyTable {
    bytes: [u32; 256],
    eof: u32,
}

impl FrequencyTable {
    /// Create a table from byte weights, with an end-of-stream weight of 1.
    pub const fn new(bytes: [u32; 256]) -> Self {
        Self { bytes, eof: 1 }
    }

    /// Replace the end-of-stream weight. Zero is raised to 1 so the symbol
    /// stays encodable.
    pub const fn with_eof_weight(mut self, weight: u32) -> Self {
        self.eof = if weight == 0 { 1 } else { weight };
        self
    }

    /// Create a table from a slice of 256 byte weights, or 257 weights where
    /// the last one is the end-of-stream weight.
    pub fn from_slice(weights: &[u32]) -> Result<Self> {
        if weights.len() != 256 && weights.len() != MAX_SYMBOLS {
            return Err(HuffmanError::InvalidFrequencyTable { len: weights.len() });
        }

        let mut bytes = [0u32; 256];
        bytes.copy_from_slice(&weights[..256]);
        let table = Self::new(bytes);

        Ok(match weights.get(EOF_SYMBOL) {
            Some(&eof) => table.with_eof_weight(eof),
            None => table,
        })
    }

    /// Count byte occurrences in `data`.
    pub fn from_data(data: &[u8]) -> Self {
        let mut bytes = [0u32; 256];
        for &b in data {
            bytes[b as usize] = bytes[b as usize].saturating_add(1);
        }
        Self::new(bytes)
    }

    /// Weight of `symbol` (0..=256).
    ///
    /// # Panics
    ///
    /// Panics if `symbol` is outside the alphabet.
    pub fn weight(&self, symbol: usize) -> u32 {
        if symbol == EOF_SYMBOL {
            self.eof
        } else {
            self.bytes[symbol]
        }
    }

    /// Weight of the end-of-stream symbol (never 0).
    pub fn eof_weight(&self) -> u32 {
        self.eof
    }

    /// Weights of the 256 byte values.
    pub fn byte_weights(&self) -> &[u32; 256] {
        &self.bytes
    }

    /// All 257 weights in symbol order.
    pub fn to_array(&self) -> [u32; MAX_SYMBOLS] {
        let mut out = [0u32; MAX_SYMBOLS];
        out[..256].copy_from_slice(&self.bytes);
        out[EOF_SYMBOL] = self.eof;
        out
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        let mut bytes = [0u32; 256];
        bytes.copy_from_slice(&DEFAULT_FREQUENCIES[..256]);
        Self::new(bytes)
    }
}
