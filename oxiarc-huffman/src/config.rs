//! Fixed parameters of the codec.
//!
//! Every value here is part of the contract between an encoder and a decoder
//! built from the same frequency table, so none of them are tunable at runtime.

/// Symbol value of the end-of-stream marker.
pub const EOF_SYMBOL: usize = 256;

/// Number of symbols in the alphabet (256 byte values plus end-of-stream).
pub const MAX_SYMBOLS: usize = EOF_SYMBOL + 1;

/// Number of nodes in a full binary tree over [`MAX_SYMBOLS`] leaves.
pub const MAX_NODES: usize = MAX_SYMBOLS * 2 - 1;

/// Longest possible code: a fully skewed tree over 257 leaves.
pub const MAX_CODE_LENGTH: usize = MAX_SYMBOLS - 1;

/// Number of bits resolved by one decode lookup.
pub const LUT_BITS: u32 = 10;

/// Number of entries in the decode lookup table.
pub const LUT_SIZE: usize = 1 << LUT_BITS;

/// Mask selecting the lookup index from the bit accumulator.
pub const LUT_MASK: u64 = (LUT_SIZE as u64) - 1;

/// The decoder tops up its accumulator while it holds fewer bits than this.
pub const REFILL_THRESHOLD: u32 = 24;

/// Arena index meaning "no node".
pub const NO_NODE: u16 = 0xFFFF;
