//! Huffman-specific error types.

use std::fmt;
use thiserror::Error;

/// Why a compressed stream was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// Input ran out before a symbol was resolved.
    UnexpectedEndOfInput,
    /// The decode lookup table had no node for the pending bits.
    MissingLookupEntry,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEndOfInput => f.write_str("unexpected end of input"),
            Self::MissingLookupEntry => f.write_str("no lookup table entry"),
        }
    }
}

/// Huffman compression/decompression errors.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// The caller's output buffer is full.
    #[error("Output buffer capacity of {capacity} bytes exceeded")]
    CapacityExceeded {
        /// Size of the output buffer that was handed in.
        capacity: usize,
    },

    /// The compressed stream is corrupt or was built with a different table.
    #[error("Malformed stream at bit position {bit_position}: {reason}")]
    MalformedStream {
        /// Number of bits consumed when decoding failed.
        bit_position: u64,
        /// What went wrong.
        reason: MalformedReason,
    },

    /// A weight slice of the wrong length was supplied.
    #[error("Invalid frequency table: expected 256 or 257 weights, got {len}")]
    InvalidFrequencyTable {
        /// Length of the rejected slice.
        len: usize,
    },
}

impl HuffmanError {
    /// Create a capacity exceeded error.
    pub fn capacity_exceeded(capacity: usize) -> Self {
        Self::CapacityExceeded { capacity }
    }

    /// Create an unexpected end of input error.
    pub fn unexpected_end(bit_position: u64) -> Self {
        Self::MalformedStream {
            bit_position,
            reason: MalformedReason::UnexpectedEndOfInput,
        }
    }

    /// Create a missing lookup entry error.
    pub fn missing_lookup(bit_position: u64) -> Self {
        Self::MalformedStream {
            bit_position,
            reason: MalformedReason::MissingLookupEntry,
        }
    }

    /// Returns `true` for errors caused by corrupt input rather than sizing.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedStream { .. })
    }
}

/// Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;
