//! # OxiARC-Huffman: Static Byte-Oriented Huffman Coding
//!
//! This crate compresses byte buffers with a static Huffman code derived from
//! a 257-symbol frequency table (256 byte values plus an end-of-stream
//! symbol).
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Deterministic trees**: Identical frequency tables always yield
//!   identical codes, so encoder and decoder only share the table
//! - **Fast decoding**: 10-bit lookup table with tree-walk fallback
//! - **Caller-owned buffers**: No allocation on the compress/decompress path
//!
//! ## Wire Format
//!
//! - The code of every input byte, in order, packed LSB-first
//! - The end-of-stream code
//! - One trailing byte holding the leftover bits, zero-padded
//!
//! There is no header, length prefix or checksum; framing is left to the
//! caller.
//!
//! ## Example
//!
//! ```rust
//! use oxiarc_huffman::{compress, decompress};
//!
//! let original = b"Hello, Huffman!";
//!
//! let compressed = compress(original).unwrap();
//! let decompressed = decompress(&compressed, original.len()).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Custom Frequency Tables
//!
//! ```rust
//! use oxiarc_huffman::{FrequencyTable, Huffman};
//!
//! let data = b"abracadabra";
//! let huffman = Huffman::new(&FrequencyTable::from_data(data));
//!
//! let mut compressed = vec![0u8; huffman.compressed_len(data)];
//! let n = huffman.compress(data, &mut compressed).unwrap();
//!
//! let mut decompressed = vec![0u8; data.len()];
//! let m = huffman.decompress(&compressed[..n], &mut decompressed).unwrap();
//! assert_eq!(&decompressed[..m], data);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod codec;
pub mod config;
mod decoder;
mod encoder;
mod error;
mod frequency;
mod lut;
mod tree;

pub use codec::Huffman;
pub use decoder::HuffmanDecoder;
pub use encoder::HuffmanEncoder;
pub use error::{HuffmanError, MalformedReason, Result};
pub use frequency::{DEFAULT_FREQUENCIES, FrequencyTable};
pub use lut::DecodeLut;
pub use tree::{Code, HuffmanTree, Node};

/// Compress data with the default frequency table.
///
/// # Example
///
/// ```rust
/// use oxiarc_huffman::compress;
///
/// let compressed = compress(&[0, 0, 0, 0]).unwrap();
/// assert_eq!(compressed, [175, 184, 1]);
/// ```
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    compress_with(Huffman::shared(), data)
}

/// Compress data with the given codec.
///
/// The output buffer is sized exactly, so this only fails on internal bugs.
pub fn compress_with(huffman: &Huffman, data: &[u8]) -> Result<Vec<u8>> {
    let mut output = vec![0u8; huffman.compressed_len(data)];
    let written = huffman.compress(data, &mut output)?;
    output.truncate(written);
    Ok(output)
}

/// Decompress data produced with the default frequency table.
///
/// # Parameters
///
/// - `data`: Compressed stream
/// - `expected_size`: Output capacity; a longer stream fails with
///   [`HuffmanError::CapacityExceeded`]
///
/// # Example
///
/// ```rust
/// use oxiarc_huffman::decompress;
///
/// let decompressed = decompress(&[175, 184, 1], 4).unwrap();
/// assert_eq!(decompressed, [0, 0, 0, 0]);
/// ```
pub fn decompress(data: &[u8], expected_size: usize) -> Result<Vec<u8>> {
    decompress_with(Huffman::shared(), data, expected_size)
}

/// Decompress data with the given codec.
pub fn decompress_with(huffman: &Huffman, data: &[u8], expected_size: usize) -> Result<Vec<u8>> {
    let mut output = vec![0u8; expected_size];
    let written = huffman.decompress(data, &mut output)?;
    output.truncate(written);
    Ok(output)
}
