//! The [`Huffman`] codec: a built tree plus its decode lookup table.

use crate::decoder::HuffmanDecoder;
use crate::encoder::HuffmanEncoder;
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::lut::DecodeLut;
use crate::tree::{Code, HuffmanTree};
use std::sync::OnceLock;

/// A static Huffman codec.
///
/// Construction builds the node arena and the decode lookup table in one
/// step; both are immutable afterwards, so a `Huffman` can be shared by
/// reference across threads and used for any number of concurrent
/// [`compress`](Self::compress) / [`decompress`](Self::decompress) calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Huffman {
    frequencies: FrequencyTable,
    tree: HuffmanTree,
    lut: DecodeLut,
}

impl Huffman {
    /// Build a codec from `frequencies`.
    pub fn new(frequencies: &FrequencyTable) -> Self {
        let tree = HuffmanTree::build(frequencies);
        let lut = DecodeLut::build(&tree);
        Self {
            frequencies: *frequencies,
            tree,
            lut,
        }
    }

    /// Process-wide codec for the default frequency table.
    ///
    /// Built on first use and cached.
    pub fn shared() -> &'static Huffman {
        static DEFAULT: OnceLock<Huffman> = OnceLock::new();
        DEFAULT.get_or_init(Huffman::default)
    }

    /// Replace the tree with one built from `frequencies`.
    pub fn rebuild(&mut self, frequencies: &FrequencyTable) {
        *self = Self::new(frequencies);
    }

    /// Table this codec was built from.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// The node arena.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// The decode lookup table.
    pub fn lut(&self) -> &DecodeLut {
        &self.lut
    }

    /// Code assigned to `symbol` (0..=256).
    pub fn code(&self, symbol: usize) -> &Code {
        self.tree.code(symbol)
    }

    /// Compress `input` into `output`; see [`HuffmanEncoder::encode`].
    pub fn compress(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        HuffmanEncoder::new(&self.tree).encode(input, output)
    }

    /// Decompress `input` into `output`; see [`HuffmanDecoder::decode`].
    pub fn decompress(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        HuffmanDecoder::new(&self.tree, &self.lut).decode(input, output)
    }

    /// Exact size of [`compress`](Self::compress)'s output for `input`.
    pub fn compressed_len(&self, input: &[u8]) -> usize {
        HuffmanEncoder::new(&self.tree).encoded_len(input)
    }

    /// Upper bound on the compressed size of `input_len` arbitrary bytes.
    pub fn max_compressed_len(&self, input_len: usize) -> usize {
        HuffmanEncoder::new(&self.tree).max_encoded_len(input_len)
    }
}

impl Default for Huffman {
    fn default() -> Self {
        Self::new(&FrequencyTable::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_SYMBOLS;

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Huffman>();
    }

    #[test]
    fn test_shared_matches_default() {
        assert_eq!(Huffman::shared(), &Huffman::default());
        assert!(std::ptr::eq(Huffman::shared(), Huffman::shared()));
    }

    #[test]
    fn test_rebuild_replaces_tree() {
        let mut huffman = Huffman::default();
        assert_eq!(huffman.code(0).len(), 1);

        let table = FrequencyTable::from_data(b"zzzzzzzzzzzzzzzzzzzz");
        huffman.rebuild(&table);
        assert_eq!(huffman.frequencies(), &table);
        assert_eq!(huffman, Huffman::new(&table));
        assert_eq!(huffman.code(b'z' as usize).len(), 1);
    }

    #[test]
    fn test_independent_builds_agree() {
        let table = FrequencyTable::from_data(b"mississippi river banks");
        let a = Huffman::new(&table);
        let b = Huffman::new(&table);
        for symbol in 0..MAX_SYMBOLS {
            assert_eq!(a.code(symbol), b.code(symbol));
        }

        let input = b"mississippi";
        let mut out_a = vec![0u8; a.compressed_len(input)];
        let mut out_b = vec![0u8; b.compressed_len(input)];
        a.compress(input, &mut out_a).unwrap();
        b.compress(input, &mut out_b).unwrap();
        assert_eq!(out_a, out_b);
    }

    #[test]
    fn test_round_trip() {
        let huffman = Huffman::default();
        let input = b"\0\0\0\0 static huffman \x01\x02\xff";

        let mut compressed = vec![0u8; huffman.max_compressed_len(input.len())];
        let n = huffman.compress(input, &mut compressed).unwrap();
        assert_eq!(n, huffman.compressed_len(input));

        let mut decompressed = vec![0u8; input.len()];
        let m = huffman.decompress(&compressed[..n], &mut decompressed).unwrap();
        assert_eq!(&decompressed[..m], input);
    }
}
