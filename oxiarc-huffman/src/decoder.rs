//! Huffman decoder (decompression).
//!
//! Symbols are resolved through the [`DecodeLut`] first; codes longer than
//! the table width continue from the returned internal node one bit at a time.

use crate::config::{EOF_SYMBOL, LUT_BITS, LUT_MASK, NO_NODE, REFILL_THRESHOLD};
use crate::error::{HuffmanError, Result};
use crate::lut::DecodeLut;
use crate::tree::HuffmanTree;
use log::{debug, trace};

/// LSB-first bit reader over a byte slice.
#[derive(Debug)]
struct SliceBitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Next byte to load.
    byte_pos: usize,
    /// Bit buffer (LSB-first).
    buffer: u64,
    /// Number of valid bits in buffer.
    bits_in_buffer: u32,
    /// Total bits consumed (for error reporting).
    total_bits_read: u64,
}

impl<'a> SliceBitReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    #[inline]
    fn refill(&mut self) {
        while self.bits_in_buffer < REFILL_THRESHOLD && self.byte_pos < self.data.len() {
            self.buffer |= u64::from(self.data[self.byte_pos]) << self.bits_in_buffer;
            self.byte_pos += 1;
            self.bits_in_buffer += 8;
        }
    }

    /// Lookup index from the pending bits; missing bits read as zero.
    #[inline]
    fn peek_prefix(&self) -> usize {
        (self.buffer & LUT_MASK) as usize
    }

    #[inline]
    fn consume(&mut self, count: u32) -> Result<()> {
        if count > self.bits_in_buffer {
            return Err(self.unexpected_end());
        }
        self.buffer >>= count;
        self.bits_in_buffer -= count;
        self.total_bits_read += u64::from(count);
        Ok(())
    }

    /// Take one bit, loading more input if the buffer is empty.
    #[inline]
    fn read_bit(&mut self) -> Result<usize> {
        if self.bits_in_buffer == 0 {
            self.refill();
        }
        let bit = (self.buffer & 1) as usize;
        self.consume(1)?;
        Ok(bit)
    }

    fn unexpected_end(&self) -> HuffmanError {
        debug!(
            "huffman stream ended after {} bits ({} input bytes)",
            self.total_bits_read,
            self.data.len()
        );
        HuffmanError::unexpected_end(self.total_bits_read)
    }
}

/// Huffman decoder bound to a tree and its lookup table.
#[derive(Debug, Clone, Copy)]
pub struct HuffmanDecoder<'a> {
    tree: &'a HuffmanTree,
    lut: &'a DecodeLut,
}

impl<'a> HuffmanDecoder<'a> {
    /// Create a decoder. `lut` must have been built from `tree`.
    pub fn new(tree: &'a HuffmanTree, lut: &'a DecodeLut) -> Self {
        Self { tree, lut }
    }

    /// Decode `input` into `output`, returning the number of bytes written.
    ///
    /// Decoding stops at the end-of-stream symbol; anything after it is
    /// ignored. Errors leave `output` in an unspecified state.
    pub fn decode(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let mut reader = SliceBitReader::new(input);
        let mut written = 0;

        loop {
            reader.refill();

            let mut index = self.lut.get(reader.peek_prefix());
            if index == NO_NODE {
                debug!(
                    "no lookup entry for prefix {:#05x} at bit {}",
                    reader.peek_prefix(),
                    reader.total_bits_read
                );
                return Err(HuffmanError::missing_lookup(reader.total_bits_read));
            }

            let node = self.tree.node(index);
            if node.is_leaf() {
                reader.consume(node.code().len())?;
            } else {
                reader.consume(LUT_BITS)?;
                trace!("lookup miss at bit {}, walking tree", reader.total_bits_read);
                loop {
                    index = self.tree.child(index, reader.read_bit()?);
                    if self.tree.node(index).is_leaf() {
                        break;
                    }
                }
            }

            if index as usize == EOF_SYMBOL {
                break;
            }

            let Some(slot) = output.get_mut(written) else {
                return Err(HuffmanError::capacity_exceeded(output.len()));
            };
            *slot = index as u8;
            written += 1;
        }

        Ok(written)
    }
}
