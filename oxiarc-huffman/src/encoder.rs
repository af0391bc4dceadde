//! Huffman encoder (compression).

use crate::config::EOF_SYMBOL;
use crate::error::{HuffmanError, Result};
use crate::tree::{Code, HuffmanTree};

/// LSB-first bit packer writing into a caller-owned slice.
#[derive(Debug)]
struct SliceBitWriter<'a> {
    /// Output buffer.
    output: &'a mut [u8],
    /// Bytes written so far.
    pos: usize,
    /// Pending bits (LSB-first).
    buffer: u64,
    /// Number of valid bits in buffer (always < 8 between codes).
    bits_in_buffer: u32,
}

impl<'a> SliceBitWriter<'a> {
    fn new(output: &'a mut [u8]) -> Self {
        Self {
            output,
            pos: 0,
            buffer: 0,
            bits_in_buffer: 0,
        }
    }

    #[inline]
    fn put_byte(&mut self, byte: u8) -> Result<()> {
        let Some(slot) = self.output.get_mut(self.pos) else {
            return Err(HuffmanError::capacity_exceeded(self.output.len()));
        };
        *slot = byte;
        self.pos += 1;
        Ok(())
    }

    #[inline]
    fn flush_bytes(&mut self) -> Result<()> {
        while self.bits_in_buffer >= 8 {
            self.put_byte(self.buffer as u8)?;
            self.buffer >>= 8;
            self.bits_in_buffer -= 8;
        }
        Ok(())
    }

    /// Append a code, 32 bits at a time so the buffer never overflows.
    #[inline]
    fn write_code(&mut self, code: &Code) -> Result<()> {
        let len = code.len();
        let mut offset = 0;
        while offset < len {
            let count = (len - offset).min(32);
            self.buffer |= code.chunk(offset, count) << self.bits_in_buffer;
            self.bits_in_buffer += count;
            self.flush_bytes()?;
            offset += count;
        }
        Ok(())
    }

    /// Write the final partial byte (zero-padded, possibly empty).
    fn finish(mut self) -> Result<usize> {
        self.put_byte(self.buffer as u8)?;
        Ok(self.pos)
    }
}

/// Huffman encoder bound to a tree.
#[derive(Debug, Clone, Copy)]
pub struct HuffmanEncoder<'a> {
    tree: &'a HuffmanTree,
}

impl<'a> HuffmanEncoder<'a> {
    /// Create an encoder for `tree`.
    pub fn new(tree: &'a HuffmanTree) -> Self {
        Self { tree }
    }

    /// Encode `input` into `output`, returning the number of bytes written.
    ///
    /// The stream is every input byte's code followed by the end-of-stream
    /// code, then one trailing byte holding the leftover bits. Running out of
    /// space fails with [`HuffmanError::CapacityExceeded`]; the contents of
    /// `output` are unspecified afterwards.
    pub fn encode(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let mut writer = SliceBitWriter::new(output);

        for &byte in input {
            writer.write_code(self.tree.code(byte as usize))?;
        }
        writer.write_code(self.tree.code(EOF_SYMBOL))?;

        writer.finish()
    }

    /// Exact number of bytes [`encode`](Self::encode) produces for `input`.
    pub fn encoded_len(&self, input: &[u8]) -> usize {
        let bits: u64 = input
            .iter()
            .map(|&b| u64::from(self.tree.code(b as usize).len()))
            .sum::<u64>()
            + u64::from(self.tree.code(EOF_SYMBOL).len());
        (bits / 8) as usize + 1
    }

    /// Upper bound on the encoded size of any `input_len` bytes.
    pub fn max_encoded_len(&self, input_len: usize) -> usize {
        let longest = (0..256)
            .map(|s| u64::from(self.tree.code(s).len()))
            .max()
            .unwrap_or(0);
        let bits = (input_len as u64)
            .saturating_mul(longest)
            .saturating_add(u64::from(self.tree.code(EOF_SYMBOL).len()));
        usize::try_from(bits / 8 + 1).unwrap_or(usize::MAX)
    }
}
