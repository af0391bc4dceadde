//! Decode lookup table.
//!
//! Indexed by the next [`LUT_BITS`] pending bits (LSB-first). An entry is
//! either the leaf those bits resolve to (the decoder then consumes only that
//! leaf's code length), or the internal node reached after consuming all
//! [`LUT_BITS`] bits, from which the decoder continues bit by bit.

use crate::config::{LUT_BITS, LUT_SIZE, NO_NODE};
use crate::tree::HuffmanTree;

/// Lookup table mapping short bit prefixes to arena nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeLut {
    entries: Box<[u16; LUT_SIZE]>,
}

impl DecodeLut {
    /// Build the table by walking `tree` once per prefix.
    pub fn build(tree: &HuffmanTree) -> Self {
        let mut entries = Box::new([NO_NODE; LUT_SIZE]);

        for (prefix, entry) in entries.iter_mut().enumerate() {
            let mut index = tree.root();
            for k in 0..LUT_BITS {
                index = tree.child(index, (prefix >> k) & 1);
                if tree.node(index).is_leaf() {
                    break;
                }
            }
            *entry = index;
        }

        Self { entries }
    }

    /// Arena index for `prefix`, or [`NO_NODE`] if unmapped.
    #[inline]
    pub fn get(&self, prefix: usize) -> u16 {
        self.entries[prefix]
    }

    /// Number of prefixes that resolve straight to a leaf.
    pub fn leaf_hits(&self, tree: &HuffmanTree) -> usize {
        self.entries
            .iter()
            .filter(|&&index| index != NO_NODE && tree.node(index).is_leaf())
            .count()
    }
}
