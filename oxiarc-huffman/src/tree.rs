//! Deterministic Huffman tree construction.
//!
//! The tree lives in a flat arena of [`MAX_NODES`] nodes. Leaves occupy
//! indices `0..=256` (index = symbol value) and internal nodes occupy
//! `257..=512` in creation order. Children are referenced by arena index,
//! with [`NO_NODE`] marking a leaf.
//!
//! # Canonical ordering
//!
//! Encoder and decoder never exchange the tree, only the frequency table, so
//! construction must yield the same codes in every implementation. Each merge
//! pass stable-sorts the active nodes by descending weight, then merges the
//! last two entries: the last (lowest) becomes child 0, the second-to-last
//! becomes child 1, and the merged node takes the second-to-last position.

use crate::config::{EOF_SYMBOL, MAX_CODE_LENGTH, MAX_NODES, MAX_SYMBOLS, NO_NODE};
use crate::frequency::FrequencyTable;
use log::debug;

const CODE_WORDS: usize = MAX_CODE_LENGTH / 64;

/// A bit pattern and its length.
///
/// Bit 0 of the pattern is the first bit on the wire. Patterns are stored in
/// 256 bits because heavily skewed tables (many zero weights) produce codes up
/// to [`MAX_CODE_LENGTH`] bits long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Code {
    words: [u64; CODE_WORDS],
    len: u16,
}

impl Code {
    /// The zero-length code carried by the root.
    pub const EMPTY: Self = Self {
        words: [0; CODE_WORDS],
        len: 0,
    };

    /// Number of bits in the code.
    pub fn len(&self) -> u32 {
        u32::from(self.len)
    }

    /// Returns `true` for the root's zero-length code.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first 64 bits of the pattern.
    pub fn bits(&self) -> u64 {
        self.words[0]
    }

    /// Bit `index` of the pattern (0 = first bit written).
    pub fn bit(&self, index: usize) -> bool {
        index < self.len as usize && (self.words[index / 64] >> (index % 64)) & 1 == 1
    }

    /// Extend the code by one bit.
    fn push(mut self, one: bool) -> Self {
        debug_assert!((self.len as usize) < MAX_CODE_LENGTH);
        let i = self.len as usize;
        if one {
            self.words[i / 64] |= 1 << (i % 64);
        }
        self.len += 1;
        self
    }

    /// `count` bits (at most 32) starting at bit `offset`.
    #[inline]
    pub(crate) fn chunk(&self, offset: u32, count: u32) -> u64 {
        debug_assert!(count <= 32);
        let word = (offset / 64) as usize;
        let shift = offset % 64;

        let mut value = self.words[word] >> shift;
        if shift != 0 && word + 1 < CODE_WORDS {
            value |= self.words[word + 1] << (64 - shift);
        }
        value & ((1u64 << count) - 1)
    }
}

/// A node of the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    children: [u16; 2],
    code: Code,
}

impl Node {
    const LEAF: Self = Self {
        children: [NO_NODE; 2],
        code: Code::EMPTY,
    };

    /// Returns `true` if this node is bound to a symbol.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children[0] == NO_NODE
    }

    /// Arena indices of the two children, [`NO_NODE`] for leaves.
    pub fn children(&self) -> [u16; 2] {
        self.children
    }

    /// Path from the root to this node.
    pub fn code(&self) -> &Code {
        &self.code
    }

    /// Distance from the root.
    pub fn depth(&self) -> u32 {
        self.code.len()
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveNode {
    id: u16,
    weight: u64,
}

/// An immutable Huffman tree built from a [`FrequencyTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Box<[Node]>,
    root: u16,
}

impl HuffmanTree {
    /// Build the tree and assign a code to every node.
    pub fn build(frequencies: &FrequencyTable) -> Self {
        let mut nodes = vec![Node::LEAF; MAX_NODES].into_boxed_slice();

        let mut active: Vec<ActiveNode> = (0..MAX_SYMBOLS)
            .map(|symbol| ActiveNode {
                id: symbol as u16,
                weight: u64::from(frequencies.weight(symbol)),
            })
            .collect();

        let mut next = MAX_SYMBOLS;
        while active.len() > 1 {
            // Stable: equal weights keep their relative order from the last pass.
            active.sort_by(|a, b| b.weight.cmp(&a.weight));

            let Some(lowest) = active.pop() else { break };
            let Some(second) = active.last_mut() else { break };

            nodes[next].children = [lowest.id, second.id];
            second.id = next as u16;
            second.weight += lowest.weight;
            next += 1;
        }

        // 257 leaves always merge into exactly 256 internal nodes.
        debug_assert_eq!(next, MAX_NODES);
        let root = active[0].id;
        debug_assert!(!nodes[root as usize].is_leaf());

        assign_codes(&mut nodes, root);

        let tree = Self { nodes, root };
        debug!(
            "built huffman tree: root={}, max code length={}, eof code length={}",
            tree.root,
            tree.max_code_length(),
            tree.code(EOF_SYMBOL).len()
        );
        tree
    }

    /// Arena index of the root.
    pub fn root(&self) -> u16 {
        self.root
    }

    /// All arena nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The node at arena index `index`.
    #[inline]
    pub fn node(&self, index: u16) -> &Node {
        &self.nodes[index as usize]
    }

    /// Child `bit` (0 or 1) of an internal node.
    #[inline]
    pub fn child(&self, index: u16, bit: usize) -> u16 {
        self.nodes[index as usize].children[bit]
    }

    /// Code assigned to `symbol` (0..=256).
    #[inline]
    pub fn code(&self, symbol: usize) -> &Code {
        debug_assert!(symbol < MAX_SYMBOLS);
        &self.nodes[symbol].code
    }

    /// Longest code over all symbols.
    pub fn max_code_length(&self) -> u32 {
        self.nodes[..MAX_SYMBOLS]
            .iter()
            .map(|n| n.code.len())
            .max()
            .unwrap_or(0)
    }
}

/// Walk down from the root; descending into child 1 appends a `1` bit.
fn assign_codes(nodes: &mut [Node], root: u16) {
    let mut stack = Vec::with_capacity(MAX_CODE_LENGTH + 1);
    stack.push((root, Code::EMPTY));

    while let Some((index, code)) = stack.pop() {
        let node = &mut nodes[index as usize];
        node.code = code;
        if node.is_leaf() {
            continue;
        }

        let [zero, one] = node.children;
        stack.push((one, code.push(true)));
        stack.push((zero, code.push(false)));
    }
}
