//! Code table derivation.
//!
//! A symbol's code is its root-to-leaf path in the tree, "0" for a left
//! step and "1" for a right step. One symbol per leaf makes the
//! resulting code set prefix-free, which is what lets the decoder walk
//! the tree bit by bit without separators.

use std::collections::BTreeMap;

use crate::tree::HuffmanTree;

/// Mapping from symbol to its '0'/'1' code string, derived from a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, String>,
}

impl CodeTable {
    /// Derive the code for every leaf of `tree`.
    ///
    /// A bare leaf at the root (which no builder in this crate
    /// produces) gets the one-bit code "1" so no symbol ever has an
    /// empty code.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();
        match tree {
            HuffmanTree::Leaf { symbol } => {
                codes.insert(*symbol, "1".to_string());
            }
            HuffmanTree::Internal { .. } => {
                walk(tree, String::new(), &mut codes);
            }
        }
        Self { codes }
    }

    /// The code for `symbol`, if the tree has a leaf for it.
    pub fn code(&self, symbol: u8) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        self.codes.iter().map(|(&s, c)| (s, c.as_str()))
    }

    /// Check that no code is a proper prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&String> = self.codes.values().collect();
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                if a.starts_with(b.as_str()) || b.starts_with(a.as_str()) {
                    return false;
                }
            }
        }
        true
    }
}

fn walk(node: &HuffmanTree, prefix: String, codes: &mut BTreeMap<u8, String>) {
    match node {
        HuffmanTree::Leaf { symbol } => {
            codes.insert(*symbol, prefix);
        }
        HuffmanTree::Internal { left, right, .. } => {
            walk(left, format!("{prefix}0"), codes);
            walk(right, format!("{prefix}1"), codes);
        }
    }
}
