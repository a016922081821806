//! # Huffarc Codec
//!
//! Pure Rust Huffman coding of arbitrary byte streams with a
//! self-describing archive format.
//!
//! Compression scans the input for symbol frequencies, builds an
//! optimal prefix-code tree by greedy merging, derives per-symbol bit
//! codes from root-to-leaf paths, and packs the coded input MSB-first.
//! The tree itself ships inside the archive as fixed 4-byte postorder
//! node records, so decompression needs no side channel: it rebuilds
//! the tree and walks it bit by bit until the declared original size
//! has been produced.
//!
//! ## Archive format
//!
//! ```text
//! [node_count: u8][node_count x 4-byte records][size: u32 LE][payload]
//! ```
//!
//! No magic number, version tag, or checksum is defined; consumers that
//! need forward compatibility must wrap the archive themselves.
//!
//! ## Example
//!
//! ```rust
//! use huffarc_codec::{compress, decompress};
//!
//! let original = b"so much depends upon a red wheel barrow";
//! let archive = compress(original).unwrap();
//! let restored = decompress(&archive).unwrap();
//! assert_eq!(restored, original);
//! ```
//!
//! The individual pipeline stages ([`FrequencyTable`], [`HuffmanTree`],
//! [`CodeTable`], the record serializer) are public for callers that
//! want to inspect or post-process trees, e.g. with [`improve_tree`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod codes;
pub mod decode;
pub mod encode;
pub mod freq;
pub mod serialize;
pub mod tree;

// Re-exports
pub use codes::CodeTable;
pub use decode::{ArchiveInfo, TreeOrder, archive_info, decompress, decompress_with};
pub use encode::compress;
pub use freq::FrequencyTable;
pub use serialize::{ChildRecord, ReadNode, RECORD_SIZE};
pub use tree::{HuffmanTree, avg_length, improve_tree};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_text() {
        let original = b"the quick brown fox jumps over the lazy dog";
        let archive = compress(original).unwrap();
        assert_eq!(decompress(&archive).unwrap(), original);
    }

    #[test]
    fn test_roundtrip_empty() {
        let archive = compress(b"").unwrap();
        assert_eq!(decompress(&archive).unwrap(), b"");
    }

    #[test]
    fn test_stage_composition_matches_pipeline() {
        let input = b"abracadabra";
        let freq = FrequencyTable::from_bytes(input);
        let tree = HuffmanTree::from_frequencies(&freq).unwrap();
        let codes = CodeTable::from_tree(&tree);

        let coded_bits: usize = input
            .iter()
            .map(|&b| codes.code(b).map_or(0, str::len))
            .sum();
        let archive = compress(input).unwrap();
        let header = 1 + tree.count_internal() * RECORD_SIZE + 4;
        assert_eq!(archive.len(), header + coded_bits.div_ceil(8));
    }
}
