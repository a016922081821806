//! Decompression pipeline: archive bytes in, original bytes out.
//!
//! The decoder needs no code table. It rebuilds the tree from the
//! header records and walks it bit by bit over the payload, left on 0
//! and right on 1, emitting a symbol at each leaf until the declared
//! original size is reached. The size field is what makes the final
//! padded byte unambiguous.

use huffarc_core::bitstream::BitReader;
use huffarc_core::error::{HuffArcError, Result};

use crate::encode::SIZE_FIELD;
use crate::serialize::{
    RECORD_SIZE, generate_tree_general, generate_tree_postorder, records_from_bytes,
};
use crate::tree::HuffmanTree;

/// Which tree-reconstruction algorithm to apply to the header records.
///
/// The format carries no version tag, so the choice is the caller's;
/// both orders accept every archive this crate emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeOrder {
    /// Kind-1 record values are absolute record indices
    /// (order-independent, the default).
    #[default]
    General,
    /// Records are in strict postorder; stored values are ignored.
    Postorder,
}

/// Summary of an archive header, without decoding the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveInfo {
    /// Number of serialized internal nodes.
    pub node_count: usize,
    /// Declared size of the original data in bytes.
    pub original_size: u64,
    /// Length of the packed payload in bytes.
    pub payload_len: usize,
}

/// Decompress an archive using the default tree reconstruction.
pub fn decompress(archive: &[u8]) -> Result<Vec<u8>> {
    decompress_with(archive, TreeOrder::default())
}

/// Decompress an archive, selecting the tree-reconstruction algorithm.
pub fn decompress_with(archive: &[u8], order: TreeOrder) -> Result<Vec<u8>> {
    let parsed = parse_header(archive)?;

    if parsed.info.node_count == 0 {
        if parsed.info.original_size != 0 {
            return Err(HuffArcError::corrupted(
                0,
                "archive declares data but serializes no tree",
            ));
        }
        return Ok(Vec::new());
    }

    let records = records_from_bytes(parsed.record_bytes)?;
    let root_index = parsed.info.node_count - 1;
    let tree = match order {
        TreeOrder::General => generate_tree_general(&records, root_index)?,
        TreeOrder::Postorder => generate_tree_postorder(&records, root_index)?,
    };

    let size = parsed.info.original_size as usize;
    let payload_offset = (archive.len() - parsed.payload.len()) as u64;
    let mut output = Vec::with_capacity(size);
    let mut reader = BitReader::new(parsed.payload);
    let mut node = &tree;

    while output.len() < size {
        let bit = reader.read_bit().map_err(|_| {
            HuffArcError::corrupted(
                payload_offset,
                format!("payload ended after {} of {size} symbols", output.len()),
            )
        })?;

        let HuffmanTree::Internal { left, right, .. } = node else {
            return Err(HuffArcError::corrupted(payload_offset, "malformed decode tree"));
        };
        node = if bit { right } else { left };

        if let HuffmanTree::Leaf { symbol } = node {
            output.push(*symbol);
            node = &tree;
        }
    }

    Ok(output)
}

/// Read an archive's header fields without decoding the payload.
pub fn archive_info(archive: &[u8]) -> Result<ArchiveInfo> {
    Ok(parse_header(archive)?.info)
}

struct ParsedHeader<'a> {
    info: ArchiveInfo,
    record_bytes: &'a [u8],
    payload: &'a [u8],
}

fn parse_header(archive: &[u8]) -> Result<ParsedHeader<'_>> {
    let (&count_byte, rest) = archive
        .split_first()
        .ok_or_else(|| HuffArcError::unexpected_eof(1))?;
    let node_count = count_byte as usize;

    let records_len = node_count * RECORD_SIZE;
    if rest.len() < records_len {
        return Err(HuffArcError::unexpected_eof(records_len - rest.len()));
    }
    let (record_bytes, rest) = rest.split_at(records_len);

    if rest.len() < SIZE_FIELD {
        return Err(HuffArcError::unexpected_eof(SIZE_FIELD - rest.len()));
    }
    let (size_bytes, payload) = rest.split_at(SIZE_FIELD);
    let size_bytes: [u8; SIZE_FIELD] = size_bytes
        .try_into()
        .map_err(|_| HuffArcError::unexpected_eof(SIZE_FIELD))?;
    let original_size = u32::from_le_bytes(size_bytes) as u64;

    Ok(ParsedHeader {
        info: ArchiveInfo {
            node_count,
            original_size,
            payload_len: payload.len(),
        },
        record_bytes,
        payload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::compress;

    #[test]
    fn test_empty_archive_decodes_to_empty() {
        let archive = vec![0, 0, 0, 0, 0];
        assert_eq!(decompress(&archive).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_truncated_header_is_an_error() {
        assert!(decompress(&[]).is_err());
        // Declares 2 records but carries none.
        assert!(decompress(&[2, 0, 1]).is_err());
        // Records complete, size field missing.
        assert!(decompress(&[1, 0, 3, 0, 2, 0, 0]).is_err());
    }

    #[test]
    fn test_short_payload_is_an_error() {
        // One record, declared size 10, but only one payload byte of
        // one-bit codes.
        let mut archive = vec![1, 0, 3, 0, 2];
        archive.extend_from_slice(&10u32.to_le_bytes());
        archive.push(0xFF);
        let err = decompress(&archive).unwrap_err();
        assert!(err.to_string().contains("payload ended"));
    }

    #[test]
    fn test_empty_tree_with_nonzero_size_is_an_error() {
        let mut archive = vec![0];
        archive.extend_from_slice(&5u32.to_le_bytes());
        assert!(decompress(&archive).is_err());
    }

    #[test]
    fn test_padding_bits_are_ignored() {
        // 3 one-bit symbols leave 5 pad bits in the single payload byte.
        let input = [9u8, 9, 9];
        let archive = compress(&input).unwrap();
        assert_eq!(decompress(&archive).unwrap(), input);
    }

    #[test]
    fn test_both_orders_decode_emitted_archives() {
        let input = b"postorder and general must agree on this";
        let archive = compress(input).unwrap();
        assert_eq!(decompress_with(&archive, TreeOrder::General).unwrap(), input);
        assert_eq!(decompress_with(&archive, TreeOrder::Postorder).unwrap(), input);
    }

    #[test]
    fn test_archive_info() {
        let input = vec![b'x'; 300];
        let archive = compress(&input).unwrap();
        let info = archive_info(&archive).unwrap();
        assert_eq!(info.node_count, 1);
        assert_eq!(info.original_size, 300);
        assert_eq!(info.payload_len, 300_usize.div_ceil(8));
    }
}
