//! Compression pipeline: raw bytes in, archive bytes out.
//!
//! Archive layout (little-endian throughout):
//!
//! ```text
//! offset 0     : 1 byte   - internal node count N (0 for empty input)
//! offset 1     : 4*N bytes - postorder node records
//! offset 1+4N  : 4 bytes  - original size, u32 LE
//! offset 5+4N  : rest     - packed codes, zero-padded to a byte boundary
//! ```

use huffarc_core::bitstream::BitWriter;
use huffarc_core::error::{HuffArcError, Result};

use crate::codes::CodeTable;
use crate::freq::FrequencyTable;
use crate::serialize::{RECORD_SIZE, tree_to_bytes};
use crate::tree::HuffmanTree;

/// Size of the original-size field in the archive header.
pub(crate) const SIZE_FIELD: usize = 4;

/// Compress `input` into a self-describing archive.
///
/// Empty input produces the degenerate archive `[0][size=0]` with no
/// tree records and no payload.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    let size = u32::try_from(input.len()).map_err(|_| {
        HuffArcError::invalid_input("input exceeds the 4 GiB capacity of the size field")
    })?;

    let freq = FrequencyTable::from_bytes(input);
    if freq.is_empty() {
        let mut archive = Vec::with_capacity(1 + SIZE_FIELD);
        archive.push(0);
        archive.extend_from_slice(&0u32.to_le_bytes());
        return Ok(archive);
    }

    let mut tree = HuffmanTree::from_frequencies(&freq)?;
    let codes = CodeTable::from_tree(&tree);
    let node_count = tree.number_nodes();
    if node_count > u8::MAX as usize {
        return Err(HuffArcError::alphabet_overflow(node_count));
    }

    let mut archive =
        Vec::with_capacity(1 + node_count * RECORD_SIZE + SIZE_FIELD + input.len() / 2 + 1);
    archive.push(node_count as u8);
    archive.extend_from_slice(&tree_to_bytes(&tree));
    archive.extend_from_slice(&size.to_le_bytes());

    let mut writer = BitWriter::with_capacity(input.len() / 2 + 1);
    for &byte in input {
        let code = codes.code(byte).ok_or_else(|| {
            HuffArcError::invalid_input(format!("symbol {byte} missing from code table"))
        })?;
        writer.write_code(code);
    }
    archive.extend_from_slice(&writer.into_vec());

    Ok(archive)
}
