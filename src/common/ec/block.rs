use std::ops::Deref;

use super::galois::Poly;
use crate::common::error::{QRError, QRResult};
use crate::common::metadata::{ECLevel, Version};

// Block splitter
//------------------------------------------------------------------------------

/// Splits data codewords into group 1 blocks followed by group 2 blocks.
pub fn blockify(data: &[u8], ver: Version, ecl: ECLevel) -> Vec<&[u8]> {
    let layout = ver.block_layout(ecl);
    let total_group1 = layout.group1_blocks * layout.group1_size;

    debug_assert!(
        layout.data_codewords() == data.len(),
        "Data len doesn't match total size of blocks: Data len {}, Total block size {}",
        data.len(),
        layout.data_codewords()
    );

    let mut blocks = Vec::with_capacity(layout.block_count());
    blocks.extend(data[..total_group1].chunks(layout.group1_size));
    if layout.group2_size > 0 {
        blocks.extend(data[total_group1..].chunks(layout.group2_size));
    }
    blocks
}

// Error correction
//------------------------------------------------------------------------------

// Remainder of the message polynomial by the generator polynomial
pub fn ecc_per_block(block: &[u8], gen_poly: &Poly) -> QRResult<Vec<u8>> {
    Ok(Poly::from_bytes(block).rem(gen_poly)?.to_bytes())
}

/// Data blocks and their error correction codewords.
pub fn ecc(data: &[u8], ver: Version, ecl: ECLevel) -> QRResult<(Vec<&[u8]>, Vec<Vec<u8>>)> {
    let data_blocks = blockify(data, ver, ecl);
    let gen_poly = Poly::generator(ver.ecc_per_block(ecl))?;
    let ecc_blocks =
        data_blocks.iter().map(|b| ecc_per_block(b, &gen_poly)).collect::<QRResult<Vec<_>>>()?;
    Ok((data_blocks, ecc_blocks))
}

// Interleaver
//------------------------------------------------------------------------------

// Round robin over blocks, shorter blocks drop out once exhausted
pub fn interleave<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
    let max_block_size = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
    let total_size = blocks.iter().map(|b| b.len()).sum::<usize>();
    let mut res = Vec::with_capacity(total_size);
    for i in 0..max_block_size {
        for b in blocks {
            if i < b.len() {
                res.push(b[i]);
            }
        }
    }
    res
}

/// Final codeword sequence: interleaved data followed by interleaved ecc.
pub fn interleaved_codewords(data: &[u8], ver: Version, ecl: ECLevel) -> QRResult<Vec<u8>> {
    let (data_blocks, ecc_blocks) = ecc(data, ver, ecl)?;
    let mut res = interleave(&data_blocks);
    res.extend(interleave(&ecc_blocks));

    let total = ver.total_codewords();
    match res.len() {
        len if len < total => Err(QRError::StreamUnderflow),
        len if len > total => Err(QRError::StreamOverflow),
        _ => Ok(res),
    }
}
