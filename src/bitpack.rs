//! # 比特打包模块
//!
//! 负责字节序列与载体最低有效位之间的双向转换。本模块只管比特的搬运，
//! 不关心消息如何定界，定界约定见 [`crate::framing`]。

use crate::constants::{CARRIER_BYTES_PER_PAYLOAD_BYTE, HEADER_OFFSET};
use crate::error::StegoError;

/// 从 `HEADER_OFFSET` 开始，把 `data` 的每个比特 (字节按原序，字节内高位在前)
/// 写入连续载体字节的最低有效位，其余 7 位保持不变。
///
/// 容量在写入前一次性检查，空间不足时返回 [`StegoError::ImageTooSmall`]，
/// 此时载体未被改动。
pub fn hide(carrier: &mut [u8], data: &[u8]) -> Result<(), StegoError> {
    let required = data.len() * CARRIER_BYTES_PER_PAYLOAD_BYTE;
    let available = carrier.len().saturating_sub(HEADER_OFFSET);

    if required > available {
        return Err(StegoError::ImageTooSmall {
            required,
            available,
        });
    }

    let window = &mut carrier[HEADER_OFFSET..HEADER_OFFSET + required];

    for (i, carrier_byte) in window.iter_mut().enumerate() {
        let bit = (data[i / 8] >> (7 - i % 8)) & 1;
        *carrier_byte = (*carrier_byte & 0xFE) | bit;
    }

    Ok(())
}

/// 按与 [`hide`] 相同的比特顺序，从 `HEADER_OFFSET` 开始读取载体最低有效位，
/// 每 8 位重组为一个字节的迭代器。末尾不足 8 位的比特组被丢弃。
pub fn extract(carrier: &[u8]) -> impl Iterator<Item = u8> + '_ {
    carrier
        .get(HEADER_OFFSET..)
        .unwrap_or(&[])
        .chunks_exact(CARRIER_BYTES_PER_PAYLOAD_BYTE)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &byte| (acc << 1) | (byte & 1)))
}
