//! # 载荷成帧模块
//!
//! 定义消息在比特流中如何定界：帧没有显式的长度前缀，而是在载荷末尾追加一个
//! 哨兵字节 (0x00)，提取时读到哨兵即认为消息结束。
//!
//! 结构性限制：成帧前的载荷 (即加密后的消息) 不能含有 0x00 字节，否则提取会
//! 提前终止。这是该定界方案固有的约束；若以后改用长度前缀帧，只需替换本模块，
//! [`crate::bitpack`] 与 [`crate::cipher`] 无需改动。

use crate::constants::{CARRIER_BYTES_PER_PAYLOAD_BYTE, HEADER_OFFSET, SENTINEL};
use crate::error::StegoError;

/// 长度为 `carrier_len` 的载体能容纳的成帧字节数上限 (含哨兵)。
pub fn capacity(carrier_len: usize) -> usize {
    carrier_len.saturating_sub(HEADER_OFFSET) / CARRIER_BYTES_PER_PAYLOAD_BYTE
}

/// 在载荷末尾追加哨兵字节，得到写入载体的完整帧。
pub fn frame(payload: &[u8]) -> Vec<u8> {
    let mut framed = Vec::with_capacity(payload.len() + 1);
    framed.extend_from_slice(payload);
    framed.push(SENTINEL);
    framed
}

/// 从重组出的字节流中收集载荷：遇到第一个哨兵字节即停止，哨兵不计入结果。
///
/// 字节流在找到哨兵前耗尽时，返回已累积的内容而不报错。解码一个从未隐写过
/// 或被截断的载体会静默得到乱码或空序列，由调用方自行检验。
pub fn unframe(bytes: impl Iterator<Item = u8>) -> Vec<u8> {
    bytes.take_while(|&byte| byte != SENTINEL).collect()
}

/// 成帧前检查 `payload_len` 字节的载荷加上哨兵能否放进载体，
/// 放不下时返回 [`StegoError::ImageTooSmall`]。
pub fn ensure_fits(carrier_len: usize, payload_len: usize) -> Result<(), StegoError> {
    let framed_len = payload_len + 1;
    if framed_len > capacity(carrier_len) {
        return Err(StegoError::ImageTooSmall {
            required: framed_len * CARRIER_BYTES_PER_PAYLOAD_BYTE,
            available: carrier_len.saturating_sub(HEADER_OFFSET),
        });
    }
    Ok(())
}
