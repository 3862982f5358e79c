//! # 隐写编解码模块
//!
//! 把密码、成帧与比特打包串成完整的隐藏/揭示流程。每次调用都是对输入的
//! 一次性无状态变换，子步骤的错误原样向上传播。
//!
//! 约定：密码只作用于逻辑消息本身；哨兵字节在加密之后追加、解密之前剥离，
//! 编码与解码两侧对称。

use crate::error::StegoError;
use crate::{bitpack, cipher, framing};

/// 把 `message` 用 `key` 掩码后隐藏进 `pixels` 的最低有效位。
///
/// 容量不足时在任何像素字节被改写之前返回 [`StegoError::ImageTooSmall`]；
/// 空密钥返回 [`StegoError::InvalidKey`]。
pub fn hide_message(pixels: &mut [u8], message: &[u8], key: &[u8]) -> Result<(), StegoError> {
    let masked = cipher::encrypt(message, key)?;
    framing::ensure_fits(pixels.len(), masked.len())?;
    bitpack::hide(pixels, &framing::frame(&masked))
}

/// 从 `pixels` 的最低有效位中取回消息并用 `key` 还原。
///
/// 载体从未隐写过、密钥错误或哨兵缺失时不报错，返回的内容由调用方自行检验。
pub fn reveal_message(pixels: &[u8], key: &[u8]) -> Result<Vec<u8>, StegoError> {
    let masked = framing::unframe(bitpack::extract(pixels));
    cipher::decrypt(&masked, key)
}
