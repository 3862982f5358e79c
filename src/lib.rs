//! # lsb_cloak 库
//!
//! 本库包含 XOR 掩码 LSB 隐写工具的核心逻辑。

// 声明库包含的所有模块。

pub mod bitpack;
pub mod cipher;
pub mod cli;
pub mod codec;
pub mod constants;
pub mod error;
pub mod framing;
pub mod handler;
