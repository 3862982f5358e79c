//! # 错误类型模块
//!
//! 定义隐写核心算法产生的所有错误种类。
//! 文件与图像 I/O 的失败不属于这里，由上层处理逻辑通过 `anyhow` 处理。

use thiserror::Error;

/// 隐写核心操作的错误类型。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StegoError {
    /// 密钥长度为零。在任何变换开始前立即返回。
    #[error("The key must not be empty.")]
    InvalidKey,

    /// 头部偏移之后的载体字节不足以容纳全部载荷比特。
    /// 在任何载体字节被改写之前返回，载体保持原样。
    #[error(
        "The image is too small to hold the payload. Required: {required} carrier bytes, available: {available}."
    )]
    ImageTooSmall { required: usize, available: usize },
}
