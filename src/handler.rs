//! # 命令处理逻辑模块
//!
//! 包含处理 `encode` 和 `decode` 子命令的高级业务逻辑。
//! 本模块负责图像的读写、调用核心编解码流程以及向用户报告结果。
//! 核心算法只操作展平的像素采样字节，几何信息 (宽、高) 只在重新编码图像时用到。

use crate::cli::{DecodeArgs, EncodeArgs};
use crate::codec::{hide_message, reveal_message};
use crate::framing;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// 处理 'Encode' 命令的执行逻辑。
///
/// 负责解码输入图像、检查隐写空间是否足够、调用编解码核心隐藏掩码后的消息，
/// 最后按输出路径的扩展名将像素重新编码写盘。
///
/// # Arguments
///
/// * `args` - 包含输入图像、消息、密钥与输出路径的 `EncodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入图像。
/// * 输出文件已存在且未指定 `--force`。
/// * 输出路径的扩展名不是受支持的图像格式。
/// * 图像没有足够的空间容纳掩码后的消息，或密钥为空。
/// * 无法写入目标图像文件。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let dest = args
        .dest
        .unwrap_or_else(|| default_dest_path(&args.image));

    anyhow::ensure!(
        args.force || !dest.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );

    ensure_supported_format(&dest)?;

    let img = image::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let mut pixels = img.to_rgb8();

    // 成帧需要在消息之外多写一个哨兵字节
    let required_space = args.message.len() + 1;
    let available_space = framing::capacity(pixels.as_raw().len());

    anyhow::ensure!(
        available_space >= required_space,
        "Not enough space in the image to hide the message. \nRequired: {} bytes, Available: {} bytes",
        required_space.to_string().red().bold(),
        available_space.to_string().green().bold()
    );

    hide_message(&mut pixels, args.message.as_bytes(), args.key.as_bytes()).with_context(
        || "Failed to hide the message in the image. \nCheck that the key is not empty.",
    )?;

    pixels.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 负责解码经过隐写的图像、调用编解码核心取回消息并还原掩码，
/// 最后把恢复的消息打印到标准输出。
///
/// # Arguments
///
/// * `args` - 包含输入图像与密钥的 `DecodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入图像。
/// * 密钥为空。
///
/// 图像从未隐写过或密钥不匹配时不会报错，只会得到乱码或空输出，
/// 由使用者自行判断。
pub fn handle_decode(args: DecodeArgs) -> Result<()> {
    let img = image::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let pixels = img.to_rgb8();

    let message = reveal_message(pixels.as_raw(), args.key.as_bytes()).with_context(|| {
        format!(
            "Failed to reveal a message from '{}'. \nCheck that the key is not empty.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    println!("{}", String::from_utf8_lossy(&message));

    Ok(())
}

/// 缺省输出路径：在输入图像所在目录生成 `doctored_<原文件名>`。
fn default_dest_path(image: &Path) -> PathBuf {
    let file_name = image
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output.png".to_string());
    image.with_file_name(format!("doctored_{file_name}"))
}

/// 输出格式由扩展名决定，只接受 PNG 与 JPEG。
fn ensure_supported_format(dest: &Path) -> Result<()> {
    let extension = dest
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    anyhow::ensure!(
        matches!(extension.as_deref(), Some("png" | "jpg" | "jpeg")),
        "Unsupported output format: {}. \nSupported extensions: png, jpg, jpeg",
        dest.to_string_lossy().red().bold()
    );

    Ok(())
}
