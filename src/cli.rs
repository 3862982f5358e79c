//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在 PNG/JPEG 图像中隐藏或揭示经 XOR 掩码的文本。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在 PNG/JPEG 图像中隐藏或揭示经 XOR 掩码的文本。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：encode (隐藏) 和 decode (揭示)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 把一段消息用密钥掩码后隐藏进图像 (PNG, JPEG)。
    Encode(EncodeArgs),

    /// 用相同的密钥从经过隐写的图像中揭示隐藏的消息。
    Decode(DecodeArgs),
}

/// 'encode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// 用于隐写的输入图像文件路径 (PNG, JPEG)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的消息内容。
    #[arg(short, long)]
    pub message: String,

    /// 掩码消息所用的密钥，不能为空。
    #[arg(short, long)]
    pub key: String,

    /// 隐写完成后，保存结果图像的输出路径。
    /// 缺省时在输入图像所在目录生成 `doctored_<原文件名>`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 输出文件已存在时允许覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'decode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// 已隐藏消息的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 隐写时使用的密钥，不能为空。
    #[arg(short, long)]
    pub key: String,
}
