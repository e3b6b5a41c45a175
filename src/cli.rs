//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::{ArgAction, Args, Parser};
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，在无损格式图像 (如 PNG, BMP) 的 RGB 通道中隐藏或恢复 ASCII 文本。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，在无损格式图像 (如 PNG, BMP) 的 RGB 通道中隐藏或恢复 ASCII 文本。\n每个像素的 R、G、B 通道各承载 1 比特，消息前附 4 字节大端序长度。"
)]
pub struct Cli {
    /// 输出更详细的日志 (-v 为 info，-vv 为 debug)。
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide (隐藏)、recover (恢复) 和 capacity (容量)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在无损格式图像中隐藏 ASCII 文本。
    Hide(HideArgs),

    /// 从经过隐写的图像中恢复隐藏的文本。
    Recover(RecoverArgs),

    /// 显示图像最多可以隐藏多少个字符。
    Capacity(CapacityArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Args, Debug)]
pub struct HideArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文本内容的文件路径。
    #[arg(short, long, required_unless_present = "message", conflicts_with = "message")]
    pub text: Option<PathBuf>,

    /// 直接在命令行上给出要隐藏的文本。
    #[arg(short, long)]
    pub message: Option<String>,

    /// 结果图像的输出路径，默认在输入图像旁生成 `doctored_<文件名>`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 输出文件已存在时直接覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'recover' 命令所需的参数。
#[derive(Args, Debug)]
pub struct RecoverArgs {
    /// 已隐藏文本数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复文本的输出路径，默认在图像旁生成 `recovered_<文件名>.txt`。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 输出文件已存在时直接覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'capacity' 命令所需的参数。
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// 要查询容量的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,
}
