//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{CapacityArgs, HideArgs, RecoverArgs};
use crate::constants::{HIDDEN_IMAGE_PREFIX, RECOVERED_TEXT_PREFIX};
use crate::error::StegoError;
use crate::layout::{capacity_bits, max_message_len};
use crate::steganography::{decode, encode};
use anyhow::{Context, Result};
use colored::Colorize;
use image::{DynamicImage, GenericImageView};
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和文本、调用隐写核心函数嵌入文本，最后将结果写入目标图像文件。
/// 未指定 `dest` 时，结果保存在输入图像旁的 `doctored_<文件名>`。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像或文本文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 文本含有非 ASCII 字符，或图像没有足够的空间来隐藏文本。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let text = match (&args.text, args.message) {
        (Some(path), _) => fs::read_to_string(path).with_context(|| {
            format!(
                "Unable to read text file: {}",
                path.to_string_lossy().red().bold()
            )
        })?,
        (None, Some(message)) => message,
        (None, None) => anyhow::bail!("No text to hide. \nProvide either --text or --message."),
    };

    let dest = match args.dest {
        Some(dest) => dest,
        None => default_hidden_path(&args.image)?,
    };
    ensure_writable(&dest, args.force)?;

    let picture = open_image(&args.image)?;

    let doctored = match encode(&picture, &text) {
        Ok(doctored) => doctored,
        Err(StegoError::InsufficientCapacity {
            required,
            available,
        }) => anyhow::bail!(
            "Not enough space in the image to hide the text. \nRequired: {} bits, Available: {} bits",
            required.to_string().red().bold(),
            available.to_string().green().bold()
        ),
        Err(err) => {
            return Err(err).context("The text cannot be hidden in this image.");
        }
    };

    doctored.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    log::info!("Hid {} characters in {}", text.len(), dest.display());
    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用恢复核心函数提取文本，
/// 最后将恢复的文本内容写入目标文本文件。
/// 未指定 `text` 时，结果保存在图像旁的 `recovered_<文件名>.txt`。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 图像中提取出的数据不是合法的消息。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let text_path = match args.text {
        Some(path) => path,
        None => default_recovered_path(&args.image)?,
    };
    ensure_writable(&text_path, args.force)?;

    let picture = open_image(&args.image)?;

    let text = decode(&picture).with_context(|| {
        format!(
            "Failed to recover the hidden text from '{}'. \nThe image may not contain a hidden message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&text_path, &text).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            text_path.to_string_lossy().red().bold()
        )
    })?;

    log::info!("Recovered {} characters from {}", text.len(), args.image.display());
    println!(
        "The text has been successfully recovered and saved: {}",
        text_path.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Capacity' 命令的执行逻辑：打印图像尺寸、可用比特数和最多可隐藏的字符数。
///
/// # Errors
///
/// 无法读取输入的图像文件时返回错误。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let picture = open_image(&args.image)?;
    let (width, height) = picture.dimensions();

    println!(
        "{}: {}x{}, {} bits available, up to {} ASCII characters",
        args.image.to_string_lossy().bold(),
        width,
        height,
        capacity_bits(width, height).to_string().green(),
        max_message_len(width, height).to_string().green().bold()
    );
    Ok(())
}

/// `hide` 的默认输出路径：与输入图像同目录的 `doctored_<文件名>`。
///
/// # Errors
///
/// 输入路径没有文件名部分 (如 `..`) 时返回错误。
pub fn default_hidden_path(image: &Path) -> Result<PathBuf> {
    let file_name = image.file_name().with_context(|| {
        format!(
            "Unable to derive an output name from: {}",
            image.to_string_lossy().red().bold()
        )
    })?;
    Ok(image.with_file_name(format!(
        "{HIDDEN_IMAGE_PREFIX}{}",
        file_name.to_string_lossy()
    )))
}

/// `recover` 的默认输出路径：与图像同目录的 `recovered_<文件名>.txt`。
///
/// # Errors
///
/// 输入路径没有文件名部分时返回错误。
pub fn default_recovered_path(image: &Path) -> Result<PathBuf> {
    let stem = image.file_stem().with_context(|| {
        format!(
            "Unable to derive an output name from: {}",
            image.to_string_lossy().red().bold()
        )
    })?;
    Ok(image.with_file_name(format!(
        "{RECOVERED_TEXT_PREFIX}{}.txt",
        stem.to_string_lossy()
    )))
}

fn open_image(path: &Path) -> Result<DynamicImage> {
    let picture = image::open(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;
    log::debug!(
        "Loaded {}x{} {:?} image from {}",
        picture.width(),
        picture.height(),
        picture.color(),
        path.display()
    );
    Ok(picture)
}

/// 目标文件已存在且未指定 `--force` 时拒绝覆盖。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {} \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    if force && path.exists() {
        log::warn!("Overwriting existing file: {}", path.display());
    }
    Ok(())
}
