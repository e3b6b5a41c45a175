//! # 核心隐写算法
//!
//! 在 RGB 通道的最低有效位中嵌入或提取带长度前缀的 ASCII 消息。
//! 两个函数都只操作内存中的图像，不做任何文件 I/O，且从不修改传入的图像。

use crate::constants::{BITS_PER_BYTE, LSB_MASK};
use crate::error::{Result, StegoError};
use crate::layout::{capacity_bits, locate, payload_bit};
use crate::payload;
use crate::pixel::CarrierPixel;
use image::{DynamicImage, GenericImageView, ImageBuffer};

/// 将 `message` 嵌入图像，返回一张新图像。
///
/// RGB8 与 RGBA8 图像保持原有通道布局，其他布局统一转换为 RGBA8。
///
/// # Errors
///
/// * [`StegoError::InvalidPayload`] - 消息含非 ASCII 字符。
/// * [`StegoError::MessageTooLong`] - 消息长度超出 32 位长度前缀。
/// * [`StegoError::InsufficientCapacity`] - 图像容量不足；此时不会复制或转换图像。
pub fn encode(image: &DynamicImage, message: &str) -> Result<DynamicImage> {
    let payload = payload::build(message)?;

    let (width, height) = GenericImageView::dimensions(image);
    let available = capacity_bits(width, height);
    let required = payload.len() as u64 * BITS_PER_BYTE;
    if available < required {
        return Err(StegoError::InsufficientCapacity {
            required,
            available,
        });
    }

    log::debug!(
        "Embedding {} message bytes ({required} of {available} bits) into {width}x{height} image",
        message.len()
    );

    let encoded = match image {
        DynamicImage::ImageRgb8(buffer) => DynamicImage::ImageRgb8(embed(buffer.clone(), &payload)),
        DynamicImage::ImageRgba8(buffer) => {
            DynamicImage::ImageRgba8(embed(buffer.clone(), &payload))
        }
        other => {
            log::info!("Converting {:?} image to RGBA8 before embedding", other.color());
            DynamicImage::ImageRgba8(embed(other.to_rgba8(), &payload))
        }
    };

    Ok(encoded)
}

/// 从图像中提取隐藏的消息。
///
/// # Errors
///
/// 提取出的字节不足以构成长度前缀、声明的长度超过剩余字节、
/// 或消息中出现非 ASCII 字节时返回 [`StegoError::MalformedPayload`]。
pub fn decode(image: &DynamicImage) -> Result<String> {
    let bytes = match image {
        DynamicImage::ImageRgb8(buffer) => extract(buffer),
        DynamicImage::ImageRgba8(buffer) => extract(buffer),
        other => extract(&other.to_rgb8()),
    };

    log::debug!("Extracted {} bytes from image LSBs", bytes.len());

    payload::parse(&bytes)
}

/// 把载荷的每个比特写入其对应通道的最低位，其余比特保持不变。
fn embed<P: CarrierPixel>(
    mut buffer: ImageBuffer<P, Vec<u8>>,
    payload: &[u8],
) -> ImageBuffer<P, Vec<u8>> {
    let width = buffer.width();
    let total = payload.len() as u64 * BITS_PER_BYTE;

    for i in 0..total {
        let location = locate(i, width);
        let value = buffer
            .get_pixel_mut(location.x, location.y)
            .channel_mut(location.channel);
        *value = (*value & !LSB_MASK) | payload_bit(payload, i);
    }

    buffer
}

/// 按行优先顺序读取每个像素 R、G、B 的最低位，并按高位在前打包成字节。
///
/// 末尾不足 8 比特的部分被丢弃。
fn extract<P: CarrierPixel>(buffer: &ImageBuffer<P, Vec<u8>>) -> Vec<u8> {
    let total_bits = capacity_bits(buffer.width(), buffer.height());
    let mut bytes = Vec::with_capacity((total_bits / BITS_PER_BYTE) as usize);

    let mut current = 0u8;
    let mut filled = 0;
    for bit in buffer
        .pixels()
        .flat_map(|pixel| pixel.color())
        .map(|value| value & LSB_MASK)
    {
        current = (current << 1) | bit;
        filled += 1;
        if filled == BITS_PER_BYTE {
            bytes.push(current);
            current = 0;
            filled = 0;
        }
    }

    bytes
}
