//! # 比特布局
//!
//! 编码器与解码器共用的比特到像素映射以及容量计算。
//! 比特序号 `i` (覆盖包含长度前缀在内的整个载荷) 映射为：
//!
//! * 通道 = `i mod 3` (R → G → B 循环)
//! * 线性像素序号 = `i div 3`
//! * `x = 线性序号 mod W`，`y = 线性序号 div W` (行优先)

use crate::constants::{BITS_PER_BYTE, CARRIER_CHANNELS, LENGTH_PREFIX_BYTES, LSB_MASK};
use crate::pixel::Channel;

/// 单个载荷比特在图像中的位置。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitLocation {
    pub x: u32,
    pub y: u32,
    pub channel: Channel,
}

/// 计算第 `i` 个载荷比特所在的像素坐标和通道。
///
/// `width` 必须大于 0；调用方在容量检查通过后才会走到这里。
pub fn locate(i: u64, width: u32) -> BitLocation {
    let linear = i / CARRIER_CHANNELS;
    let width = u64::from(width);
    BitLocation {
        x: (linear % width) as u32,
        y: (linear / width) as u32,
        channel: Channel::from_bit_index(i),
    }
}

/// 取出载荷的第 `i` 个比特 (每个字节内高位在前)。
pub fn payload_bit(payload: &[u8], i: u64) -> u8 {
    let byte = payload[(i / BITS_PER_BYTE) as usize];
    let shift = BITS_PER_BYTE - 1 - i % BITS_PER_BYTE;
    (byte >> shift) & LSB_MASK
}

/// 图像可嵌入的总比特数：每个像素 3 比特，与是否存在 Alpha 通道无关。
pub fn capacity_bits(width: u32, height: u32) -> u64 {
    u64::from(width) * u64::from(height) * CARRIER_CHANNELS
}

/// 长度为 `message_len` 的消息连同长度前缀所需的比特数。
pub fn required_bits(message_len: usize) -> u64 {
    (message_len as u64 + LENGTH_PREFIX_BYTES as u64) * BITS_PER_BYTE
}

/// 图像最多能容纳的消息字符数。
pub fn max_message_len(width: u32, height: u32) -> u64 {
    (capacity_bits(width, height) / BITS_PER_BYTE).saturating_sub(LENGTH_PREFIX_BYTES as u64)
}
