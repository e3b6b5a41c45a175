//! # 像素抽象
//!
//! 为承载隐写数据的像素类型提供按通道访问的强类型接口，
//! 只有 RGB 三个颜色通道参与嵌入。

use image::{Pixel, Rgb, Rgba};

/// 参与隐写的颜色通道。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// 按嵌入顺序排列的通道：R → G → B。
    pub const ORDER: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// 由比特序号取模得到的通道。
    pub fn from_bit_index(i: u64) -> Self {
        Self::ORDER[(i % Self::ORDER.len() as u64) as usize]
    }

    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// 可以承载隐写比特的 8 位像素。
///
/// 实现者保证前三个分量依次为 R、G、B；其余分量 (如 Alpha) 原样保留。
pub trait CarrierPixel: Pixel<Subpixel = u8> {
    /// 读取 R、G、B 三个通道的值。
    fn color(&self) -> [u8; 3];

    /// 获取指定颜色通道的可变引用。
    fn channel_mut(&mut self, channel: Channel) -> &mut u8;
}

impl CarrierPixel for Rgb<u8> {
    fn color(&self) -> [u8; 3] {
        self.0
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut u8 {
        &mut self.0[channel.index()]
    }
}

impl CarrierPixel for Rgba<u8> {
    fn color(&self) -> [u8; 3] {
        let [r, g, b, _] = self.0;
        [r, g, b]
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut u8 {
        &mut self.0[channel.index()]
    }
}
