//! # lsb_text 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：在图像 RGB 通道的最低有效位中
//! 嵌入或提取带 4 字节长度前缀的 ASCII 消息。
//!
//! 核心函数 [`encode`] 与 [`decode`] 只操作内存中的 [`image::DynamicImage`]，
//! 不做任何文件 I/O；文件读写由 [`handler`] 模块负责。
//!
//! ```
//! use image::{DynamicImage, RgbImage};
//! use lsb_text::{decode, encode};
//!
//! let cover = DynamicImage::ImageRgb8(RgbImage::new(10, 10));
//! let doctored = encode(&cover, "Hi").unwrap();
//! assert_eq!(decode(&doctored).unwrap(), "Hi");
//! ```

// 声明库包含的所有模块。

pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod layout;
pub mod payload;
pub mod pixel;
pub mod steganography;

pub use error::{Malformed, Result, StegoError};
pub use steganography::{decode, encode};
