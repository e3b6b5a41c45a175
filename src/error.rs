//! # 错误类型模块
//!
//! 核心隐写算法的全部失败情形。库层只返回 [`StegoError`]，
//! 由命令行层再用 `anyhow` 附加上下文。

use thiserror::Error;

/// 编码或解码过程中可能出现的错误。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// 载荷 (含 4 字节长度前缀) 所需的比特数超过了图像的容量。
    #[error("insufficient capacity: payload needs {required} bits, image offers {available} bits")]
    InsufficientCapacity { required: u64, available: u64 },

    /// 待隐藏的消息中含有非 ASCII 字符。
    #[error("invalid payload: character {character:?} at index {index} is not 7-bit ASCII")]
    InvalidPayload { index: usize, character: char },

    /// 消息长度无法写入 32 位长度前缀。
    #[error("message length {0} does not fit in the 32-bit length prefix")]
    MessageTooLong(usize),

    /// 从图像中提取的比特无法还原为合法的 ASCII 消息。
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] Malformed),
}

/// 解码失败的具体原因。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
    #[error("only {available} bytes extractable, the length prefix needs 4")]
    TruncatedHeader { available: usize },

    #[error("declared length {declared} exceeds the {available} bytes available")]
    TruncatedMessage { declared: u32, available: usize },

    #[error("byte {byte:#04x} at message offset {offset} is outside the ASCII range")]
    NonAscii { offset: usize, byte: u8 },
}

pub type Result<T> = std::result::Result<T, StegoError>;
