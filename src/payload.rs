//! # 载荷格式
//!
//! 载荷 = 4 字节大端序消息长度 ++ 消息的 ASCII 字节。

use crate::constants::LENGTH_PREFIX_BYTES;
use crate::error::{Malformed, Result, StegoError};

/// 将 ASCII 消息组装为带长度前缀的载荷。
///
/// # Errors
///
/// * 消息含非 ASCII 字符时返回 [`StegoError::InvalidPayload`]，不做截断或替换。
/// * 消息长度超出 `u32` 范围时返回 [`StegoError::MessageTooLong`]。
pub fn build(message: &str) -> Result<Vec<u8>> {
    if let Some((index, character)) = message.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
        return Err(StegoError::InvalidPayload { index, character });
    }

    let len = u32::try_from(message.len()).map_err(|_| StegoError::MessageTooLong(message.len()))?;

    let mut payload = Vec::with_capacity(LENGTH_PREFIX_BYTES + message.len());
    payload.extend_from_slice(&len.to_be_bytes());
    payload.extend_from_slice(message.as_bytes());
    Ok(payload)
}

/// 从提取出的字节流中解析消息。
///
/// 长度前缀之后多余的字节会被忽略。
pub fn parse(bytes: &[u8]) -> Result<String> {
    let (header, body) = bytes
        .split_first_chunk::<LENGTH_PREFIX_BYTES>()
        .ok_or(Malformed::TruncatedHeader {
            available: bytes.len(),
        })?;

    let declared = u32::from_be_bytes(*header);
    let message = body
        .get(..declared as usize)
        .ok_or(Malformed::TruncatedMessage {
            declared,
            available: body.len(),
        })?;

    if let Some((offset, &byte)) = message.iter().enumerate().find(|(_, b)| !b.is_ascii()) {
        return Err(Malformed::NonAscii { offset, byte }.into());
    }

    Ok(message.iter().map(|&b| char::from(b)).collect())
}
