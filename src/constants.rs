/// 长度前缀占用的字节数。
/// 消息长度以 `u32` 大端序写在载荷最前面。
pub const LENGTH_PREFIX_BYTES: usize = 4;

/// 每个像素中参与隐写的通道数 (R, G, B)。
/// 即使图像带有 Alpha 通道，它也不会被读取或修改。
pub const CARRIER_CHANNELS: u64 = 3;

/// 每个字节的比特数。
pub const BITS_PER_BYTE: u64 = 8;

/// 最低有效位掩码。
pub const LSB_MASK: u8 = 0x01;

/// `hide` 未指定输出路径时，结果图像文件名的前缀。
pub const HIDDEN_IMAGE_PREFIX: &str = "doctored_";

/// `recover` 未指定输出路径时，恢复文本文件名的前缀。
pub const RECOVERED_TEXT_PREFIX: &str = "recovered_";
