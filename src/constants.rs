/// 隐写起始前跳过的载体字节数。
/// 某些格式的原始像素数据前混有容器头部字节，跳过它们以免破坏文件结构。
pub const HEADER_OFFSET: usize = 100;

/// 标记隐藏消息逻辑结尾的哨兵字节。
/// 提取时读到该字节即停止；因此成帧后的载荷本身不能包含 0x00。
pub const SENTINEL: u8 = 0x00;

/// 每个载荷字节占用的载体字节数。
/// 每个载体字节只改写最低有效位 (1 bit)，因此一个字节需要 8 个载体字节。
pub const CARRIER_BYTES_PER_PAYLOAD_BYTE: usize = 8;
