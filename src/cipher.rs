//! # XOR 流密码模块
//!
//! 以循环重复的密钥对字节序列做逐字节 XOR。该变换是自身的逆变换：
//! `decrypt(encrypt(m, k), k) == m`。
//!
//! 注意：这只是一种可逆的掩码变换，不是安全加密。攻击者若能比较同一密钥下的
//! 多个编码结果，即可通过 XOR 相关性恢复密钥材料。本工具的威胁模型是
//! 日常混淆，不适用于对抗性保密需求。

use crate::error::StegoError;

pub fn encrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>, StegoError> {
    xor_mask(data, key)
}

pub fn decrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>, StegoError> {
    xor_mask(data, key)
}

fn xor_mask(data: &[u8], key: &[u8]) -> Result<Vec<u8>, StegoError> {
    if key.is_empty() {
        return Err(StegoError::InvalidKey);
    }

    Ok(data
        .iter()
        .zip(key.iter().cycle())
        .map(|(&byte, &k)| byte ^ k)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 验证密码的对合性：任意密钥下解密加密结果必须还原输入
    #[test]
    fn test_involution() {
        let key = b"secret-key";
        let data: Vec<u8> = (0..=255).collect();

        let masked = encrypt(&data, key).unwrap();
        assert_eq!(decrypt(&masked, key).unwrap(), data);
    }

    /// 验证输出长度始终等于输入长度
    #[test]
    fn test_length_preserved() {
        let key = b"k";
        for len in [0usize, 1, 7, 256] {
            let data = vec![0xA5u8; len];
            assert_eq!(encrypt(&data, key).unwrap().len(), len);
        }
    }

    /// 验证密钥按长度循环重复：3 倍密钥长度的消息产生 3 个相同的 XOR 块
    #[test]
    fn test_key_cycling() {
        let key = b"abc";
        let data = vec![0x5Au8; key.len() * 3];

        let masked = encrypt(&data, key).unwrap();
        let first_block = &masked[..key.len()];

        assert_eq!(&masked[key.len()..key.len() * 2], first_block);
        assert_eq!(&masked[key.len() * 2..], first_block);
    }

    /// 验证空密钥在任何变换开始前被拒绝
    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(encrypt(b"hello", b""), Err(StegoError::InvalidKey));
        assert_eq!(decrypt(b"hello", b""), Err(StegoError::InvalidKey));
    }
}
