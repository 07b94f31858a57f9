//! 命令输出解码
//!
//! 网络配置命令的输出编码随系统代码页变化，按优先级依次尝试候选编码，
//! 第一个无错解码的编码胜出；全部失败时按 UTF-8 宽松解码并以替换字符代替非法字节。

use encoding_rs::Encoding;
use std::borrow::Cow;
use tracing::debug;

/// 默认候选编码：UTF-8、Big5（CP950 系）、GBK
///
/// 面向繁体中文系统。GBK 的双字节序列大多也是合法的 Big5，按此顺序
/// 简体中文系统的输出会被当作 Big5 解出乱码；需要时在
/// `CollectorConfig::encodings` 中把 GBK 排在 Big5 之前。
pub fn default_encodings() -> Vec<&'static Encoding> {
    vec![encoding_rs::UTF_8, encoding_rs::BIG5, encoding_rs::GBK]
}

/// 按候选顺序解码原始字节
pub fn decode_output<'a>(bytes: &'a [u8], candidates: &[&'static Encoding]) -> Cow<'a, str> {
    for encoding in candidates {
        if let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(bytes) {
            debug!("Decoded command output as {}", encoding.name());
            return text;
        }
    }

    debug!("No candidate encoding matched, decoding lossily as UTF-8");
    String::from_utf8_lossy(bytes)
}
