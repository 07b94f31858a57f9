//! `ipconfig` 输出解析
//!
//! 未缩进且以冒号结尾的行开始一个网卡段落，缩进的 `键: 值` 行按键名中的
//! 标记词决定是否保留，保留行的值中可解析为 IP 字面量的词元即该网卡地址。
//! 标记词匹配基于子串，英文部分不区分大小写。

use crate::types::InterfaceAddressMap;
use std::net::IpAddr;

/// 表示 IP 地址的键名标记
const INCLUDE_MARKERS: &[&str] = &["ipv4", "ipv6", "ip address", "ip 位址", "ip位址", "位址", "地址"];

/// 排除的键名标记：物理地址、掩码、网关、DNS、DHCP、WINS、租约、前缀
const EXCLUDE_MARKERS: &[&str] = &[
    "physical", "mac", "mask", "gateway", "dns", "dhcp", "wins", "lease", "prefix", "實體",
    "子網路", "閘道", "遮罩",
];

/// 仅凭「地址」字样也保留的键名标记
const ADDRESS_MARKERS: &[&str] = &["位址", "地址"];

/// 解析整段命令输出
pub fn parse_ipconfig(output: &str) -> InterfaceAddressMap {
    let mut interfaces = InterfaceAddressMap::new();
    let mut current: Option<String> = None;

    for raw_line in output.lines() {
        let line = raw_line.trim_end();
        if line.trim().is_empty() {
            continue;
        }

        if !raw_line.starts_with(char::is_whitespace) {
            current = line
                .strip_suffix(':')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string);
            if let Some(name) = &current {
                interfaces.register(name);
            }
            continue;
        }

        let Some(name) = current.as_deref() else {
            continue;
        };
        let Some((key, value)) = line.trim().split_once(':') else {
            continue;
        };
        if !should_keep_line(key) {
            continue;
        }

        for address in extract_addresses(value) {
            interfaces.push_address(name, address);
        }
    }

    interfaces.drop_empty();
    interfaces
}

/// 判断键名是否表示一个 IP 地址字段
pub fn should_keep_line(key: &str) -> bool {
    let lowered = key.to_lowercase();
    if EXCLUDE_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        return false;
    }
    if INCLUDE_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        return true;
    }
    ADDRESS_MARKERS.iter().any(|marker| key.contains(marker))
}

/// 从字段值中提取规范化后的 IP 地址，保持首次出现顺序且不重复
pub fn extract_addresses(value: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();

    for token in value.split_whitespace() {
        let Some(address) = parse_token(token) else {
            continue;
        };
        let canonical = address.to_string();
        if !found.contains(&canonical) {
            found.push(canonical);
        }
    }

    found
}

/// 剥离括号、标点、括注后缀与 `%zone` 后再解析
fn parse_token(token: &str) -> Option<IpAddr> {
    let token = token.trim_matches(|c| matches!(c, '[' | ']' | '(' | ')' | ',' | ';'));
    let token = token.split('(').next().unwrap_or_default();
    let token = token.split('%').next().unwrap_or_default();
    if token.is_empty() {
        return None;
    }
    token.parse().ok()
}
