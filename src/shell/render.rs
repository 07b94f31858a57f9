//! 网卡列表文本

use netinfo::InterfaceAddressMap;

/// 按网卡分组渲染：`[网卡名]` 标题行，每个地址一行 `  - 地址`，网卡之间空一行。
/// 空映射渲染为 `empty_placeholder`。
pub fn render_interfaces(interfaces: &InterfaceAddressMap, empty_placeholder: &str) -> String {
    if interfaces.is_empty() {
        return empty_placeholder.to_string();
    }

    let mut rows: Vec<String> = Vec::new();
    for (name, addresses) in interfaces.iter() {
        rows.push(format!("[{name}]"));
        rows.extend(addresses.iter().map(|address| format!("  - {address}")));
        rows.push(String::new());
    }

    rows.join("\n").trim_end().to_string()
}
