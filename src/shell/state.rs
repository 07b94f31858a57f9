use chrono::{DateTime, Local};
use netinfo::InterfaceAddressMap;

/// 一次刷新得到的公网 IP
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicIp {
    Address(String),
    /// 查询失败或超时，界面显示失败占位文字
    Unavailable,
}

/// 后台刷新的完整快照，由界面线程消费一次后丢弃
#[derive(Debug, Clone)]
pub struct RefreshResult {
    pub interfaces: InterfaceAddressMap,
    pub public_ip: PublicIp,
    pub completed_at: DateTime<Local>,
}

/// 界面状态，只在界面线程上读写
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub public_ip: String,
    pub status: String,
    pub interfaces_text: String,
    pub topmost: bool,
    pub refreshing: bool,
}
