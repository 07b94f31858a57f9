//! 本机网络信息采集
//!
//! 提供网卡地址采集（`ipconfig` 解析 + 路由探测兜底）与公网 IP 查询，
//! 不依赖任何界面组件。

pub mod collector;
pub mod decode;
pub mod error;
pub mod ipconfig;
pub mod public_ip;
pub mod types;

// Re-export commonly used types
pub use collector::{
    Collector, CollectorConfig, CommandSpec, DEFAULT_FALLBACK_INTERFACE, InterfaceSource,
    probe_default_address,
};
pub use decode::{decode_output, default_encodings};
pub use error::{NetInfoError, Result};
pub use ipconfig::parse_ipconfig;
pub use public_ip::{DEFAULT_PUBLIC_IP_URL, PublicIpConfig, PublicIpFetcher, PublicIpSource};
pub use types::InterfaceAddressMap;
