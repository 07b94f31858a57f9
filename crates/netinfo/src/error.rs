//! 网络信息采集错误类型
//!
//! 定义网卡采集、路由探测、公网 IP 查询相关的所有错误

use std::net::SocketAddr;
use thiserror::Error;

/// 网络信息错误枚举
#[derive(Error, Debug)]
pub enum NetInfoError {
    // ========== 命令相关错误 ==========
    /// 网络配置命令以非零状态退出
    #[error("Command `{command}` exited with {status}")]
    CommandFailed { command: String, status: String },

    /// 网络配置命令没有产生任何输出
    #[error("Command `{command}` produced no output")]
    EmptyOutput { command: String },

    // ========== 路由探测错误 ==========
    /// 没有可用的默认路由
    #[error("No route towards {target}: {source}")]
    NoRoute {
        target: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    // ========== HTTP 错误 ==========
    /// HTTP 请求失败
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// 远端返回非成功状态码
    #[error("Unexpected HTTP status: {status}")]
    HttpStatus { status: u16 },

    /// 请求超时
    #[error("Request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// HTTP 客户端构建失败
    #[error("Failed to build HTTP client: {reason}")]
    HttpClient { reason: String },

    // ========== 外部错误包装 ==========
    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 网络信息专用的 Result 类型
pub type Result<T> = std::result::Result<T, NetInfoError>;

impl NetInfoError {
    /// 创建超时错误
    pub fn timeout(duration_ms: u64) -> Self {
        Self::Timeout { duration_ms }
    }

    /// 检查是否为网络相关错误
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            Self::NoRoute { .. } | Self::Http(_) | Self::HttpStatus { .. } | Self::Timeout { .. }
        )
    }

    /// 检查是否为本地命令相关错误
    pub fn is_command_error(&self) -> bool {
        matches!(
            self,
            Self::CommandFailed { .. } | Self::EmptyOutput { .. } | Self::Io(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_error() {
        let err = NetInfoError::timeout(4000);
        assert!(err.to_string().contains("4000ms"));
        assert!(err.is_network_error());
        assert!(!err.is_command_error());
    }

    #[test]
    fn test_error_categories() {
        let command_err = NetInfoError::EmptyOutput {
            command: "ipconfig".to_string(),
        };
        assert!(command_err.is_command_error());
        assert!(!command_err.is_network_error());

        let route_err = NetInfoError::NoRoute {
            target: SocketAddr::from(([8, 8, 8, 8], 80)),
            source: std::io::Error::from(std::io::ErrorKind::NetworkUnreachable),
        };
        assert!(route_err.is_network_error());
        assert!(route_err.to_string().contains("8.8.8.8:80"));
    }
}
