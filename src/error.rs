//! 统一错误处理模型
//!
//! 提供 ipfloat 的顶层错误类型，聚合数据层与窗口层的错误

use thiserror::Error;

/// 主应用的统一错误枚举
#[derive(Debug, Error)]
pub enum Error {
    // ========== 配置相关错误 ==========
    /// 配置验证失败
    #[error("Configuration validation failed: {message}")]
    ConfigValidation { message: String },

    // ========== 数据层错误 ==========
    /// 网络信息采集错误
    #[error("Network info error: {0}")]
    NetInfo(#[from] netinfo::NetInfoError),

    // ========== 系统级错误 ==========
    /// I/O 操作错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// 窗口或事件循环错误
    #[error("GUI error: {message}")]
    Gui { message: String },

    // ========== 通用错误 ==========
    /// 自定义错误消息
    #[error("Application error: {message}")]
    Custom { message: String },
}

/// 统一的 Result 类型
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// 创建自定义错误
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }

    /// 创建配置验证失败错误
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// 创建窗口错误
    pub fn gui(message: impl Into<String>) -> Self {
        Self::Gui {
            message: message.into(),
        }
    }
}
