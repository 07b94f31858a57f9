//! 应用配置
//!
//! 没有配置文件，也没有命令行选项；所有取值都是代码内的默认值，
//! 启动时统一验证。

use crate::error::{Error, Result};
use crate::shell::Locale;
use netinfo::{CollectorConfig, PublicIpConfig};
use std::time::Duration;

/// 自动刷新周期
pub const REFRESH_PERIOD: Duration = Duration::from_secs(30);

/// 应用总配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 自动刷新周期
    pub refresh_period: Duration,

    /// 界面语言
    pub locale: Locale,

    pub window: WindowConfig,
    pub collector: CollectorConfig,
    pub public_ip: PublicIpConfig,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            refresh_period: REFRESH_PERIOD,
            locale: Locale::ZhTw,
            window: WindowConfig::default(),
            collector: CollectorConfig::default(),
            public_ip: PublicIpConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// 验证全部配置
    pub fn validate(&self) -> Result<()> {
        if self.refresh_period.is_zero() {
            return Err(Error::config_validation(
                "Refresh period must be greater than zero",
            ));
        }
        self.window.validate().map_err(Error::config_validation)?;
        self.public_ip.validate().map_err(Error::config_validation)?;
        if self.collector.fallback_interface.trim().is_empty() {
            return Err(Error::config_validation(
                "Fallback interface name cannot be empty",
            ));
        }
        Ok(())
    }
}

/// 窗口配置
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    pub position: [f32; 2],
    pub resizable: bool,

    /// 启动时是否置顶
    pub always_on_top: bool,

    /// 不在任务栏显示（工具窗口）
    pub tool_window: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            inner_size: [520.0, 380.0],
            min_inner_size: [420.0, 280.0],
            position: [40.0, 40.0],
            resizable: true,
            always_on_top: true,
            tool_window: true,
        }
    }
}

impl WindowConfig {
    pub fn validate(&self) -> std::result::Result<(), String> {
        let [width, height] = self.inner_size;
        let [min_width, min_height] = self.min_inner_size;
        if min_width <= 0.0 || min_height <= 0.0 {
            return Err("Minimum window size must be positive".to_string());
        }
        if width < min_width || height < min_height {
            return Err("Window size cannot be smaller than the minimum size".to_string());
        }
        Ok(())
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// 默认过滤级别，`RUST_LOG` 优先
    pub filter_level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter_level: "info".to_string(),
        }
    }
}
