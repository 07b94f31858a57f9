//! # ipfloat
//!
//! 常驻置顶的 IP 悬浮窗：定时采集本机各网卡地址与出口公网 IP 并显示

pub mod app;
pub mod config;
pub mod error;
pub mod fonts;
pub mod observability;
pub mod shell;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{Error, Result};
pub use shell::{Locale, RefreshTrigger, Shell, UiState};
