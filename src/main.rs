//! IP 悬浮窗主程序
//!
//! 打开置顶窗口，启动后立即刷新一次，之后每 30 秒自动刷新

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod cli;

use clap::Parser;
use cli::Cli;
use ipfloat::config::AppConfig;
use ipfloat::error::Result;
use ipfloat::observability::init_observability;
use ipfloat::{app, fonts};
use tracing::{info, warn};

/// Application launcher utilities
struct ApplicationLauncher;

fn main() -> Result<()> {
    cli::attach_parent_console();
    let _cli = Cli::parse();

    let config = AppConfig::default();
    init_observability(&config.log);
    config.validate()?;

    ApplicationLauncher::run(config)
}

impl ApplicationLauncher {
    fn run(mut config: AppConfig) -> Result<()> {
        let cjk_font = fonts::load_cjk_font();
        let locale = config.locale.resolve(cjk_font.is_some());
        if locale != config.locale {
            warn!("No CJK font found on this system, falling back to English labels");
            config.locale = locale;
        }

        // Create Tokio runtime for background refreshes
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("ipfloat-refresh")
            .enable_all()
            .build()?;

        info!(
            "🚀 Starting ipfloat (refresh every {}s, public IP via {})",
            config.refresh_period.as_secs(),
            config.public_ip.endpoint
        );
        app::run(config, runtime, cjk_font)
    }
}
