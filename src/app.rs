//! eframe 窗口
//!
//! 窗口每帧先收取后台刷新结果、推进计时器，再按 [`UiState`] 绘制，
//! 最后约定在下一次计时到期时重绘。

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::fonts::{self, CjkFont};
use crate::shell::{
    RefreshResult, RefreshTrigger, RefreshWorker, Shell, UiNotifier, UiState, WindowControl,
};
use eframe::egui;
use netinfo::{Collector, PublicIpFetcher};
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::info;

impl UiNotifier for egui::Context {
    fn notify(&self) {
        self.request_repaint();
    }
}

impl WindowControl for egui::Context {
    fn set_always_on_top(&self, on_top: bool) {
        let level = if on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        };
        self.send_viewport_cmd(egui::ViewportCommand::WindowLevel(level));
    }
}

/// IP 悬浮窗
pub struct IpFloatApp {
    shell: Shell<RefreshWorker>,
    results: UnboundedReceiver<RefreshResult>,
    runtime: Option<Runtime>,
}

impl IpFloatApp {
    pub fn new(ctx: &egui::Context, config: &AppConfig, runtime: Runtime) -> Result<Self> {
        let (tx, results) = mpsc::unbounded_channel();
        let collector = Arc::new(Collector::new(config.collector.clone()));
        let fetcher = Arc::new(PublicIpFetcher::new(&config.public_ip)?);
        let worker = RefreshWorker::new(
            runtime.handle().clone(),
            collector,
            fetcher,
            tx,
            Arc::new(ctx.clone()),
        );

        let mut shell = Shell::new(
            worker,
            config.locale.labels(),
            config.refresh_period,
            config.window.always_on_top,
            Instant::now(),
        );
        shell.request_refresh(RefreshTrigger::Startup);

        Ok(Self {
            shell,
            results,
            runtime: Some(runtime),
        })
    }

    fn draw(&self, ctx: &egui::Context, state: &UiState) -> (bool, bool) {
        let labels = self.shell.labels();
        let mut refresh_clicked = false;
        let mut topmost = state.topmost;

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                refresh_clicked = ui.button(labels.refresh_button).clicked();
                ui.add_space(10.0);
                ui.checkbox(&mut topmost, labels.topmost_checkbox);
            });
            ui.add_space(8.0);
            ui.colored_label(egui::Color32::from_gray(0x55), &state.status);
            ui.add_space(8.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(labels.public_ip_heading);
            ui.add_space(4.0);
            ui.label(egui::RichText::new(&state.public_ip).strong().size(18.0));
            ui.add_space(8.0);
            ui.separator();
            ui.label(labels.interfaces_heading);
            ui.add_space(6.0);

            egui::ScrollArea::both()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add(
                        egui::Label::new(egui::RichText::new(&state.interfaces_text).monospace())
                            .extend(),
                    );
                });
        });

        (refresh_clicked, topmost)
    }
}

impl eframe::App for IpFloatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(result) = self.results.try_recv() {
            self.shell.apply(result);
        }
        self.shell.tick(Instant::now());

        let state = self.shell.state().clone();
        let (refresh_clicked, topmost) = self.draw(ctx, &state);

        if refresh_clicked {
            self.shell.request_refresh(RefreshTrigger::Manual);
        }
        if topmost != state.topmost {
            self.shell.set_topmost(topmost, ctx);
        }

        ctx.request_repaint_after(self.shell.timer().remaining(Instant::now()));
    }
}

impl Drop for IpFloatApp {
    fn drop(&mut self) {
        // 进行中的刷新直接丢弃，不等待阻塞线程
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

/// 打开窗口并运行事件循环，直到窗口关闭
pub fn run(config: AppConfig, runtime: Runtime, cjk_font: Option<CjkFont>) -> Result<()> {
    let labels = config.locale.labels();
    let window = &config.window;

    let mut viewport = egui::ViewportBuilder::default()
        .with_title(labels.window_title)
        .with_inner_size(window.inner_size)
        .with_min_inner_size(window.min_inner_size)
        .with_position(window.position)
        .with_resizable(window.resizable)
        .with_taskbar(!window.tool_window);
    if window.always_on_top {
        viewport = viewport.with_window_level(egui::WindowLevel::AlwaysOnTop);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    info!("Opening window ({:?})", config.locale);
    eframe::run_native(
        labels.window_title,
        options,
        Box::new(move |cc| {
            if let Some(font) = cjk_font {
                fonts::install_cjk_font(&cc.egui_ctx, font);
            }
            Ok(Box::new(IpFloatApp::new(&cc.egui_ctx, &config, runtime)?))
        }),
    )
    .map_err(|e| Error::gui(e.to_string()))
}
