//! 展示层状态机
//!
//! 与窗口工具包无关：窗口每帧读取 [`UiState`]，把计时、按钮、置顶复选框的事件
//! 转交给 [`Shell`]。刷新只有两种状态：空闲与刷新中，刷新中收到的请求直接丢弃。

pub mod labels;
pub mod render;
pub mod state;
pub mod timer;
pub mod worker;

pub use labels::{Labels, Locale};
pub use render::render_interfaces;
pub use state::{PublicIp, RefreshResult, UiState};
pub use timer::RefreshTimer;
pub use worker::{RefreshWorker, UiNotifier, run_refresh};

use std::time::{Duration, Instant};
use tracing::{debug, info};

/// 启动一次后台刷新
pub trait RefreshDispatcher {
    fn dispatch(&self);
}

/// 窗口属性控制
pub trait WindowControl {
    /// 平台不支持时静默忽略
    fn set_always_on_top(&self, on_top: bool);
}

/// 刷新请求来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    Startup,
    Timer,
    Manual,
}

/// 展示层
pub struct Shell<D> {
    state: UiState,
    timer: RefreshTimer,
    labels: &'static Labels,
    dispatcher: D,
}

impl<D: RefreshDispatcher> Shell<D> {
    pub fn new(
        dispatcher: D,
        labels: &'static Labels,
        period: Duration,
        topmost: bool,
        now: Instant,
    ) -> Self {
        Self {
            state: UiState {
                public_ip: labels.public_ip_loading.to_string(),
                status: labels.status_initializing.to_string(),
                interfaces_text: String::new(),
                topmost,
                refreshing: false,
            },
            timer: RefreshTimer::new(period, now),
            labels,
            dispatcher,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn labels(&self) -> &'static Labels {
        self.labels
    }

    pub fn timer(&self) -> &RefreshTimer {
        &self.timer
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// 空闲时转入刷新中并派发后台任务；刷新中时丢弃请求并返回 `false`
    pub fn request_refresh(&mut self, trigger: RefreshTrigger) -> bool {
        if self.state.refreshing {
            debug!("Refresh already in flight, ignoring {:?} trigger", trigger);
            return false;
        }

        info!("Starting refresh ({:?})", trigger);
        self.state.refreshing = true;
        self.state.status = self.labels.status_updating.to_string();
        self.dispatcher.dispatch();
        true
    }

    /// 推进计时器，到期时请求刷新；返回是否真正开始了刷新
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.timer.poll(now) {
            self.request_refresh(RefreshTrigger::Timer)
        } else {
            false
        }
    }

    /// 应用后台刷新结果并回到空闲状态
    pub fn apply(&mut self, result: RefreshResult) {
        self.state.public_ip = match result.public_ip {
            PublicIp::Address(ip) => ip,
            PublicIp::Unavailable => self.labels.public_ip_failed.to_string(),
        };
        self.state.interfaces_text = render_interfaces(&result.interfaces, self.labels.no_interfaces);

        let time = result.completed_at.format("%H:%M:%S").to_string();
        self.state.status = self
            .labels
            .status_completed(&time, self.timer.period().as_secs());
        self.state.refreshing = false;
    }

    /// 切换置顶并立即应用到窗口
    pub fn set_topmost(&mut self, on_top: bool, window: &impl WindowControl) {
        self.state.topmost = on_top;
        window.set_always_on_top(on_top);
    }
}
