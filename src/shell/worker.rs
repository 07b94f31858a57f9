//! 后台刷新任务
//!
//! 每次刷新在 tokio 运行时上派生一个短任务：先采集网卡地址，再查询公网 IP，
//! 把完整快照通过通道交回界面线程并唤醒它。任务从不直接接触界面状态。

use super::RefreshDispatcher;
use super::state::{PublicIp, RefreshResult};
use chrono::Local;
use netinfo::{InterfaceSource, PublicIpSource};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

/// 唤醒界面线程
pub trait UiNotifier: Send + Sync + 'static {
    fn notify(&self);
}

/// 执行一次完整刷新，任何子步骤失败都不会中断
pub async fn run_refresh(
    interfaces: &dyn InterfaceSource,
    public_ip: &dyn PublicIpSource,
) -> RefreshResult {
    let collected = interfaces.collect().await;

    let public_ip = match public_ip.fetch_public_ip().await {
        Ok(ip) => PublicIp::Address(ip),
        Err(e) => {
            warn!("Failed to fetch public IP: {}", e);
            PublicIp::Unavailable
        }
    };

    info!(
        "Refresh finished: {} interface(s), public IP {}",
        collected.len(),
        if public_ip == PublicIp::Unavailable {
            "unavailable"
        } else {
            "available"
        }
    );
    debug!("Refresh details: {:?} / {:?}", collected, public_ip);

    RefreshResult {
        interfaces: collected,
        public_ip,
        completed_at: Local::now(),
    }
}

/// 基于 tokio 的刷新派发器
pub struct RefreshWorker {
    runtime: Handle,
    interfaces: Arc<dyn InterfaceSource>,
    public_ip: Arc<dyn PublicIpSource>,
    results: UnboundedSender<RefreshResult>,
    notifier: Arc<dyn UiNotifier>,
}

impl RefreshWorker {
    pub fn new(
        runtime: Handle,
        interfaces: Arc<dyn InterfaceSource>,
        public_ip: Arc<dyn PublicIpSource>,
        results: UnboundedSender<RefreshResult>,
        notifier: Arc<dyn UiNotifier>,
    ) -> Self {
        Self {
            runtime,
            interfaces,
            public_ip,
            results,
            notifier,
        }
    }
}

impl RefreshDispatcher for RefreshWorker {
    fn dispatch(&self) {
        let interfaces = self.interfaces.clone();
        let public_ip = self.public_ip.clone();
        let results = self.results.clone();
        let notifier = self.notifier.clone();

        self.runtime.spawn(async move {
            let result = run_refresh(interfaces.as_ref(), public_ip.as_ref()).await;
            if results.send(result).is_err() {
                debug!("Window already closed, dropping refresh result");
                return;
            }
            notifier.notify();
        });
    }
}
