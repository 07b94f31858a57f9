//! 网卡地址采集器
//!
//! 有原生网络配置命令的平台上执行命令并解析输出；其他平台或命令失败时，
//! 通过 UDP 路由探测取得系统为默认出口选择的本地地址。

use crate::decode::{decode_output, default_encodings};
use crate::error::{NetInfoError, Result};
use crate::ipconfig::parse_ipconfig;
use crate::types::InterfaceAddressMap;
use async_trait::async_trait;
use encoding_rs::Encoding;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use tokio::net::UdpSocket;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// 路由探测兜底时使用的网卡名
pub const DEFAULT_FALLBACK_INTERFACE: &str = "Default Interface";

/// 路由探测的目标地址，不会真正发送数据
pub const DEFAULT_PROBE_TARGET: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 80);

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// 网卡地址来源
#[async_trait]
pub trait InterfaceSource: Send + Sync {
    /// 采集当前网卡地址，失败时返回空映射或单条兜底映射，从不报错
    async fn collect(&self) -> InterfaceAddressMap;
}

/// 要执行的网络配置命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

/// 采集器配置
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// 网络配置命令，`None` 表示直接走路由探测
    pub command: Option<CommandSpec>,

    /// 路由探测目标
    pub probe_target: SocketAddr,

    /// 路由探测结果使用的网卡名
    pub fallback_interface: String,

    /// 命令输出的候选编码，按优先级排列
    pub encodings: Vec<&'static Encoding>,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            command: platform_command(),
            probe_target: DEFAULT_PROBE_TARGET,
            fallback_interface: DEFAULT_FALLBACK_INTERFACE.to_string(),
            encodings: default_encodings(),
        }
    }
}

fn platform_command() -> Option<CommandSpec> {
    if cfg!(windows) {
        Some(CommandSpec::new("ipconfig"))
    } else {
        None
    }
}

/// 网卡地址采集器
#[derive(Debug, Clone, Default)]
pub struct Collector {
    config: CollectorConfig,
}

impl Collector {
    pub fn new(config: CollectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// 执行网络配置命令并解析输出
    pub async fn collect_from_command(&self, spec: &CommandSpec) -> Result<InterfaceAddressMap> {
        let text = self.run_command(spec).await?;
        if text.trim().is_empty() {
            return Err(NetInfoError::EmptyOutput {
                command: spec.program.clone(),
            });
        }

        let interfaces = parse_ipconfig(&text);
        debug!(
            "Parsed {} interface(s) from `{}` output",
            interfaces.len(),
            spec.program
        );
        Ok(interfaces)
    }

    async fn run_command(&self, spec: &CommandSpec) -> Result<String> {
        let mut command = Command::new(&spec.program);
        command.args(&spec.args).kill_on_drop(true);
        #[cfg(windows)]
        command.creation_flags(CREATE_NO_WINDOW);

        let output = command.output().await?;
        if !output.status.success() {
            return Err(NetInfoError::CommandFailed {
                command: spec.program.clone(),
                status: output.status.to_string(),
            });
        }
        if output.stdout.is_empty() {
            return Err(NetInfoError::EmptyOutput {
                command: spec.program.clone(),
            });
        }

        Ok(decode_output(&output.stdout, &self.config.encodings).into_owned())
    }

    /// 路由探测兜底
    async fn collect_default(&self) -> InterfaceAddressMap {
        match probe_default_address(self.config.probe_target).await {
            Ok(address) => {
                debug!("Route probe selected local address {}", address);
                InterfaceAddressMap::single(&self.config.fallback_interface, address.to_string())
            }
            Err(e) => {
                warn!("Route probe failed, no local address available: {}", e);
                InterfaceAddressMap::new()
            }
        }
    }
}

#[async_trait]
impl InterfaceSource for Collector {
    async fn collect(&self) -> InterfaceAddressMap {
        if let Some(spec) = &self.config.command {
            match self.collect_from_command(spec).await {
                Ok(interfaces) if !interfaces.is_empty() => {
                    info!("Collected {} interface(s) via `{}`", interfaces.len(), spec.program);
                    return interfaces;
                }
                Ok(_) => warn!(
                    "`{}` output contained no addresses, falling back to route probe",
                    spec.program
                ),
                Err(e) => warn!("Interface command failed, falling back to route probe: {}", e),
            }
        }

        self.collect_default().await
    }
}

/// 对目标做一次无连接 `connect`，读回系统选定的本地源地址
pub async fn probe_default_address(target: SocketAddr) -> Result<IpAddr> {
    let bind_addr = match target {
        SocketAddr::V4(_) => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
        SocketAddr::V6(_) => SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
    };

    let socket = UdpSocket::bind(bind_addr).await?;
    socket
        .connect(target)
        .await
        .map_err(|source| NetInfoError::NoRoute { target, source })?;

    Ok(socket.local_addr()?.ip())
}
