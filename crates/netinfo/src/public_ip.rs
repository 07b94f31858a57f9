//! 公网 IP 查询
//!
//! 向纯文本 IP 回显服务发起一次 GET 请求，返回去除首尾空白的响应体。

use crate::error::{NetInfoError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// 默认回显服务
pub const DEFAULT_PUBLIC_IP_URL: &str = "https://api.ipify.org?format=text";

/// 默认请求超时
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(4);

/// 公网 IP 来源
#[async_trait]
pub trait PublicIpSource: Send + Sync {
    async fn fetch_public_ip(&self) -> Result<String>;
}

/// 公网 IP 查询配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicIpConfig {
    /// 回显服务地址
    ///
    /// 响应体须为纯文本 IP，例如 "https://api.ipify.org?format=text"
    pub endpoint: String,

    /// 整个请求的超时时间
    pub timeout: Duration,
}

impl Default for PublicIpConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_PUBLIC_IP_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl PublicIpConfig {
    /// Validate public IP configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.timeout.is_zero() {
            return Err("Public IP timeout must be greater than zero".to_string());
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err("Public IP endpoint must start with http:// or https://".to_string());
        }
        Ok(())
    }
}

/// 公网 IP 查询客户端
#[derive(Debug, Clone)]
pub struct PublicIpFetcher {
    endpoint: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl PublicIpFetcher {
    pub fn new(config: &PublicIpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| NetInfoError::HttpClient {
                reason: e.to_string(),
            })?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            timeout: config.timeout,
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PublicIpSource for PublicIpFetcher {
    async fn fetch_public_ip(&self) -> Result<String> {
        debug!("Requesting public IP from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        if !response.status().is_success() {
            return Err(NetInfoError::HttpStatus {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        Ok(body.trim().to_string())
    }
}

impl PublicIpFetcher {
    fn classify(&self, err: reqwest::Error) -> NetInfoError {
        if err.is_timeout() {
            NetInfoError::timeout(self.timeout.as_millis() as u64)
        } else {
            NetInfoError::Http(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_public_ip_config() {
        let config = PublicIpConfig::default();
        assert_eq!(config.endpoint, "https://api.ipify.org?format=text");
        assert_eq!(config.timeout, Duration::from_secs(4));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_public_ip_config_validation() {
        let mut config = PublicIpConfig::default();

        config.timeout = Duration::ZERO;
        assert!(config.validate().is_err());

        config.timeout = Duration::from_secs(1);
        config.endpoint = "ftp://example.com/ip".to_string();
        assert!(config.validate().is_err());

        config.endpoint = "http://127.0.0.1:8080/ip".to_string();
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() -> Result<()> {
        let fetcher = PublicIpFetcher::new(&PublicIpConfig {
            endpoint: "http://127.0.0.1:1/".to_string(),
            timeout: Duration::from_secs(2),
        })?;

        let err = fetcher.fetch_public_ip().await.unwrap_err();
        assert!(err.is_network_error());
        Ok(())
    }
}
