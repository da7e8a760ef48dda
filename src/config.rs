//! 服务配置
//!
//! 唯一的配置项是 HTTP 端口，进程启动时从环境变量 `PORT` 读取一次。

use std::env;
use std::net::{Ipv4Addr, SocketAddr};

/// 端口环境变量名
pub const PORT_ENV: &str = "PORT";

/// 默认端口
pub const DEFAULT_PORT: u16 = 4000;

/// 服务配置结构
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// HTTP 服务端口
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl HttpConfig {
    /// 监听地址，绑定所有网卡
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("无效的端口值 `{value}`: {reason}")]
    InvalidPort { value: String, reason: String },
    #[error("配置验证错误: {0}")]
    Validation(String),
}

impl Config {
    /// 从进程环境加载配置
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_port_value(env::var(PORT_ENV).ok().as_deref())
    }

    /// 由 `PORT` 的原始值构造配置，未设置或为空时使用默认端口
    pub fn from_port_value(value: Option<&str>) -> Result<Self, ConfigError> {
        let port = match value.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidPort {
                value: raw.to_string(),
                reason: e.to_string(),
            })?,
        };

        let config = Self {
            http: HttpConfig { port },
        };
        config.validate()?;
        Ok(config)
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        Ok(())
    }
}
