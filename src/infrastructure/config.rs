//! 服务配置
//!
//! 配置文件为 TOML，按以下顺序查找：环境变量 `USERSVC_CONFIG` 指定的路径、
//! `config.toml`、`./config/config.toml`，都不存在时使用默认配置。

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 指定配置文件路径的环境变量
pub const CONFIG_ENV: &str = "USERSVC_CONFIG";

const CONFIG_PATHS: [&str; 2] = ["config.toml", "./config/config.toml"];

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 系统配置结构
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
    /// 每次变更后是否输出存储快照
    pub dump_store: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            timeout_seconds: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dump_store: true,
        }
    }
}

impl HttpConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|e| ConfigError::Validation(format!("无效的监听地址: {}", e)))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::Validation("请求超时时间必须大于0".to_string()));
        }
        self.http.socket_addr()?;

        if !VALID_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, VALID_LEVELS
            )));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 查找配置文件，返回第一个存在的路径
fn find_config_file(explicit: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path);
    }
    CONFIG_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

/// 从文件或默认值加载配置，并做校验
pub fn load_config() -> Result<(Config, Option<PathBuf>), ConfigError> {
    let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let path = find_config_file(explicit);

    let config = match &path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    config.validate()?;

    Ok((config, path))
}
