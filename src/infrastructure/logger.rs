//! 日志基础设施

use tracing_subscriber::EnvFilter;

use super::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 初始化全局日志，`RUST_LOG` 优先于配置文件中的级别
    pub fn init(config: &LoggingConfig) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

        // 已经初始化过（例如测试中）时忽略
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    }
}
