//! 日志基础设施

use tracing_subscriber::EnvFilter;

/// 未设置 `RUST_LOG` 时使用的过滤规则
pub const DEFAULT_DIRECTIVES: &str = "info,tower_http=info";

pub struct Logger;

impl Logger {
    /// 初始化全局 fmt 订阅者，`RUST_LOG` 优先于默认规则
    pub fn init() {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }
}
