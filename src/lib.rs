//! # 用户 CRUD 服务
//!
//! 基于 Axum 的内存用户资源 REST API：
//! - `app`：路由与用户资源的处理器、服务、模型
//! - `core`：统一错误、响应、中间件、请求体提取、ID 校验
//! - `infrastructure`：内存存储与日志
//! - `config`：端口配置

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::router;
pub use config::Config;
pub use infrastructure::UserStore;
