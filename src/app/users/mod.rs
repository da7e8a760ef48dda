//! 用户资源：模型、服务、处理器

pub mod handler;
pub mod model;
pub mod service;

pub use handler::AppState;
pub use model::User;
pub use service::UserService;
