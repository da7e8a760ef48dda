//! 核心层：错误、响应、中间件、校验

pub mod error;
pub mod extract;
pub mod middleware;
pub mod response;
pub mod validation;

pub use error::CoreError;
