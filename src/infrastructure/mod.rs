//! 基础设施层

pub mod logger;
pub mod store;

pub use logger::Logger;
pub use store::UserStore;
