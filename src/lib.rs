//! # 用户管理 API
//!
//! 基于 Axum 的内存用户 CRUD 服务，分层结构：
//! - `app`：路由、处理器与用户服务
//! - `core`：错误类型、请求提取器、中间件
//! - `infrastructure`：配置加载与日志初始化

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::{router, AppState};
pub use crate::core::error::CoreError;
pub use infrastructure::config::Config;
