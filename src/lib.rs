//! Staff Server - 部门/员工管理 REST 后端
//!
//! # 模块结构
//!
//! ```text
//! src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # 访问策略中间件
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (SQLite + 模型 + 仓储)
//! └── utils/         # 错误、校验、日志
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState, build_app};
pub use crate::utils::{AppError, AppResult, FieldErrors};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv)
pub fn setup_environment() {
    dotenv::dotenv().ok();
}
