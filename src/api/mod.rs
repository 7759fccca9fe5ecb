//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`departments`] - 部门管理接口 (CRUD + latest + rename)
//! - [`employees`] - 员工管理接口 (create)

pub mod departments;
pub mod employees;
pub mod health;
