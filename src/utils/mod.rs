//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] / [`AppResult`] - 应用错误类型
//! - [`FieldErrors`] - 字段级校验错误
//! - 校验和日志工具

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::{AppError, FieldErrors, NON_FIELD_ERRORS};
pub use result::AppResult;
