//! # Error 模块
//!
//! 定义 folio-core 中使用的错误类型。
//!
//! 面向访客的文案一律来自翻译表，这里的消息只用于日志。

use thiserror::Error;

/// 联系表单错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    /// 必填字段为空
    #[error("required field '{field}' is empty")]
    MissingField { field: &'static str },

    /// 邮箱格式无效
    #[error("'{email}' is not a valid email address")]
    InvalidEmail { email: String },

    /// 网络请求失败
    #[error("request failed: {message}")]
    Network { message: String },

    /// 响应无法解析
    #[error("response could not be decoded: {message}")]
    Decode { message: String },
}

/// 客户端存储错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    /// 存储不可用（隐私模式、禁用存储等）
    #[error("storage is unavailable")]
    Unavailable,

    /// 写入失败
    #[error("failed to write key '{key}': {message}")]
    WriteFailed { key: String, message: String },
}

/// 动效配置错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    /// 轮播文本列表为空
    #[error("rotator needs at least one text")]
    EmptyRotator,

    /// 轮播间隔短于退场 + 入场所需时间
    #[error("rotator interval {interval_ms}ms is shorter than the minimum {min_ms}ms")]
    IntervalTooShort { interval_ms: u64, min_ms: u64 },
}

/// 站点配置错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// 解析失败
    #[error("config could not be parsed: {0}")]
    Parse(String),

    /// 验证失败
    #[error("config validation failed: {0}")]
    Validation(String),
}
