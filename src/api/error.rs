// ==========================================
// BarOmatic - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换配置/序列化/导出错误为用户可读的错误消息
// 红线: 校验错误必须指明出错字段
// ==========================================

use crate::config::ConfigError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 请求校验错误
    // ==========================================
    /// 请求字段非法（计算开始前拒绝，不产生任何部分结果）
    #[error("请求字段非法 ({field}): {reason}")]
    InvalidRequest { field: String, reason: String },

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    // ==========================================
    // 输出错误
    // ==========================================
    #[error("序列化失败: {0}")]
    Serialization(String),

    #[error("导出失败: {0}")]
    Export(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        ApiError::InvalidRequest {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// 出错字段（仅校验错误）
    pub fn field(&self) -> Option<&str> {
        match self {
            ApiError::InvalidRequest { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        ApiError::Export(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
