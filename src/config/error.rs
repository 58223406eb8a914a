// ==========================================
// BarOmatic - 配置层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    // ===== 文件相关错误 =====
    #[error("配置文件读取失败 ({path}): {message}")]
    FileReadError { path: String, message: String },

    #[error("配置文件解析失败 ({path}): {message}")]
    ParseError { path: String, message: String },

    // ===== 配置值错误 =====
    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },

    #[error("配置值超出范围 (key: {key}): 值 {value} 不在 [{min}, {max}] 内")]
    OutOfRange {
        key: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
