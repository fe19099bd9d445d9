use thiserror::Error;

/// CRON表达式展开错误类型定义
#[derive(Debug, Error)]
pub enum CronError {
    #[error("无法解析: {0}")]
    UnableToParse(String),

    #[error("{value} 不在 [{begin}, {end}] 范围内")]
    ValueOutOfBounds { value: u32, begin: u32, end: u32 },

    #[error("起始值 {begin} 大于结束值 {end}")]
    InvertedRange { begin: u32, end: u32 },

    #[error("步长必须大于0: {0}")]
    InvalidStep(String),

    #[error("无法解析CRON字段 '{field}'")]
    FieldUnparsed { field: String },

    #[error("Token数量不匹配: 期望 {expected} 个, 实际 {got} 个")]
    TokenCountMismatch { expected: usize, got: usize },

    #[error("配置错误: {0}")]
    Configuration(String),
}

/// 统一的Result类型
pub type CronResult<T> = std::result::Result<T, CronError>;
