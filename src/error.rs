//! 阅读练习统一错误处理
//!
//! 提供结构化错误类型。只有 `ContentNotFound`（以及调用方设置的超时）
//! 会越过管道边界，其余失败都在内部降级为可用的结果字段。

use std::fmt;

use thiserror::Error;

/// 阅读管道错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReadingError {
    /// 找不到可用的阅读内容
    #[error("内容未找到: 级别 {level}, 主题 {topic:?}")]
    ContentNotFound {
        level: String,
        topic: Option<String>,
    },

    /// 网络错误
    #[error("网络错误: {0}")]
    NetworkError(String),

    /// 解析错误
    #[error("解析错误: {0}")]
    ParseError(String),

    /// 配置错误
    #[error("配置错误: {0}")]
    ConfigError(String),

    /// 输入验证错误
    #[error("输入无效: {0}")]
    InvalidInput(String),

    /// 超时错误
    #[error("操作超时: {0}")]
    TimeoutError(String),

    /// 翻译服务错误
    #[error("翻译服务错误: {0}")]
    TranslationServiceError(String),
}

impl ReadingError {
    /// 检查错误是否可重试
    pub fn is_retryable(&self) -> bool {
        match self {
            ReadingError::NetworkError(_) => true,
            ReadingError::TimeoutError(_) => true,
            ReadingError::TranslationServiceError(_) => true,
            ReadingError::ContentNotFound { .. } => false,
            ReadingError::ParseError(_) => false,
            ReadingError::ConfigError(_) => false,
            ReadingError::InvalidInput(_) => false,
        }
    }

    /// 获取错误类别
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReadingError::ContentNotFound { .. } => ErrorCategory::Content,
            ReadingError::NetworkError(_) => ErrorCategory::Network,
            ReadingError::ParseError(_) => ErrorCategory::Parsing,
            ReadingError::ConfigError(_) => ErrorCategory::Configuration,
            ReadingError::InvalidInput(_) => ErrorCategory::Input,
            ReadingError::TimeoutError(_) => ErrorCategory::Timeout,
            ReadingError::TranslationServiceError(_) => ErrorCategory::Service,
        }
    }

    /// 内容未找到
    pub fn content_not_found(level: &str, topic: Option<&str>) -> Self {
        ReadingError::ContentNotFound {
            level: level.to_string(),
            topic: topic.map(str::to_string),
        }
    }

    /// 创建带上下文的错误
    pub fn with_context<T: fmt::Display>(self, context: T) -> Self {
        let wrap = |msg: String| format!("{} (上下文: {})", msg, context);

        match self {
            ReadingError::NetworkError(msg) => ReadingError::NetworkError(wrap(msg)),
            ReadingError::ParseError(msg) => ReadingError::ParseError(wrap(msg)),
            ReadingError::ConfigError(msg) => ReadingError::ConfigError(wrap(msg)),
            ReadingError::InvalidInput(msg) => ReadingError::InvalidInput(wrap(msg)),
            ReadingError::TimeoutError(msg) => ReadingError::TimeoutError(wrap(msg)),
            ReadingError::TranslationServiceError(msg) => {
                ReadingError::TranslationServiceError(wrap(msg))
            }
            not_found @ ReadingError::ContentNotFound { .. } => not_found,
        }
    }
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Content,
    Network,
    Parsing,
    Configuration,
    Input,
    Timeout,
    Service,
}

impl From<reqwest::Error> for ReadingError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ReadingError::TimeoutError(format!("HTTP请求超时: {}", error))
        } else if error.is_decode() {
            ReadingError::ParseError(format!("响应解码失败: {}", error))
        } else {
            ReadingError::NetworkError(format!("HTTP请求失败: {}", error))
        }
    }
}

impl From<std::io::Error> for ReadingError {
    fn from(error: std::io::Error) -> Self {
        ReadingError::ConfigError(format!("IO错误: {}", error))
    }
}

impl From<serde_json::Error> for ReadingError {
    fn from(error: serde_json::Error) -> Self {
        ReadingError::ParseError(format!("JSON解析错误: {}", error))
    }
}

impl From<toml::de::Error> for ReadingError {
    fn from(error: toml::de::Error) -> Self {
        ReadingError::ConfigError(format!("TOML解析错误: {}", error))
    }
}

impl From<tokio::time::error::Elapsed> for ReadingError {
    fn from(error: tokio::time::error::Elapsed) -> Self {
        ReadingError::TimeoutError(format!("异步操作超时: {}", error))
    }
}

impl From<url::ParseError> for ReadingError {
    fn from(error: url::ParseError) -> Self {
        ReadingError::ConfigError(format!("URL无效: {}", error))
    }
}

/// 错误结果类型别名
pub type ReadingResult<T> = Result<T, ReadingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(ReadingError::NetworkError("reset".into()).is_retryable());
        assert!(ReadingError::TimeoutError("5s".into()).is_retryable());
        assert!(!ReadingError::content_not_found("a1", None).is_retryable());
        assert!(!ReadingError::ConfigError("bad".into()).is_retryable());
    }

    #[test]
    fn test_context_keeps_variant() {
        let error = ReadingError::NetworkError("连接被拒绝".into()).with_context("wikipedia");
        assert_eq!(error.category(), ErrorCategory::Network);
        assert!(error.to_string().contains("wikipedia"));

        let not_found = ReadingError::content_not_found("b1", Some("Nada")).with_context("x");
        assert_eq!(not_found, ReadingError::content_not_found("b1", Some("Nada")));
    }

    #[test]
    fn test_content_not_found_message() {
        let error = ReadingError::content_not_found("c2", Some("NonexistentXYZ987"));
        let message = error.to_string();
        assert!(message.contains("c2"));
        assert!(message.contains("NonexistentXYZ987"));
    }
}
