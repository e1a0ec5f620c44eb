//! 统一的环境变量管理系统
//!
//! 提供类型安全、可验证的环境变量访问。未设置的变量不会覆盖配置文件中的值。

use std::env;
use std::fmt;
use std::time::Duration;

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }
}

/// 核心环境变量定义
pub mod core {
    use super::*;

    /// 日志级别
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "LECTURA_LOG_LEVEL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error (default: info)";

        fn parse(value: &str) -> EnvResult<String> {
            match value.to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => Ok(value.to_lowercase()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!("Invalid log level '{}'. Use: trace, debug, info, warn, error", value),
                }),
            }
        }
    }

    /// 禁用颜色输出
    pub struct NoColor;
    impl EnvVar<bool> for NoColor {
        const NAME: &'static str = "NO_COLOR";
        const DEFAULT: Option<bool> = Some(false);
        const DESCRIPTION: &'static str = "Disable colored output when set to any value";

        fn parse(value: &str) -> EnvResult<bool> {
            // NO_COLOR 遵循标准：任何值都表示禁用颜色
            Ok(!value.is_empty())
        }
    }
}

/// 翻译相关环境变量
pub mod translation {
    use super::*;

    /// 源语言
    pub struct SourceLang;
    impl EnvVar<String> for SourceLang {
        const NAME: &'static str = "LECTURA_SOURCE_LANG";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Language of the reading texts (ISO 639-1 code)";

        fn parse(value: &str) -> EnvResult<String> {
            parse_lang(value, Self::NAME)
        }
    }

    /// 目标语言
    pub struct TargetLang;
    impl EnvVar<String> for TargetLang {
        const NAME: &'static str = "LECTURA_TARGET_LANG";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Language vocabulary is translated into (ISO 639-1 code)";

        fn parse(value: &str) -> EnvResult<String> {
            parse_lang(value, Self::NAME)
        }
    }

    /// API URL
    pub struct ApiUrl;
    impl EnvVar<String> for ApiUrl {
        const NAME: &'static str = "LECTURA_TRANSLATION_API_URL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "DeepLX-compatible translation endpoint URL";

        fn parse(value: &str) -> EnvResult<String> {
            parse_http_url(value, Self::NAME)
        }
    }

    /// API密钥
    pub struct ApiKey;
    impl EnvVar<String> for ApiKey {
        const NAME: &'static str = "LECTURA_TRANSLATION_API_KEY";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Bearer token for the translation endpoint";

        fn parse(value: &str) -> EnvResult<String> {
            let key = value.trim();
            if key.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "API key cannot be empty".to_string(),
                });
            }
            Ok(key.to_string())
        }
    }

    /// 翻译缓存上限
    pub struct CacheMaxEntries;
    impl EnvVar<usize> for CacheMaxEntries {
        const NAME: &'static str = "LECTURA_CACHE_MAX_ENTRIES";
        const DEFAULT: Option<usize> = None;
        const DESCRIPTION: &'static str = "Upper bound on cached translations (unbounded when unset)";

        fn parse(value: &str) -> EnvResult<usize> {
            parse_positive_usize(value, Self::NAME, 1, 10_000_000)
        }
    }
}

/// 内容相关环境变量
pub mod content {
    use super::*;

    /// 内容 API URL
    pub struct ApiUrl;
    impl EnvVar<String> for ApiUrl {
        const NAME: &'static str = "LECTURA_CONTENT_API_URL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "MediaWiki action API endpoint for reference articles";

        fn parse(value: &str) -> EnvResult<String> {
            parse_http_url(value, Self::NAME)
        }
    }

    /// 内置短文概率
    pub struct CuratedProbability;
    impl EnvVar<f64> for CuratedProbability {
        const NAME: &'static str = "LECTURA_CURATED_PROBABILITY";
        const DEFAULT: Option<f64> = None;
        const DESCRIPTION: &'static str = "Probability of serving a curated text when one exists (0.0-1.0)";

        fn parse(value: &str) -> EnvResult<f64> {
            let probability: f64 = value.trim().parse().map_err(|_| EnvError {
                variable: Self::NAME.to_string(),
                message: "Must be a valid number".to_string(),
            })?;

            if !(0.0..=1.0).contains(&probability) {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Probability must be between 0.0 and 1.0".to_string(),
                });
            }

            Ok(probability)
        }
    }

    /// 请求超时
    pub struct RequestTimeout;
    impl EnvVar<Duration> for RequestTimeout {
        const NAME: &'static str = "LECTURA_REQUEST_TIMEOUT";
        const DEFAULT: Option<Duration> = None;
        const DESCRIPTION: &'static str = "Timeout for outbound HTTP requests in seconds";

        fn parse(value: &str) -> EnvResult<Duration> {
            let seconds: u64 = value.trim().parse().map_err(|_| EnvError {
                variable: Self::NAME.to_string(),
                message: "Must be a valid number of seconds".to_string(),
            })?;

            if seconds == 0 {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Timeout must be greater than 0".to_string(),
                });
            }

            if seconds > 300 {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Timeout too long (max 300 seconds)".to_string(),
                });
            }

            Ok(Duration::from_secs(seconds))
        }
    }
}

/// 辅助函数
fn parse_lang(value: &str, var_name: &str) -> EnvResult<String> {
    let lang = value.trim().to_lowercase();
    if lang.chars().count() != 2 {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: "Language code must be 2 characters (ISO 639-1)".to_string(),
        });
    }
    Ok(lang)
}

fn parse_http_url(value: &str, var_name: &str) -> EnvResult<String> {
    let url = value.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else {
        Err(EnvError {
            variable: var_name.to_string(),
            message: "URL must start with http:// or https://".to_string(),
        })
    }
}

fn parse_positive_usize(value: &str, var_name: &str, min: usize, max: usize) -> EnvResult<usize> {
    let num: usize = value.trim().parse().map_err(|_| EnvError {
        variable: var_name.to_string(),
        message: "Must be a valid positive number".to_string(),
    })?;

    if num < min {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Value {} is below minimum {}", num, min),
        });
    }

    if num > max {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Value {} exceeds maximum {}", num, max),
        });
    }

    Ok(num)
}

fn describe<T, V: EnvVar<T>>(docs: &mut String) {
    docs.push_str(&format!("- `{}`: {}\n", V::NAME, V::DESCRIPTION));
}

/// 环境变量文档生成器
pub fn generate_env_docs() -> String {
    let mut docs = String::new();
    docs.push_str("# Environment Variables Documentation\n\n");

    docs.push_str("## Core Configuration\n\n");
    describe::<String, core::LogLevel>(&mut docs);
    describe::<bool, core::NoColor>(&mut docs);

    docs.push_str("\n## Translation Configuration\n\n");
    describe::<String, translation::SourceLang>(&mut docs);
    describe::<String, translation::TargetLang>(&mut docs);
    describe::<String, translation::ApiUrl>(&mut docs);
    describe::<String, translation::ApiKey>(&mut docs);
    describe::<usize, translation::CacheMaxEntries>(&mut docs);

    docs.push_str("\n## Content Configuration\n\n");
    describe::<String, content::ApiUrl>(&mut docs);
    describe::<f64, content::CuratedProbability>(&mut docs);
    describe::<Duration, content::RequestTimeout>(&mut docs);

    docs
}
