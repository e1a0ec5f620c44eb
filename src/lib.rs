//! # Lectura Library
//!
//! 语言学习阅读练习的内容管道：按级别选择短文或维基百科文章，生成摘要，
//! 提取生词并附上译文和词性标签。
//!
//! ## 模块组织
//!
//! - `level` - 级别与各级别的长度/句数/生词预算
//! - `content` - 内置短文、外部文章源和内容选择器
//! - `text` - 分句、摘要和语言识别
//! - `vocabulary` - 常用词过滤和词性分类
//! - `translation` - 翻译缓存、内置词典和外部翻译源
//! - `pipeline` - 把以上步骤串成一次阅读请求
//! - `config` / `env` - 配置文件和环境变量
//! - `error` - 统一错误类型

pub mod config;
pub mod content;
pub mod env;
pub mod error;
pub mod level;
pub mod pipeline;
pub mod text;
pub mod translation;
pub mod vocabulary;

// Re-export commonly used items for convenience
pub use config::{ConfigManager, ReadingConfig};
pub use error::{ReadingError, ReadingResult};
pub use level::{Level, LevelProfile};
pub use pipeline::{ReadingPipeline, ReadingRequest, ReadingResponse};
pub use text::detect_language;
pub use translation::{Translation, TranslationCache, WordTranslator};
