//! 简化的配置管理器
//!
//! 提供统一的配置接口，支持文件配置、环境变量和默认值

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::constants;
use crate::content::CuratedText;
use crate::error::{ReadingError, ReadingResult};
use crate::vocabulary::SPANISH_VERB_SUFFIXES;

/// 阅读管道配置
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReadingConfig {
    // 语言
    pub source_lang: String,
    pub target_lang: String,

    // 外部服务
    pub content_api_url: String,
    pub translation_api_url: String,
    pub translation_api_key: Option<String>,
    pub request_timeout_secs: u64,

    // 内容选择
    pub curated_probability: f64,
    pub curated_texts: Vec<CuratedText>,

    // 缓存
    pub cache_max_entries: Option<usize>,

    // 词汇
    pub verb_suffixes: Vec<String>,
    pub verb_tag: String,
    pub other_tag: String,
    pub common_words: Option<Vec<String>>,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            source_lang: constants::DEFAULT_SOURCE_LANG.to_string(),
            target_lang: constants::DEFAULT_TARGET_LANG.to_string(),

            content_api_url: constants::DEFAULT_CONTENT_API_URL.to_string(),
            translation_api_url: constants::DEFAULT_TRANSLATION_API_URL.to_string(),
            translation_api_key: None,
            request_timeout_secs: constants::DEFAULT_REQUEST_TIMEOUT.as_secs(),

            curated_probability: constants::DEFAULT_CURATED_PROBABILITY,
            curated_texts: Vec::new(),

            cache_max_entries: None,

            verb_suffixes: SPANISH_VERB_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            verb_tag: constants::DEFAULT_VERB_TAG.to_string(),
            other_tag: constants::DEFAULT_OTHER_TAG.to_string(),
            common_words: None,
        }
    }
}

impl ReadingConfig {
    /// 验证配置
    pub fn validate(&self) -> ReadingResult<()> {
        if !(0.0..=1.0).contains(&self.curated_probability) {
            return Err(ReadingError::ConfigError(
                "内置短文概率必须在0到1之间".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(ReadingError::ConfigError("请求超时不能为0".to_string()));
        }

        for (name, lang) in [("source_lang", &self.source_lang), ("target_lang", &self.target_lang)] {
            if lang.chars().count() != 2 {
                return Err(ReadingError::ConfigError(format!(
                    "{} 必须是两位语言代码 (ISO 639-1): '{}'",
                    name, lang
                )));
            }
        }

        for (name, url) in [
            ("content_api_url", &self.content_api_url),
            ("translation_api_url", &self.translation_api_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ReadingError::ConfigError(format!(
                    "{} 必须以 http:// 或 https:// 开头",
                    name
                )));
            }
        }

        if self.verb_suffixes.is_empty() || self.verb_suffixes.iter().any(|s| s.is_empty()) {
            return Err(ReadingError::ConfigError("动词词尾不能为空".to_string()));
        }

        if self.cache_max_entries == Some(0) {
            return Err(ReadingError::ConfigError("缓存上限不能为0".to_string()));
        }

        Ok(())
    }

    /// 应用环境变量覆盖
    pub fn apply_env_overrides(&mut self) {
        use crate::env::{content, translation, EnvVar};

        if let Ok(source_lang) = translation::SourceLang::get() {
            self.source_lang = source_lang;
        }

        if let Ok(target_lang) = translation::TargetLang::get() {
            self.target_lang = target_lang;
        }

        if let Ok(api_url) = translation::ApiUrl::get() {
            self.translation_api_url = api_url;
            tracing::info!("环境变量覆盖翻译 API URL: {}", self.translation_api_url);
        }

        if let Ok(api_key) = translation::ApiKey::get() {
            self.translation_api_key = Some(api_key);
        }

        if let Ok(max_entries) = translation::CacheMaxEntries::get() {
            self.cache_max_entries = Some(max_entries);
        }

        if let Ok(api_url) = content::ApiUrl::get() {
            self.content_api_url = api_url;
            tracing::info!("环境变量覆盖内容 API URL: {}", self.content_api_url);
        }

        if let Ok(probability) = content::CuratedProbability::get() {
            self.curated_probability = probability;
        }

        if let Ok(timeout) = content::RequestTimeout::get() {
            self.request_timeout_secs = timeout.as_secs();
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// 简化的配置管理器
pub struct ConfigManager {
    config: ReadingConfig,
}

impl ConfigManager {
    /// 按 `.env`、配置文件、环境变量的顺序加载并验证
    pub fn new() -> ReadingResult<Self> {
        let mut config = Self::load_config()?;
        config.apply_env_overrides();
        config.validate()?;

        Ok(Self { config })
    }

    /// 从指定文件加载（仍然应用环境变量覆盖）
    pub fn from_file(path: &str) -> ReadingResult<Self> {
        Self::load_dotenv();
        let expanded = shellexpand::tilde(path);
        let mut config = Self::load_from_file(&expanded)?;
        config.apply_env_overrides();
        config.validate()?;

        Ok(Self { config })
    }

    /// 获取配置
    pub fn get_config(&self) -> &ReadingConfig {
        &self.config
    }

    pub fn into_config(self) -> ReadingConfig {
        self.config
    }

    fn load_config() -> ReadingResult<ReadingConfig> {
        Self::load_dotenv();

        for path in constants::CONFIG_PATHS {
            let expanded_path = shellexpand::tilde(path);
            if Path::new(expanded_path.as_ref()).exists() {
                tracing::info!("加载配置文件: {}", expanded_path);
                return Self::load_from_file(&expanded_path);
            }
        }

        tracing::info!("未找到配置文件，使用默认配置");
        Ok(ReadingConfig::default())
    }

    fn load_from_file(path: &str) -> ReadingResult<ReadingConfig> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ReadingError::ConfigError(format!("读取配置文件失败: {}", e)))?;
        Self::parse(path, &content)
    }

    /// 按扩展名解析：`.json` 用 JSON，其余用 TOML
    pub fn parse(path: &str, content: &str) -> ReadingResult<ReadingConfig> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .map_err(|e| ReadingError::ConfigError(format!("解析JSON配置失败: {}", e)))
        } else {
            toml::from_str(content)
                .map_err(|e| ReadingError::ConfigError(format!("解析TOML配置失败: {}", e)))
        }
    }

    fn load_dotenv() {
        let env_files = [".env.local", ".env.development", ".env.production", ".env"];

        for env_file in &env_files {
            if Path::new(env_file).exists() && dotenv::from_filename(env_file).is_ok() {
                tracing::info!("已加载环境变量文件: {}", env_file);
                break;
            }
        }
    }

    /// 生成示例配置文件
    pub fn generate_example_config(path: &str) -> ReadingResult<()> {
        let content = toml::to_string_pretty(&ReadingConfig::default())
            .map_err(|e| ReadingError::ConfigError(format!("序列化配置失败: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| ReadingError::ConfigError(format!("写入配置文件失败: {}", e)))?;

        Ok(())
    }
}
