//! 配置管理模块
//!
//! 提供简化的配置管理，支持环境变量、配置文件和默认值

pub mod manager;

// 重新导出主要类型
pub use manager::{ConfigManager, ReadingConfig};

/// 配置常量
pub mod constants {
    use std::time::Duration;

    // 内容选择
    pub const DEFAULT_CURATED_PROBABILITY: f64 = 0.7;
    pub const MAX_ARTICLE_CHARS: usize = 8000;

    // 语言
    pub const DEFAULT_SOURCE_LANG: &str = "es";
    pub const DEFAULT_TARGET_LANG: &str = "tr";

    // 默认API设置
    pub const DEFAULT_CONTENT_API_URL: &str = "https://es.wikipedia.org/w/api.php";
    pub const DEFAULT_TRANSLATION_API_URL: &str = "http://localhost:1188/translate";
    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    // 词汇标签
    pub const DEFAULT_VERB_TAG: &str = "(fiil)";
    pub const DEFAULT_OTHER_TAG: &str = "(isim/sıfat)";

    // 配置文件搜索路径
    pub const CONFIG_PATHS: &[&str] = &[
        "lectura.toml",
        ".lectura.toml",
        "lectura.json",
        "~/.config/lectura/config.toml",
        "/etc/lectura/config.toml",
    ];
}

/// 便利函数
pub fn config_file_exists() -> bool {
    constants::CONFIG_PATHS
        .iter()
        .any(|path| std::path::Path::new(shellexpand::tilde(path).as_ref()).exists())
}

/// 加载配置，失败时使用默认配置
pub fn load_reading_config() -> ReadingConfig {
    match ConfigManager::new() {
        Ok(manager) => manager.into_config(),
        Err(e) => {
            tracing::warn!("配置加载失败，使用默认配置: {}", e);
            ReadingConfig::default()
        }
    }
}
