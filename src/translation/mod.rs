//! 单词翻译：共享缓存、内置词典与外部翻译源

pub mod cache;
pub mod deeplx;
pub mod dictionary;
pub mod provider;

pub use cache::{CacheKey, CacheStats, TranslationCache};
pub use deeplx::DeeplxTranslationSource;
pub use dictionary::StaticDictionary;
pub use provider::{Translation, TranslationSource, WordTranslator, NOT_FOUND_PLACEHOLDER};
