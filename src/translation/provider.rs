//! 单词翻译器
//!
//! 查询顺序：缓存 → 内置词典 → 外部翻译源。外部查询的任何失败都降级为
//! `Translation::Unavailable`，和正常译文一样写入缓存，不会让请求失败。

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Serialize, Serializer};

use crate::error::ReadingResult;
use crate::text::segmenter::normalize_word;
use crate::translation::cache::TranslationCache;
use crate::translation::dictionary::StaticDictionary;

/// 找不到译文时展示的占位文本
pub const NOT_FOUND_PLACEHOLDER: &str = "Çeviri bulunamadı";

/// 翻译结果：译文或"不可用"哨兵值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Found(String),
    Unavailable,
}

impl Translation {
    /// 展示用文本，不可用时为占位文本
    pub fn as_display(&self) -> &str {
        match self {
            Translation::Found(text) => text,
            Translation::Unavailable => NOT_FOUND_PLACEHOLDER,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Translation::Found(_))
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_display())
    }
}

impl Serialize for Translation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_display())
    }
}

/// 外部翻译源
#[async_trait]
pub trait TranslationSource: Send + Sync {
    async fn lookup(&self, word: &str, source_lang: &str, target_lang: &str)
        -> ReadingResult<String>;
}

/// 带缓存的单词翻译器
pub struct WordTranslator {
    cache: Arc<TranslationCache>,
    dictionary: StaticDictionary,
    source: Arc<dyn TranslationSource>,
}

impl WordTranslator {
    pub fn new(
        cache: Arc<TranslationCache>,
        dictionary: StaticDictionary,
        source: Arc<dyn TranslationSource>,
    ) -> Self {
        Self {
            cache,
            dictionary,
            source,
        }
    }

    pub fn cache(&self) -> &Arc<TranslationCache> {
        &self.cache
    }

    /// 翻译单个单词
    pub async fn translate(&self, word: &str, source_lang: &str, target_lang: &str) -> Translation {
        let normalized = normalize_word(word);
        let word = normalized.as_str();

        self.cache
            .get_or_compute(word, source_lang, target_lang, move || async move {
                match self.dictionary.lookup(word) {
                    Some(known) => Translation::Found(known.to_string()),
                    None => self.lookup_external(word, source_lang, target_lang).await,
                }
            })
            .await
    }

    async fn lookup_external(&self, word: &str, source_lang: &str, target_lang: &str) -> Translation {
        match self.source.lookup(word, source_lang, target_lang).await {
            Ok(text) if !text.trim().is_empty() => Translation::Found(text.trim().to_string()),
            Ok(_) => {
                tracing::warn!("翻译API返回空译文: {}", word);
                Translation::Unavailable
            }
            Err(e) => {
                tracing::warn!("翻译API错误 ({}): {}", word, e);
                Translation::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReadingError;
    use crate::translation::cache::CacheKey;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TranslationSource for FailingSource {
        async fn lookup(&self, _word: &str, _s: &str, _t: &str) -> ReadingResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(ReadingError::NetworkError("连接被拒绝".into()))
        }
    }

    struct EchoSource;

    #[async_trait]
    impl TranslationSource for EchoSource {
        async fn lookup(&self, word: &str, _s: &str, target: &str) -> ReadingResult<String> {
            Ok(format!("{}:{}", target, word))
        }
    }

    #[test]
    fn test_translation_display() {
        assert_eq!(Translation::Found("ev".into()).as_display(), "ev");
        assert_eq!(Translation::Unavailable.to_string(), NOT_FOUND_PLACEHOLDER);
        assert!(!Translation::Unavailable.is_available());
    }

    #[test]
    fn test_translation_serializes_as_string() {
        let json = serde_json::to_string(&Translation::Unavailable).unwrap();
        assert_eq!(json, format!("\"{}\"", NOT_FOUND_PLACEHOLDER));
    }

    #[tokio::test]
    async fn test_failure_becomes_cached_placeholder() {
        let source = Arc::new(FailingSource {
            calls: AtomicUsize::new(0),
        });
        let translator = WordTranslator::new(
            Arc::new(TranslationCache::new()),
            StaticDictionary::default(),
            source.clone(),
        );

        let first = translator.translate("xyz123", "es", "tr").await;
        let second = translator.translate("xyz123", "es", "tr").await;

        assert_eq!(first, Translation::Unavailable);
        assert_eq!(second, Translation::Unavailable);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_dictionary_before_external() {
        let translator = WordTranslator::new(
            Arc::new(TranslationCache::new()),
            StaticDictionary::builtin("es", "tr"),
            Arc::new(EchoSource),
        );

        assert_eq!(
            translator.translate("Reino.", "es", "tr").await,
            Translation::Found("krallık".into())
        );
        assert_eq!(
            translator.translate("casa", "es", "tr").await,
            Translation::Found("tr:casa".into())
        );
        assert!(translator
            .cache()
            .contains_key(&CacheKey::new("reino", "es", "tr")));
    }

    #[tokio::test]
    async fn test_shared_cache_entry_short_circuits_lookup() {
        let cache = Arc::new(TranslationCache::new());
        cache.insert(
            CacheKey::new("perro", "es", "tr"),
            Translation::Found("köpek".into()),
        );
        let source = Arc::new(FailingSource {
            calls: AtomicUsize::new(0),
        });
        let translator = WordTranslator::new(cache.clone(), StaticDictionary::default(), source.clone());

        assert_eq!(
            translator.translate("Perro!", "es", "tr").await,
            Translation::Found("köpek".into())
        );
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);

        translator.translate("gato", "es", "tr").await;
        let stats = cache.stats();
        assert_eq!(stats.cache_hits, 1);
        assert_eq!(stats.cache_misses, 1);
        assert_eq!(stats.total_entries, 2);
    }
}
