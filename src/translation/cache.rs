//! 翻译缓存
//!
//! 进程级共享的单词翻译缓存，显式构造后注入翻译器。底层是并发哈希表，
//! 单次读写无需额外加锁；两个请求同时未命中同一个键时各自计算并写入，
//! 后写入的值覆盖先写入的等价值。

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use crate::translation::provider::Translation;

/// 缓存键：小写单词 + 源语言 + 目标语言
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub word: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl CacheKey {
    pub fn new(word: &str, source_lang: &str, target_lang: &str) -> Self {
        Self {
            word: word.to_lowercase(),
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
        }
    }
}

/// 缓存统计信息
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CacheStats {
    pub total_requests: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub total_entries: usize,
    pub rejected_inserts: u64,
}

impl CacheStats {
    /// 计算缓存命中率
    pub fn hit_rate(&self) -> f64 {
        if self.total_requests == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.total_requests as f64
        }
    }
}

/// 翻译缓存
///
/// 默认不设上限、不过期。设置 `max_entries` 后，达到上限时不再写入新键，
/// 已有条目照常命中。
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: DashMap<CacheKey, Translation>,
    max_entries: Option<usize>,
    hits: AtomicU64,
    misses: AtomicU64,
    rejected: AtomicU64,
}

impl TranslationCache {
    /// 创建不限大小的缓存
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建有上限的缓存
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            max_entries: Some(max_entries),
            ..Self::default()
        }
    }

    /// 按配置创建缓存，`None` 表示不限大小
    pub fn with_limit(max_entries: Option<usize>) -> Self {
        match max_entries {
            Some(limit) => Self::with_max_entries(limit),
            None => Self::new(),
        }
    }

    /// 获取缓存条目
    pub fn get(&self, key: &CacheKey) -> Option<Translation> {
        match self.entries.get(key) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry.value().clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// 插入缓存条目，达到上限时返回 `false`
    pub fn insert(&self, key: CacheKey, value: Translation) -> bool {
        if let Some(limit) = self.max_entries {
            if self.entries.len() >= limit && !self.entries.contains_key(&key) {
                self.rejected.fetch_add(1, Ordering::Relaxed);
                tracing::debug!("缓存已满 ({} 条)，跳过写入: {}", limit, key.word);
                return false;
            }
        }

        self.entries.insert(key, value);
        true
    }

    /// 命中则直接返回，否则调用 `compute` 计算、写入并返回
    pub async fn get_or_compute<F, Fut>(
        &self,
        word: &str,
        source_lang: &str,
        target_lang: &str,
        compute: F,
    ) -> Translation
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Translation>,
    {
        let key = CacheKey::new(word, source_lang, target_lang);
        if let Some(cached) = self.get(&key) {
            tracing::debug!("翻译缓存命中: {}", key.word);
            return cached;
        }

        let value = compute().await;
        self.insert(key, value.clone());
        value
    }

    /// 检查是否包含指定键
    pub fn contains_key(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    /// 获取缓存大小
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 清空缓存
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// 获取统计信息
    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        CacheStats {
            total_requests: hits + misses,
            cache_hits: hits,
            cache_misses: misses,
            total_entries: self.entries.len(),
            rejected_inserts: self.rejected.load(Ordering::Relaxed),
        }
    }
}
