// 集成测试公共模块
//
// 提供可计数的假文章源、假翻译源和管道构建器

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use lectura::content::{Article, ArticleSource, ContentSelector, CuratedCorpus};
use lectura::error::{ReadingError, ReadingResult};
use lectura::translation::{StaticDictionary, TranslationCache, TranslationSource, WordTranslator};
use lectura::ReadingPipeline;

/// 一段足够长的西班牙语正文，用于截断和生词数量测试
pub fn long_spanish_body() -> String {
    let sentence = "Los estudiantes quieren aprender historia, geografía y literatura en la \
                    biblioteca central de la ciudad. ";
    sentence.repeat(120)
}

/// 按主题返回固定文章的假文章源
pub struct StaticArticleSource {
    articles: HashMap<String, Article>,
    fallback: Option<Article>,
    fail: bool,
    calls: AtomicUsize,
}

impl StaticArticleSource {
    /// 所有主题都不存在
    pub fn empty() -> Self {
        Self {
            articles: HashMap::new(),
            fallback: None,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// 任意主题都返回同一篇正文
    pub fn always(body: &str) -> Self {
        Self {
            fallback: Some(Article {
                title: "Artículo".to_string(),
                body: body.to_string(),
                exists: true,
                url: "https://es.wikipedia.org/wiki/Art%C3%ADculo".to_string(),
            }),
            ..Self::empty()
        }
    }

    /// 每次请求都返回网络错误
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::empty()
        }
    }

    pub fn with_article(mut self, topic: &str, body: &str) -> Self {
        self.articles.insert(
            topic.to_string(),
            Article {
                title: topic.to_string(),
                body: body.to_string(),
                exists: true,
                url: format!("https://es.wikipedia.org/wiki/{}", topic),
            },
        );
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleSource for StaticArticleSource {
    fn name(&self) -> &str {
        "Wikipedia"
    }

    async fn fetch_article(&self, topic: &str) -> ReadingResult<Article> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ReadingError::NetworkError("connection refused".to_string()));
        }

        if let Some(article) = self.articles.get(topic) {
            return Ok(article.clone());
        }

        Ok(match &self.fallback {
            Some(article) => Article {
                title: topic.to_string(),
                ..article.clone()
            },
            None => Article::missing(topic),
        })
    }
}

/// 统计调用次数的假翻译源
pub struct CountingTranslationSource {
    translations: HashMap<String, String>,
    calls: AtomicUsize,
}

impl CountingTranslationSource {
    /// 所有查询都失败
    pub fn failing() -> Self {
        Self {
            translations: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// 只认识给定的单词，其他查询失败
    pub fn with_translations(pairs: &[(&str, &str)]) -> Self {
        Self {
            translations: pairs
                .iter()
                .map(|(word, meaning)| (word.to_string(), meaning.to_string()))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationSource for CountingTranslationSource {
    async fn lookup(&self, word: &str, _source: &str, _target: &str) -> ReadingResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.translations
            .get(word)
            .cloned()
            .ok_or_else(|| ReadingError::TranslationServiceError(format!("no translation for {}", word)))
    }
}

/// 不带内置词典的翻译器，便于统计外部查询次数
pub fn translator(source: Arc<CountingTranslationSource>) -> WordTranslator {
    WordTranslator::new(
        Arc::new(TranslationCache::new()),
        StaticDictionary::default(),
        source,
    )
}

/// 构建测试管道
pub fn pipeline(
    corpus: CuratedCorpus,
    articles: Arc<StaticArticleSource>,
    curated_probability: f64,
    translations: Arc<CountingTranslationSource>,
) -> ReadingPipeline {
    let selector = ContentSelector::new(corpus, articles, curated_probability);
    ReadingPipeline::new(selector, translator(translations))
}
