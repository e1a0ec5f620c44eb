//! 阅读管道
//!
//! 一次请求的完整流程：解析级别 → 选择源文本 → 摘要 → 生词提取 →
//! 分类与翻译。只有选文失败（`ContentNotFound`）和调用方超时会返回错误，
//! 摘要和翻译失败都在内部降级。

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::config::{constants, ReadingConfig};
use crate::content::{
    ArticleSource, ContentOrigin, ContentSelector, CuratedCorpus, SourceText, WikipediaArticleSource,
};
use crate::error::ReadingResult;
use crate::level::{Level, DEFAULT_LEVEL};
use crate::text::summarize_or_fallback;
use crate::translation::{
    DeeplxTranslationSource, StaticDictionary, TranslationCache, TranslationSource, WordTranslator,
};
use crate::vocabulary::{unknown_words, CommonWords, SuffixClassifier, WordClass, WordClassifier};

/// 内置短文没有页面地址时使用的占位 URL
pub const CURATED_URL: &str = "#";

/// 阅读请求
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingRequest {
    /// 级别代码，不区分大小写，无法识别时按 b1 处理
    pub level: String,
    pub topic: Option<String>,
    /// 调用方身份，只记录日志
    pub user: Option<String>,
}

impl ReadingRequest {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            topic: None,
            user: None,
        }
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}

impl Default for ReadingRequest {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL.code())
    }
}

/// 阅读响应
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingResponse {
    pub title: String,
    pub url: String,
    pub text: String,
    pub summary: String,
    pub level: String,
    pub unknown_words: Vec<String>,
    pub verbs: Vec<String>,
    pub nouns: Vec<String>,
    pub word_meanings: BTreeMap<String, String>,
    pub source: String,
}

/// 生词分析结果
struct Vocabulary {
    unknown_words: Vec<String>,
    verbs: Vec<String>,
    nouns: Vec<String>,
    word_meanings: BTreeMap<String, String>,
}

/// 阅读管道
pub struct ReadingPipeline {
    selector: ContentSelector,
    translator: WordTranslator,
    classifier: Arc<dyn WordClassifier>,
    common_words: CommonWords,
    source_lang: String,
    target_lang: String,
    verb_tag: String,
    other_tag: String,
}

impl ReadingPipeline {
    /// 使用西班牙语 → 土耳其语的默认词汇设置
    pub fn new(selector: ContentSelector, translator: WordTranslator) -> Self {
        Self {
            selector,
            translator,
            classifier: Arc::new(SuffixClassifier::spanish()),
            common_words: CommonWords::spanish(),
            source_lang: constants::DEFAULT_SOURCE_LANG.to_string(),
            target_lang: constants::DEFAULT_TARGET_LANG.to_string(),
            verb_tag: constants::DEFAULT_VERB_TAG.to_string(),
            other_tag: constants::DEFAULT_OTHER_TAG.to_string(),
        }
    }

    /// 按配置构建完整管道（维基百科 + DeepLX）
    pub fn from_config(config: &ReadingConfig) -> ReadingResult<Self> {
        config.validate()?;
        let timeout = config.request_timeout();

        let articles = Arc::new(WikipediaArticleSource::new(&config.content_api_url, timeout)?);
        let lookup = Arc::new(DeeplxTranslationSource::new(
            &config.translation_api_url,
            config.translation_api_key.clone(),
            timeout,
        )?);

        Self::from_config_with(config, articles, lookup)
    }

    /// 按配置构建管道，文章源和翻译源由调用方提供
    pub fn from_config_with(
        config: &ReadingConfig,
        articles: Arc<dyn ArticleSource>,
        lookup: Arc<dyn TranslationSource>,
    ) -> ReadingResult<Self> {
        config.validate()?;

        let mut corpus = CuratedCorpus::builtin();
        corpus.extend(config.curated_texts.iter().cloned());
        let selector = ContentSelector::new(corpus, articles, config.curated_probability);

        let cache = Arc::new(TranslationCache::with_limit(config.cache_max_entries));
        let dictionary = StaticDictionary::builtin(&config.source_lang, &config.target_lang);
        let translator = WordTranslator::new(cache, dictionary, lookup);

        let common_words = match &config.common_words {
            Some(words) => CommonWords::new(words),
            None if config.source_lang == constants::DEFAULT_SOURCE_LANG => CommonWords::spanish(),
            None => {
                tracing::warn!("源语言 {} 没有内置常用词表，不过滤常用词", config.source_lang);
                CommonWords::new(Vec::<String>::new())
            }
        };

        Ok(Self::new(selector, translator)
            .with_classifier(Arc::new(SuffixClassifier::new(config.verb_suffixes.iter().cloned(), 2)))
            .with_common_words(common_words)
            .with_languages(&config.source_lang, &config.target_lang)
            .with_tags(&config.verb_tag, &config.other_tag))
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn WordClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_common_words(mut self, common_words: CommonWords) -> Self {
        self.common_words = common_words;
        self
    }

    pub fn with_languages(mut self, source_lang: &str, target_lang: &str) -> Self {
        self.source_lang = source_lang.to_string();
        self.target_lang = target_lang.to_string();
        self
    }

    /// 释义后缀，如 `(fiil)` / `(isim/sıfat)`
    pub fn with_tags(mut self, verb_tag: &str, other_tag: &str) -> Self {
        self.verb_tag = verb_tag.to_string();
        self.other_tag = other_tag.to_string();
        self
    }

    pub fn translator(&self) -> &WordTranslator {
        &self.translator
    }

    /// 执行一次阅读请求
    pub async fn run(&self, request: &ReadingRequest) -> ReadingResult<ReadingResponse> {
        let level = Level::resolve(&request.level);
        let profile = level.profile();
        tracing::info!(
            "阅读请求: 用户={} 级别={} 主题={}",
            request.user.as_deref().unwrap_or("anonymous"),
            level,
            request.topic.as_deref().unwrap_or("-")
        );

        let source = self.selector.select(level, request.topic.as_deref()).await?;
        let summary = summarize_or_fallback(&source.body, profile.summary_sentence_count);
        let vocabulary = self
            .analyze_vocabulary(&source.body, profile.max_unknown_word_count)
            .await;

        tracing::info!(
            "阅读内容已生成: {} (生词 {} 个, 来源 {})",
            source.title,
            vocabulary.unknown_words.len(),
            source.source_name
        );

        Ok(build_response(source, summary, level, vocabulary))
    }

    /// 带整体超时执行，超时返回 `TimeoutError`
    pub async fn run_with_timeout(
        &self,
        request: &ReadingRequest,
        timeout: Duration,
    ) -> ReadingResult<ReadingResponse> {
        tokio::time::timeout(timeout, self.run(request)).await?
    }

    async fn analyze_vocabulary(&self, body: &str, limit: usize) -> Vocabulary {
        let candidates = unknown_words(body, &self.common_words, limit);
        let mut verbs = Vec::new();
        let mut nouns = Vec::new();
        let mut word_meanings = BTreeMap::new();
        let mut untranslated = 0;

        for word in &candidates {
            let class = self.classifier.classify(word);
            let translation = self
                .translator
                .translate(word, &self.source_lang, &self.target_lang)
                .await;
            if !translation.is_available() {
                untranslated += 1;
            }

            let tag = match class {
                WordClass::Verb => {
                    verbs.push(word.clone());
                    &self.verb_tag
                }
                WordClass::Other => {
                    nouns.push(word.clone());
                    &self.other_tag
                }
            };
            tracing::debug!("生词 {} [{}] -> {}", word, class, translation);
            word_meanings.insert(word.clone(), format!("{} {}", translation, tag));
        }

        if untranslated > 0 {
            tracing::warn!("{}/{} 个生词没有译文", untranslated, candidates.len());
        }

        Vocabulary {
            unknown_words: candidates,
            verbs,
            nouns,
            word_meanings,
        }
    }
}

fn build_response(
    source: SourceText,
    summary: String,
    level: Level,
    vocabulary: Vocabulary,
) -> ReadingResponse {
    let url = match (source.origin, source.source_url) {
        (ContentOrigin::External, Some(url)) if !url.is_empty() => url,
        _ => CURATED_URL.to_string(),
    };

    ReadingResponse {
        title: source.title,
        url,
        text: source.body,
        summary,
        level: level.code().to_string(),
        unknown_words: vocabulary.unknown_words,
        verbs: vocabulary.verbs,
        nouns: vocabulary.nouns,
        word_meanings: vocabulary.word_meanings,
        source: source.source_name,
    }
}
