//! 内容选择器
//!
//! 以固定概率优先使用内置短文；否则按主题获取外部文章，主题不存在时
//! 换一个随机主题重试一次，仍失败则返回 `ContentNotFound`。

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::constants;
use crate::content::{Article, ArticleSource, ContentOrigin, CuratedCorpus, SourceText};
use crate::error::{ReadingError, ReadingResult};
use crate::level::Level;

/// 内容选择器
pub struct ContentSelector {
    corpus: CuratedCorpus,
    source: Arc<dyn ArticleSource>,
    curated_probability: f64,
}

impl ContentSelector {
    /// `curated_probability` 必须在 [0, 1] 之间，越界时会被截断
    pub fn new(
        corpus: CuratedCorpus,
        source: Arc<dyn ArticleSource>,
        curated_probability: f64,
    ) -> Self {
        Self {
            corpus,
            source,
            curated_probability: curated_probability.clamp(0.0, 1.0),
        }
    }

    pub fn corpus(&self) -> &CuratedCorpus {
        &self.corpus
    }

    /// 为级别选择源文本
    pub async fn select(&self, level: Level, topic: Option<&str>) -> ReadingResult<SourceText> {
        if let Some(text) = self.pick_curated(level) {
            tracing::info!("使用内置短文: {} ({})", text.title, level);
            return Ok(text);
        }

        let requested = topic.map(str::trim).filter(|t| !t.is_empty());
        let first_topic = match requested {
            Some(t) => t.to_string(),
            None => random_topic(level),
        };

        if let Some(article) = self.try_fetch(&first_topic).await {
            return Ok(self.external_text(article, level));
        }

        let retry_topic = random_topic(level);
        tracing::info!("主题 '{}' 不存在，改用随机主题 '{}'", first_topic, retry_topic);

        match self.try_fetch(&retry_topic).await {
            Some(article) => Ok(self.external_text(article, level)),
            None => Err(ReadingError::content_not_found(level.code(), requested)),
        }
    }

    fn pick_curated(&self, level: Level) -> Option<SourceText> {
        if !self.corpus.has_texts(level) {
            return None;
        }

        let mut rng = rand::thread_rng();
        if rng.gen::<f64>() >= self.curated_probability {
            return None;
        }

        self.corpus.choose(level, &mut rng).map(|text| SourceText {
            title: text.title.clone(),
            body: text.body.clone(),
            source_name: text.source_label.clone(),
            source_url: None,
            origin: ContentOrigin::Curated,
        })
    }

    /// 获取存在的文章；不存在或请求失败都返回 `None`
    async fn try_fetch(&self, topic: &str) -> Option<Article> {
        match self.source.fetch_article(topic).await {
            Ok(article) if article.exists => Some(article),
            Ok(_) => {
                tracing::debug!("{} 上不存在主题: {}", self.source.name(), topic);
                None
            }
            Err(e) if e.is_retryable() => {
                tracing::warn!("获取文章暂时失败 ({}): {}", topic, e);
                None
            }
            Err(e) => {
                tracing::warn!("获取文章失败 ({}): {}", topic, e);
                None
            }
        }
    }

    fn external_text(&self, article: Article, level: Level) -> SourceText {
        let limit = level.profile().max_body_length.min(constants::MAX_ARTICLE_CHARS);
        SourceText {
            title: article.title,
            body: truncate_chars(&article.body, limit),
            source_name: self.source.name().to_string(),
            source_url: Some(article.url),
            origin: ContentOrigin::External,
        }
    }
}

/// 按级别主题表随机选一个主题
pub fn random_topic(level: Level) -> String {
    level
        .topics()
        .choose(&mut rand::thread_rng())
        .map(|topic| topic.to_string())
        .unwrap_or_default()
}

/// 按字符数截断，不考虑句子边界
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
