//! 阅读内容来源
//!
//! - `curated` - 内置的分级短文
//! - `wikipedia` - 维基百科文章源
//! - `selector` - 在短文与外部文章之间选择，并按级别截断

pub mod curated;
pub mod selector;
pub mod wikipedia;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ReadingResult;

pub use curated::{CuratedCorpus, CuratedText};
pub use selector::ContentSelector;
pub use wikipedia::WikipediaArticleSource;

/// 文本来源类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentOrigin {
    Curated,
    External,
}

/// 一次请求使用的源文本
#[derive(Debug, Clone, PartialEq)]
pub struct SourceText {
    pub title: String,
    pub body: String,
    pub source_name: String,
    pub source_url: Option<String>,
    pub origin: ContentOrigin,
}

/// 外部文章
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Article {
    pub title: String,
    pub body: String,
    pub exists: bool,
    pub url: String,
}

impl Article {
    /// 不存在的页面
    pub fn missing(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }
}

/// 外部文章源
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// 来源名称，写入响应的 `source` 字段
    fn name(&self) -> &str;

    async fn fetch_article(&self, topic: &str) -> ReadingResult<Article>;
}
