//! 维基百科文章源
//!
//! 通过 MediaWiki action API 获取纯文本正文和页面地址。

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::content::{Article, ArticleSource};
use crate::error::{ReadingError, ReadingResult};

/// 来源名称
pub const WIKIPEDIA_SOURCE_NAME: &str = "Wikipedia";

const USER_AGENT: &str = concat!("lectura/", env!("CARGO_PKG_VERSION"), " (reading practice)");

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    query: Option<QueryBody>,
}

#[derive(Deserialize)]
struct QueryBody {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Deserialize)]
struct Page {
    title: String,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    fullurl: Option<String>,
}

/// 维基百科文章源
pub struct WikipediaArticleSource {
    client: reqwest::Client,
    api_url: Url,
}

impl WikipediaArticleSource {
    /// `api_url` 形如 `https://es.wikipedia.org/w/api.php`
    pub fn new(api_url: &str, timeout: Duration) -> ReadingResult<Self> {
        let api_url = Url::parse(api_url)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ReadingError::ConfigError(format!("创建HTTP客户端失败: {}", e)))?;

        Ok(Self { client, api_url })
    }

    /// 语言版本对应的 API 地址
    pub fn api_url_for_language(lang: &str) -> String {
        format!("https://{}.wikipedia.org/w/api.php", lang)
    }

    async fn fetch_body(&self, url: Url) -> ReadingResult<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    fn query_url(&self, topic: &str) -> Url {
        let mut url = self.api_url.clone();
        url.query_pairs_mut()
            .append_pair("action", "query")
            .append_pair("format", "json")
            .append_pair("formatversion", "2")
            .append_pair("prop", "extracts|info")
            .append_pair("explaintext", "1")
            .append_pair("inprop", "url")
            .append_pair("redirects", "1")
            .append_pair("titles", topic);
        url
    }
}

/// 解析查询结果，取第一个页面
fn parse_article(topic: &str, body: &str) -> ReadingResult<Article> {
    let response: QueryResponse =
        serde_json::from_str(body).map_err(|e| ReadingError::from(e).with_context(topic))?;
    let page = response
        .query
        .and_then(|query| query.pages.into_iter().next())
        .ok_or_else(|| ReadingError::ParseError("响应中没有页面".to_string()).with_context(topic))?;

    if page.missing || page.invalid {
        return Ok(Article::missing(&page.title));
    }

    let body = page.extract.unwrap_or_default();
    if body.trim().is_empty() {
        tracing::debug!("页面没有正文，视为不存在: {}", topic);
        return Ok(Article::missing(&page.title));
    }

    Ok(Article {
        title: page.title,
        body,
        exists: true,
        url: page.fullurl.unwrap_or_default(),
    })
}

#[async_trait]
impl ArticleSource for WikipediaArticleSource {
    fn name(&self) -> &str {
        WIKIPEDIA_SOURCE_NAME
    }

    async fn fetch_article(&self, topic: &str) -> ReadingResult<Article> {
        let url = self.query_url(topic);
        tracing::debug!("请求维基百科页面: {}", url);

        let body = self
            .fetch_body(url)
            .await
            .map_err(|e| e.with_context(format!("{} 主题 {}", WIKIPEDIA_SOURCE_NAME, topic)))?;
        parse_article(topic, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url_encodes_topic() {
        let source = WikipediaArticleSource::new(
            &WikipediaArticleSource::api_url_for_language("es"),
            Duration::from_secs(5),
        )
        .unwrap();
        let url = source.query_url("Historia de España");
        let query = url.query().unwrap();
        assert!(url.as_str().starts_with("https://es.wikipedia.org/w/api.php?"));
        assert!(query.contains("titles=Historia+de+Espa%C3%B1a"));
        assert!(query.contains("formatversion=2"));
    }

    #[test]
    fn test_parse_existing_page() {
        let body = r#"{"batchcomplete":true,"query":{"pages":[{"pageid":1,"ns":0,
            "title":"Familia","extract":"La familia es un grupo. Tiene miembros.",
            "fullurl":"https://es.wikipedia.org/wiki/Familia"}]}}"#;
        let article = parse_article("Familia", body).unwrap();
        assert!(article.exists);
        assert_eq!(article.title, "Familia");
        assert_eq!(article.url, "https://es.wikipedia.org/wiki/Familia");
        assert!(article.body.starts_with("La familia"));
    }

    #[test]
    fn test_parse_missing_page() {
        let body = r#"{"query":{"pages":[{"ns":0,"title":"NonexistentXYZ987","missing":true}]}}"#;
        let article = parse_article("NonexistentXYZ987", body).unwrap();
        assert!(!article.exists);
        assert_eq!(article.title, "NonexistentXYZ987");
    }

    #[test]
    fn test_parse_without_pages_is_error() {
        assert!(parse_article("x", r#"{"batchcomplete":true}"#).is_err());
        assert!(parse_article("x", "not json").is_err());
    }

    #[test]
    fn test_parse_errors_name_the_topic() {
        let error = parse_article("Historia de España", "<html>").unwrap_err();
        assert!(matches!(error, ReadingError::ParseError(_)));
        assert!(error.to_string().contains("Historia de España"));

        let error = parse_article("Familia", r#"{"query":{"pages":[]}}"#).unwrap_err();
        assert!(error.to_string().contains("Familia"));
    }
}
