//! DeepLX 兼容的 HTTP 翻译源

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ReadingError, ReadingResult};
use crate::translation::provider::TranslationSource;

#[derive(Serialize)]
struct DeeplxRequest<'a> {
    text: &'a str,
    source_lang: String,
    target_lang: String,
}

#[derive(Deserialize)]
struct DeeplxResponse {
    code: u16,
    #[serde(default)]
    data: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// 通过 DeepLX 接口翻译单词
pub struct DeeplxTranslationSource {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl DeeplxTranslationSource {
    pub fn new(api_url: &str, api_key: Option<String>, timeout: Duration) -> ReadingResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ReadingError::ConfigError(format!("创建HTTP客户端失败: {}", e)))?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
            api_key,
        })
    }
}

/// DeepLX 使用大写语言代码
fn api_lang(code: &str) -> String {
    code.to_uppercase()
}

/// 解析 DeepLX 响应正文
fn parse_response(body: &str) -> ReadingResult<String> {
    let response: DeeplxResponse = serde_json::from_str(body)?;
    if response.code != 200 {
        return Err(ReadingError::TranslationServiceError(format!(
            "状态码 {}: {}",
            response.code,
            response.message.unwrap_or_default()
        )));
    }

    response
        .data
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| ReadingError::TranslationServiceError("响应中没有译文".to_string()))
}

#[async_trait]
impl TranslationSource for DeeplxTranslationSource {
    async fn lookup(
        &self,
        word: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> ReadingResult<String> {
        let payload = DeeplxRequest {
            text: word,
            source_lang: api_lang(source_lang),
            target_lang: api_lang(target_lang),
        };
        let body = serde_json::to_string(&payload)?;

        let mut request = self
            .client
            .post(&self.api_url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| ReadingError::from(e).with_context(word))?;
        let text = response.text().await?;
        parse_response(&text).map_err(|e| e.with_context(word))
    }
}
