//! 错误处理集成测试
//!
//! 只有选文失败会返回错误，翻译和摘要失败都在内部降级

use std::sync::Arc;

use lectura::content::CuratedCorpus;
use lectura::error::{ErrorCategory, ReadingError};
use lectura::ReadingRequest;

#[allow(dead_code)]
mod common {
    include!("common/mod.rs");
}

use common::{pipeline, CountingTranslationSource, StaticArticleSource};

/// 请求主题和重试主题都不存在时返回 ContentNotFound
#[tokio::test]
async fn test_missing_topic_and_retry_is_content_not_found() {
    let articles = Arc::new(StaticArticleSource::empty());
    let pipeline = pipeline(
        CuratedCorpus::empty(),
        articles.clone(),
        0.7,
        Arc::new(CountingTranslationSource::failing()),
    );

    let result = pipeline
        .run(&ReadingRequest::new("b2").with_topic("NonexistentXYZ987"))
        .await;

    match result {
        Err(ReadingError::ContentNotFound { level, topic }) => {
            assert_eq!(level, "b2");
            assert_eq!(topic.as_deref(), Some("NonexistentXYZ987"));
        }
        other => panic!("expected ContentNotFound, got {:?}", other),
    }
    assert_eq!(articles.calls(), 2);
}

/// 请求主题不存在时改用随机主题
#[tokio::test]
async fn test_missing_topic_retries_with_random_topic() {
    let mut articles = StaticArticleSource::empty();
    for topic in lectura::Level::A2.topics() {
        articles = articles.with_article(topic, "Un texto corto. Otra frase.");
    }
    let articles = Arc::new(articles);
    let pipeline = pipeline(
        CuratedCorpus::empty(),
        articles.clone(),
        0.0,
        Arc::new(CountingTranslationSource::failing()),
    );

    let response = pipeline
        .run(&ReadingRequest::new("a2").with_topic("NonexistentXYZ987"))
        .await
        .unwrap();

    assert!(lectura::Level::A2.topics().contains(&response.title.as_str()));
    assert_eq!(articles.calls(), 2);
}

/// 网络错误视为文章不存在
#[tokio::test]
async fn test_fetch_errors_count_as_missing() {
    let pipeline = pipeline(
        CuratedCorpus::empty(),
        Arc::new(StaticArticleSource::failing()),
        0.0,
        Arc::new(CountingTranslationSource::failing()),
    );

    let err = pipeline.run(&ReadingRequest::new("c1")).await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Content);
    assert!(!err.is_retryable());
    assert!(matches!(err, ReadingError::ContentNotFound { topic: None, .. }));
}

/// 翻译全部失败时请求仍然成功
#[tokio::test]
async fn test_translation_failures_do_not_fail_request() {
    let translations = Arc::new(CountingTranslationSource::failing());
    let pipeline = pipeline(
        CuratedCorpus::builtin(),
        Arc::new(StaticArticleSource::empty()),
        1.0,
        translations.clone(),
    );

    let response = pipeline.run(&ReadingRequest::new("a1")).await.unwrap();

    assert_eq!(response.unknown_words.len(), 5);
    assert!(response
        .word_meanings
        .values()
        .all(|meaning| meaning.starts_with("Çeviri bulunamadı")));
    assert_eq!(translations.calls(), 5);
}
