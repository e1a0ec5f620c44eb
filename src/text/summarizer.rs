//! 抽取式摘要：按级别取前 N 句

use crate::error::{ReadingError, ReadingResult};
use crate::text::segmenter::{split_sentences, SENTENCE_SEPARATOR};

/// 摘要失败时回退使用的句数
pub const FALLBACK_SENTENCE_COUNT: usize = 3;

/// 取前 `sentence_count` 句作为摘要
///
/// 句数不超过 `sentence_count` 时原样返回文本；否则用 `". "` 连接前
/// `sentence_count` 句并补一个句号。`sentence_count` 为 0 时返回错误。
pub fn summarize(text: &str, sentence_count: usize) -> ReadingResult<String> {
    if sentence_count == 0 {
        return Err(ReadingError::InvalidInput("摘要句数必须大于0".to_string()));
    }

    let sentences = split_sentences(text);
    if sentences.len() <= sentence_count {
        return Ok(text.to_string());
    }

    Ok(join_sentences(&sentences[..sentence_count]))
}

/// 回退摘要：前三句，不会失败
pub fn fallback_summary(text: &str) -> String {
    let sentences = split_sentences(text);
    let take = sentences.len().min(FALLBACK_SENTENCE_COUNT);
    join_sentences(&sentences[..take])
}

/// 先尝试按级别摘要，失败时降级为回退摘要
pub fn summarize_or_fallback(text: &str, sentence_count: usize) -> String {
    match summarize(text, sentence_count) {
        Ok(summary) => summary,
        Err(e) => {
            tracing::warn!("摘要生成失败，使用回退摘要: {}", e);
            fallback_summary(text)
        }
    }
}

fn join_sentences(sentences: &[&str]) -> String {
    let mut summary = sentences.join(SENTENCE_SEPARATOR);
    summary.push('.');
    summary
}
