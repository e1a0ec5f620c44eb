//! 文本处理：切分、摘要、语言识别

pub mod language;
pub mod segmenter;
pub mod summarizer;

pub use language::detect_language;
pub use segmenter::{normalize_word, split_sentences, strip_punctuation, tokenize_words};
pub use summarizer::{fallback_summary, summarize, summarize_or_fallback};
