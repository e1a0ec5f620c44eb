//! 词汇分析
//!
//! 从正文中找出学习者可能不认识的单词：去重、过滤常用词、按级别截断。

pub mod classifier;

use std::collections::HashSet;

use crate::text::segmenter::tokenize_words;

pub use classifier::{SuffixClassifier, WordClass, WordClassifier, SPANISH_VERB_SUFFIXES};

/// 西班牙语基础词汇，不作为生词展示
pub const SPANISH_COMMON_WORDS: &[&str] = &[
    "el", "la", "los", "las", "un", "una", "unos", "unas", "y", "o", "pero", "porque",
    "como", "qué", "quién", "cuándo", "dónde", "por", "para", "con", "sin", "en", "de",
    "a", "al", "del", "es", "son", "estar", "ser", "haber", "tener", "hacer", "ir",
    "venir", "ver", "oír", "decir", "hablar", "comer", "beber", "dormir", "vivir",
    "trabajar", "estudiar", "sí", "no", "tal vez", "quizás", "hoy", "ayer", "mañana",
    "ahora", "luego", "después", "antes", "siempre", "nunca", "todo", "nada", "mucho",
    "poco", "más", "menos", "bien", "mal",
];

/// 常用词集合
#[derive(Debug, Clone)]
pub struct CommonWords {
    words: HashSet<String>,
}

impl CommonWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn spanish() -> Self {
        Self::new(SPANISH_COMMON_WORDS)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for CommonWords {
    fn default() -> Self {
        Self::spanish()
    }
}

/// 正文中去重后的纯字母单词，保持首次出现的顺序
pub fn distinct_alphabetic_words(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    tokenize_words(text)
        .into_iter()
        .filter(|word| word.chars().all(char::is_alphabetic))
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// 候选生词：去掉常用词后取前 `limit` 个
pub fn unknown_words(text: &str, common: &CommonWords, limit: usize) -> Vec<String> {
    distinct_alphabetic_words(text)
        .into_iter()
        .filter(|word| !common.contains(word))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAMILIA: &str = "Me llamo Juan. Tengo una familia pequeña. Mi padre se llama Carlos \
                           y mi madre se llama María.";

    #[test]
    fn test_distinct_words_keep_discovery_order() {
        let words = distinct_alphabetic_words("El perro, el gato y EL perro.");
        assert_eq!(words, vec!["el", "perro", "gato", "y"]);
    }

    #[test]
    fn test_non_alphabetic_tokens_are_dropped() {
        let words = distinct_alphabetic_words("En 1492 llegó a-b xyz123 ¿qué?");
        assert_eq!(words, vec!["en", "llegó"]);
    }

    #[test]
    fn test_unknown_words_filter_common_words() {
        let words = unknown_words(FAMILIA, &CommonWords::spanish(), 100);
        assert!(!words.contains(&"una".to_string()));
        assert!(!words.contains(&"y".to_string()));
        assert_eq!(words[..3], ["me", "llamo", "juan"]);
    }

    #[test]
    fn test_unknown_words_respect_limit() {
        let words = unknown_words(FAMILIA, &CommonWords::spanish(), 5);
        assert_eq!(words, vec!["me", "llamo", "juan", "tengo", "familia"]);
    }

    #[test]
    fn test_custom_common_words_are_lowercased() {
        let common = CommonWords::new(["Juan", "ME"]);
        assert!(common.contains("juan"));
        let words = unknown_words(FAMILIA, &common, 2);
        assert_eq!(words, vec!["llamo", "tengo"]);
    }
}
