//! 词性分类器
//!
//! 默认实现按西班牙语动词不定式词尾（-ar / -er / -ir）判断，规则刻意保持粗糙：
//! 以这些字母结尾的名词也会被判为动词。

use std::fmt;

use serde::Serialize;

/// 词性类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    Verb,
    Other,
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordClass::Verb => f.write_str("verb"),
            WordClass::Other => f.write_str("other"),
        }
    }
}

/// 可替换的单词分类策略
pub trait WordClassifier: Send + Sync {
    fn classify(&self, word: &str) -> WordClass;
}

/// 按词尾判断动词的分类器
#[derive(Debug, Clone)]
pub struct SuffixClassifier {
    suffixes: Vec<String>,
    min_length: usize,
}

/// 西班牙语动词不定式词尾
pub const SPANISH_VERB_SUFFIXES: &[&str] = &["ar", "er", "ir"];

impl SuffixClassifier {
    /// 单词字符数必须大于 `min_length` 且以某个词尾结尾才算动词
    pub fn new<I, S>(suffixes: I, min_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
            min_length,
        }
    }

    pub fn spanish() -> Self {
        Self::new(SPANISH_VERB_SUFFIXES.iter().copied(), 2)
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

impl Default for SuffixClassifier {
    fn default() -> Self {
        Self::spanish()
    }
}

impl WordClassifier for SuffixClassifier {
    fn classify(&self, word: &str) -> WordClass {
        let long_enough = word.chars().count() > self.min_length;
        if long_enough && self.suffixes.iter().any(|suffix| word.ends_with(suffix.as_str())) {
            WordClass::Verb
        } else {
            WordClass::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_infinitives_are_verbs() {
        let classifier = SuffixClassifier::spanish();
        assert_eq!(classifier.classify("hablar"), WordClass::Verb);
        assert_eq!(classifier.classify("comer"), WordClass::Verb);
        assert_eq!(classifier.classify("vivir"), WordClass::Verb);
    }

    #[test]
    fn test_other_words() {
        let classifier = SuffixClassifier::spanish();
        assert_eq!(classifier.classify("casa"), WordClass::Other);
        assert_eq!(classifier.classify("perro"), WordClass::Other);
    }

    #[test]
    fn test_length_must_exceed_two() {
        let classifier = SuffixClassifier::spanish();
        assert_eq!(classifier.classify("ir"), WordClass::Other);
        assert_eq!(classifier.classify("ver"), WordClass::Verb);
    }

    #[test]
    fn test_nouns_with_verb_endings_are_misclassified() {
        // 已知的误判：名词 "lugar"、"mujer" 也以动词词尾结尾
        let classifier = SuffixClassifier::spanish();
        assert_eq!(classifier.classify("lugar"), WordClass::Verb);
        assert_eq!(classifier.classify("mujer"), WordClass::Verb);
    }

    #[test]
    fn test_custom_suffixes() {
        let classifier = SuffixClassifier::new(["mek", "mak"], 3);
        assert_eq!(classifier.classify("gelmek"), WordClass::Verb);
        assert_eq!(classifier.classify("kitap"), WordClass::Other);
        assert_eq!(classifier.classify("mak"), WordClass::Other);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // "ñir" 是三个字符但占四个字节
        let classifier = SuffixClassifier::new(["ir"], 3);
        assert_eq!(classifier.classify("ñir"), WordClass::Other);
    }
}
