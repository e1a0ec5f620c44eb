//! 文本切分
//!
//! 句子按字面量 `". "` 切分，单词按空白切分后去除两端标点。
//! 缩写和连续标点不做特殊处理。

/// 句子分隔符
pub const SENTENCE_SEPARATOR: &str = ". ";

/// 单词两端需要去除的标点
pub const PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\'', '-',
];

/// 按 `". "` 切分句子
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_SEPARATOR).collect()
}

/// 去除单词两端的标点
pub fn strip_punctuation(word: &str) -> &str {
    word.trim_matches(PUNCTUATION)
}

/// 小写化并去除两端标点，得到可比较的单词形式
pub fn normalize_word(word: &str) -> String {
    strip_punctuation(&word.to_lowercase()).to_string()
}

/// 切分单词：小写、去标点、丢弃空词
pub fn tokenize_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(normalize_word)
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_period_space_only() {
        let sentences = split_sentences("Hola. Me llamo Juan. Tengo 3.5 euros.");
        assert_eq!(sentences, vec!["Hola", "Me llamo Juan", "Tengo 3.5 euros."]);
    }

    #[test]
    fn test_split_without_separator() {
        assert_eq!(split_sentences("Una sola frase"), vec!["Una sola frase"]);
        assert_eq!(split_sentences(""), vec![""]);
    }

    #[test]
    fn test_abbreviations_are_not_special() {
        assert_eq!(split_sentences("Sr. García vive aquí").len(), 2);
    }

    #[test]
    fn test_tokenize_strips_and_lowercases() {
        let words = tokenize_words("¿Dónde está \"Toby\"? (el perro) -- ¡Aquí!");
        assert_eq!(words, vec!["¿dónde", "está", "toby", "el", "perro", "¡aquí"]);
    }

    #[test]
    fn test_tokenize_keeps_inner_punctuation() {
        assert_eq!(tokenize_words("auto-escuela, 3.5"), vec!["auto-escuela", "3.5"]);
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("'Casa.'"), "casa");
        assert_eq!(normalize_word("..."), "");
    }
}
