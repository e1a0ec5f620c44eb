//! 基于停用词的简易语言识别
//!
//! 统计文本中各语言常见功能词的出现次数，得分最高者胜出。
//! 没有任何命中时返回 `"unknown"`。

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::text::segmenter::tokenize_words;

/// 无法识别时的语言代码
pub const UNKNOWN_LANGUAGE: &str = "unknown";

struct LanguageProfile {
    code: &'static str,
    stopwords: HashSet<&'static str>,
}

impl LanguageProfile {
    fn new(code: &'static str, words: &[&'static str]) -> Self {
        Self {
            code,
            stopwords: words.iter().copied().collect(),
        }
    }
}

static PROFILES: Lazy<Vec<LanguageProfile>> = Lazy::new(|| {
    vec![
        LanguageProfile::new(
            "es",
            &[
                "el", "la", "los", "las", "un", "una", "y", "que", "de", "del", "en", "es",
                "por", "para", "con", "se", "su", "sus", "mi", "muy", "pero", "como", "más",
                "está", "son", "tengo", "hay", "también", "lo", "al",
            ],
        ),
        LanguageProfile::new(
            "en",
            &[
                "the", "and", "of", "to", "is", "in", "that", "it", "with", "for", "was",
                "on", "are", "this", "be", "have", "from", "by", "not", "they", "my", "at",
            ],
        ),
        LanguageProfile::new(
            "tr",
            &[
                "ve", "bir", "bu", "da", "de", "için", "ile", "çok", "ama", "gibi", "daha",
                "olarak", "ben", "sen", "o", "biz", "var", "yok", "ne", "mi", "değil",
            ],
        ),
        LanguageProfile::new(
            "fr",
            &[
                "le", "les", "des", "et", "est", "une", "du", "dans", "pour", "pas", "qui",
                "sur", "avec", "ce", "il", "elle", "nous", "vous", "sont", "au", "aux",
            ],
        ),
        LanguageProfile::new(
            "de",
            &[
                "der", "die", "das", "und", "ist", "nicht", "ein", "eine", "zu", "mit",
                "sich", "auf", "für", "von", "den", "dem", "ich", "wir", "sind", "auch",
            ],
        ),
        LanguageProfile::new(
            "pt",
            &[
                "o", "os", "as", "um", "uma", "não", "em", "do", "da", "dos", "das", "com",
                "para", "é", "são", "muito", "mas", "também", "você", "eu", "nós",
            ],
        ),
        LanguageProfile::new(
            "it",
            &[
                "il", "gli", "di", "che", "è", "non", "per", "una", "sono", "della", "nel",
                "con", "anche", "ma", "molto", "io", "noi", "lei", "questo", "alla",
            ],
        ),
    ]
});

/// 识别文本的语言，返回 ISO 639-1 代码或 `"unknown"`
pub fn detect_language(text: &str) -> &'static str {
    let words = tokenize_words(text);
    if words.is_empty() {
        return UNKNOWN_LANGUAGE;
    }

    let mut best: Option<(&'static str, usize)> = None;
    for profile in PROFILES.iter() {
        let score = words
            .iter()
            .filter(|word| profile.stopwords.contains(word.as_str()))
            .count();

        // 平分时保留先出现的语言
        if score > 0 && best.map_or(true, |(_, top)| score > top) {
            best = Some((profile.code, score));
        }
    }

    best.map_or(UNKNOWN_LANGUAGE, |(code, _)| code)
}
