//! 内置西班牙语→土耳其语词典

use std::collections::HashMap;

use once_cell::sync::Lazy;

static SPANISH_TURKISH: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("animales", "hayvanlar"),
        ("constituyen", "oluşturur"),
        ("reino", "krallık"),
        ("seres", "varlıklar"),
        ("vivos", "canlı"),
        ("eucariotas", "ökaryot"),
        ("heterótrofos", "heterotrof"),
        ("pluricelulares", "çok hücreli"),
        ("tisulares", "dokusal"),
        ("poríferos", "süngerler"),
        ("capacidad", "kapasite"),
        ("movimiento", "hareket"),
        ("cloroplasto", "kloroplast"),
        ("excepciones", "istisnalar"),
        ("chlorotica", "klorotik"),
        ("celular", "hücresel"),
        ("desarrollo", "gelişim"),
        ("embrionario", "embriyonik"),
        ("blástula", "blastula"),
        ("determina", "belirler"),
        ("plan", "plan"),
        ("corporal", "vücut"),
        // 动词
        ("reúne", "toplar"),
        ("caracterizan", "karakterize eder"),
        ("tener", "sahip olmak"),
        ("atraviesa", "geçer"),
    ])
});

/// 已知译文表，按语言对选择
#[derive(Debug, Clone, Default)]
pub struct StaticDictionary {
    entries: HashMap<String, String>,
}

impl StaticDictionary {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(word, translation)| (word.into(), translation.into()))
                .collect(),
        }
    }

    /// 内置词典；只收录 es→tr，其他语言对为空表
    pub fn builtin(source_lang: &str, target_lang: &str) -> Self {
        if source_lang == "es" && target_lang == "tr" {
            Self::new(SPANISH_TURKISH.iter().map(|(k, v)| (*k, *v)))
        } else {
            Self::default()
        }
    }

    /// 查询已归一化的单词
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
