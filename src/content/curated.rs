//! 内置分级短文

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::level::Level;

/// 内置短文的来源标签
pub const CURATED_SOURCE_LABEL: &str = "Hazır Metin";

/// 手写的分级短文
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedText {
    pub level: Level,
    pub title: String,
    pub body: String,
    #[serde(default = "default_source_label")]
    pub source_label: String,
}

fn default_source_label() -> String {
    CURATED_SOURCE_LABEL.to_string()
}

/// 按级别索引的短文集合，启动后只读
#[derive(Debug, Clone, Default)]
pub struct CuratedCorpus {
    texts: HashMap<Level, Vec<CuratedText>>,
}

impl CuratedCorpus {
    pub fn new<I: IntoIterator<Item = CuratedText>>(texts: I) -> Self {
        let mut corpus = Self::default();
        corpus.extend(texts);
        corpus
    }

    /// 空集合
    pub fn empty() -> Self {
        Self::default()
    }

    /// 内置短文
    pub fn builtin() -> Self {
        Self::new([CuratedText {
            level: Level::A1,
            title: "Mi Familia".to_string(),
            body: "Me llamo Juan. Tengo una familia pequeña. Mi padre se llama Carlos y mi \
                   madre se llama María. Tengo un hermano y una hermana. Mi hermano es mayor \
                   y mi hermana es menor. Vivimos en una casa bonita con un perro. El perro \
                   se llama Toby. Me gusta mucho mi familia."
                .to_string(),
            source_label: CURATED_SOURCE_LABEL.to_string(),
        }])
    }

    pub fn extend<I: IntoIterator<Item = CuratedText>>(&mut self, texts: I) {
        for text in texts {
            self.texts.entry(text.level).or_default().push(text);
        }
    }

    pub fn texts_for(&self, level: Level) -> &[CuratedText] {
        self.texts.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_texts(&self, level: Level) -> bool {
        !self.texts_for(level).is_empty()
    }

    /// 均匀随机选一篇
    pub fn choose<R: Rng + ?Sized>(&self, level: Level, rng: &mut R) -> Option<&CuratedText> {
        self.texts_for(level).choose(rng)
    }

    pub fn len(&self) -> usize {
        self.texts.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
