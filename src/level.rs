//! 熟练度级别与级别配置
//!
//! 六个固定级别（a1..c2）各自决定正文长度、摘要句数和生词数量上限。
//! 未识别的级别一律回退到 `b1`。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 熟练度级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

/// 默认级别
pub const DEFAULT_LEVEL: Level = Level::B1;

impl Level {
    /// 全部级别，难度递增
    pub const ALL: [Level; 6] = [
        Level::A1,
        Level::A2,
        Level::B1,
        Level::B2,
        Level::C1,
        Level::C2,
    ];

    /// 解析级别代码（不区分大小写），无法识别时回退到 `b1`
    pub fn resolve(code: &str) -> Level {
        code.parse().unwrap_or(DEFAULT_LEVEL)
    }

    /// 级别代码
    pub fn code(self) -> &'static str {
        match self {
            Level::A1 => "a1",
            Level::A2 => "a2",
            Level::B1 => "b1",
            Level::B2 => "b2",
            Level::C1 => "c1",
            Level::C2 => "c2",
        }
    }

    /// 该级别的长度与词汇预算
    pub fn profile(self) -> &'static LevelProfile {
        &LEVEL_PROFILES[self as usize]
    }

    /// 该级别的外部文章主题列表
    pub fn topics(self) -> &'static [&'static str] {
        match self {
            Level::A1 => &[
                "Familia", "Casa", "Comida", "Color", "Animal",
                "Número", "Día", "Mes", "Hora", "Fruta",
            ],
            Level::A2 => &[
                "Deporte", "Escuela", "Música", "Tiempo", "Salud",
                "Ropa", "Viaje", "Restaurante", "Compras", "Hobby",
            ],
            Level::B1 => &[
                "Historia de España", "Geografía de España", "Cultura de México",
                "Turismo en España", "Gastronomía española", "Deportes en España",
                "Parques nacionales", "Fiestas populares", "Tradiciones", "Música española",
            ],
            Level::B2 => &[
                "Literatura española", "Arte español", "Cine español",
                "Política de España", "Medio ambiente", "Sociedad española",
                "Educación en España", "Historia de México", "Cocina latinoamericana",
                "Religión en España",
            ],
            Level::C1 => &[
                "Filosofía española", "Ciencia en España", "Economía de España",
                "Arquitectura española", "Literatura latinoamericana",
                "Historia del arte español", "Política internacional española",
                "Empresas españolas", "Sistema político español", "Derecho español",
            ],
            Level::C2 => &[
                "Arqueología en España", "Lingüística española", "Antropología española",
                "Historia de la filosofía española", "Economía global",
                "Política latinoamericana", "Corrientes literarias españolas",
                "Movimientos artísticos españoles", "Crítica social", "Academia española",
            ],
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 未知级别代码
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLevel(pub String);

impl fmt::Display for UnknownLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "未知级别 '{}'，可用: a1, a2, b1, b2, c1, c2", self.0)
    }
}

impl std::error::Error for UnknownLevel {}

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a1" => Ok(Level::A1),
            "a2" => Ok(Level::A2),
            "b1" => Ok(Level::B1),
            "b2" => Ok(Level::B2),
            "c1" => Ok(Level::C1),
            "c2" => Ok(Level::C2),
            _ => Err(UnknownLevel(s.to_string())),
        }
    }
}

/// 级别配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelProfile {
    pub level: Level,
    /// 外部文章正文的最大字符数
    pub max_body_length: usize,
    pub summary_sentence_count: usize,
    pub max_unknown_word_count: usize,
}

/// 每个级别的预算，顺序与 `Level` 的判别值一致
static LEVEL_PROFILES: [LevelProfile; 6] = [
    LevelProfile {
        level: Level::A1,
        max_body_length: 500,
        summary_sentence_count: 2,
        max_unknown_word_count: 5,
    },
    LevelProfile {
        level: Level::A2,
        max_body_length: 800,
        summary_sentence_count: 3,
        max_unknown_word_count: 8,
    },
    LevelProfile {
        level: Level::B1,
        max_body_length: 1500,
        summary_sentence_count: 4,
        max_unknown_word_count: 12,
    },
    LevelProfile {
        level: Level::B2,
        max_body_length: 2500,
        summary_sentence_count: 5,
        max_unknown_word_count: 15,
    },
    LevelProfile {
        level: Level::C1,
        max_body_length: 4000,
        summary_sentence_count: 6,
        max_unknown_word_count: 20,
    },
    LevelProfile {
        level: Level::C2,
        max_body_length: 8000,
        summary_sentence_count: 8,
        max_unknown_word_count: 25,
    },
];

/// 所有级别配置
pub fn profiles() -> &'static [LevelProfile] {
    &LEVEL_PROFILES
}
