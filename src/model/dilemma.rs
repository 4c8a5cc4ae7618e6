use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

pub const CATALOG_SCHEMA_VERSION: u32 = 1;

/// Interface language. Doubles as the lookup key for localized content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Es,
    En,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }
}

/// Localized text, normalized at catalog load. Content that only ships
/// the Spanish string gets it for both languages.
#[derive(Debug, Clone)]
pub struct Text {
    es: String,
    en: String,
}

impl Text {
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Es => &self.es,
            Language::En => &self.en,
        }
    }
}

/// Content authors write either a plain string or a per-language map.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawText {
    Plain(String),
    PerLanguage { es: String, en: Option<String> },
}

impl From<RawText> for Text {
    fn from(raw: RawText) -> Self {
        match raw {
            RawText::Plain(text) => Text {
                es: text.clone(),
                en: text,
            },
            RawText::PerLanguage { es, en } => {
                let en = en.unwrap_or_else(|| es.clone());
                Text { es, en }
            }
        }
    }
}

/// Authored theme tag, used to key scene music.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DilemmaCategory {
    Safety,
    Technical,
    Management,
    Business,
    Crisis,
}

#[derive(Debug, Clone)]
pub struct DilemmaOption {
    pub text: Text,
    pub is_correct: bool,
    pub narrative_response: Text,
}

#[derive(Debug, Clone)]
pub struct Dilemma {
    pub id: u32,
    pub title: Text,
    pub situation: Text,
    pub category: Option<DilemmaCategory>,
    pub character_image: Option<String>,
    pub options: Vec<DilemmaOption>,
}

impl Dilemma {
    /// Display name derived from the character art asset,
    /// e.g. "sr_torres.png" -> "Sr Torres".
    pub fn character_name(&self) -> Option<String> {
        let image = self.character_image.as_deref()?;
        let stem = image.split('.').next().unwrap_or(image);
        let name = stem
            .split('_')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

/* =========================
   Wire shapes
   ========================= */

#[derive(Debug, Deserialize)]
struct RawCatalog {
    schema_version: u32,
    dilemmas: Vec<RawDilemma>,
}

#[derive(Debug, Deserialize)]
struct RawDilemma {
    id: u32,
    title: RawText,
    situation: RawText,
    #[serde(default)]
    category: Option<DilemmaCategory>,
    #[serde(default)]
    character_image: Option<String>,
    options: Vec<RawOption>,
}

#[derive(Debug, Deserialize)]
struct RawOption {
    text: RawText,
    is_correct: bool,
    narrative_response: RawText,
}

/* =========================
   Catalog
   ========================= */

/// The ordered, immutable dilemma sequence. Position is the index.
#[derive(Debug, Clone)]
pub struct DilemmaCatalog {
    dilemmas: Vec<Dilemma>,
}

impl DilemmaCatalog {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let raw: RawCatalog =
            serde_json::from_str(json).context("malformed dilemma catalog")?;

        if raw.schema_version != CATALOG_SCHEMA_VERSION {
            bail!(
                "unsupported catalog schema version {} (expected {})",
                raw.schema_version,
                CATALOG_SCHEMA_VERSION
            );
        }
        if raw.dilemmas.is_empty() {
            bail!("dilemma catalog is empty");
        }

        let mut seen = HashSet::new();
        for dilemma in &raw.dilemmas {
            if !seen.insert(dilemma.id) {
                bail!("duplicate dilemma id {}", dilemma.id);
            }
            if dilemma.options.is_empty() {
                bail!("dilemma {} has no options", dilemma.id);
            }
        }

        let dilemmas = raw
            .dilemmas
            .into_iter()
            .map(|dilemma| Dilemma {
                id: dilemma.id,
                title: dilemma.title.into(),
                situation: dilemma.situation.into(),
                category: dilemma.category,
                character_image: dilemma.character_image,
                options: dilemma
                    .options
                    .into_iter()
                    .map(|option| DilemmaOption {
                        text: option.text.into(),
                        is_correct: option.is_correct,
                        narrative_response: option.narrative_response.into(),
                    })
                    .collect(),
            })
            .collect();

        Ok(Self { dilemmas })
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json_str(&json)
    }

    /// The catalog shipped with the game.
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_json_str(include_str!("../../data/dilemmas.json"))
    }

    pub fn len(&self) -> usize {
        self.dilemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dilemmas.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Dilemma> {
        self.dilemmas.get(position)
    }
}
