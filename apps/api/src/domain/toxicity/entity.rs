use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Language detected for a submitted text.
///
/// Only Vietnamese has a dedicated pipeline. English and every other
/// detected language are classified with the English pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LanguageTag {
    English,
    Vietnamese,
    Other(String),
}

impl LanguageTag {
    /// ISO 639-1 code (`en`, `vi`, `fr`), or ISO 639-3 when the language has no two-letter code.
    pub fn code(&self) -> &str {
        match self {
            Self::English => "en",
            Self::Vietnamese => "vi",
            Self::Other(code) => code,
        }
    }

    pub fn is_vietnamese(&self) -> bool {
        matches!(self, Self::Vietnamese)
    }
}

impl From<&str> for LanguageTag {
    fn from(code: &str) -> Self {
        match code {
            "en" => Self::English,
            "vi" => Self::Vietnamese,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Binary verdict returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ToxicityLabel {
    #[serde(rename = "Toxic Comment")]
    Toxic,
    #[serde(rename = "Non-Toxic Comment")]
    NonToxic,
}

impl ToxicityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Toxic => "Toxic Comment",
            Self::NonToxic => "Non-Toxic Comment",
        }
    }
}

impl fmt::Display for ToxicityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of running one text through the classification pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationOutcome {
    /// Verdict after thresholding
    pub label: ToxicityLabel,

    /// Language that selected the pipeline
    pub language: LanguageTag,

    /// Raw model probability in [0, 1]
    pub probability: f32,
}
