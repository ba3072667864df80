//! TF-IDF transform over a fitted vocabulary.
//!
//! The artifact is the JSON export of a fitted scikit-learn style
//! `TfidfVectorizer`: vocabulary, idf weights and the options that affect
//! `transform`. Fitting is done offline; this module only applies it.

use super::traits::Vectorizer;
use crate::domain::toxicity::{
    errors::ClassificationError,
    value_objects::{CleanedText, FeatureVector},
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

/// On-disk representation of a fitted vectorizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfArtifact {
    /// Term (unigram or space-joined n-gram) to column index
    pub vocabulary: HashMap<String, usize>,

    /// Inverse document frequency per column
    pub idf: Vec<f32>,

    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),

    #[serde(default)]
    pub sublinear_tf: bool,

    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,

    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,

    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

fn default_token_pattern() -> String {
    DEFAULT_TOKEN_PATTERN.to_string()
}

fn default_lowercase() -> bool {
    true
}

pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    ngram_range: (usize, usize),
    sublinear_tf: bool,
    norm: Option<Norm>,
    token_pattern: Regex,
    lowercase: bool,
}

impl std::fmt::Debug for TfidfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfidfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("ngram_range", &self.ngram_range)
            .field("sublinear_tf", &self.sublinear_tf)
            .field("norm", &self.norm)
            .finish()
    }
}

impl TfidfVectorizer {
    /// Validate an artifact and build the vectorizer.
    ///
    /// # Errors
    ///
    /// Returns a vectorization error when the idf table and vocabulary disagree,
    /// the n-gram range is empty, or the token pattern does not compile.
    pub fn from_artifact(artifact: TfidfArtifact) -> Result<Self, ClassificationError> {
        let dimension = artifact.idf.len();
        if dimension == 0 {
            return Err(ClassificationError::Vectorization(
                "vectorizer artifact has an empty idf table".into(),
            ));
        }
        if let Some((term, index)) = artifact.vocabulary.iter().find(|(_, i)| **i >= dimension) {
            return Err(ClassificationError::Vectorization(format!(
                "vocabulary term {:?} maps to column {} but idf has {} entries",
                term, index, dimension
            )));
        }
        let (min_n, max_n) = artifact.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(ClassificationError::Vectorization(format!(
                "invalid ngram_range ({}, {})",
                min_n, max_n
            )));
        }
        let token_pattern = Regex::new(&artifact.token_pattern).map_err(|e| {
            ClassificationError::Vectorization(format!("invalid token_pattern: {}", e))
        })?;

        Ok(Self {
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
            ngram_range: artifact.ngram_range,
            sublinear_tf: artifact.sublinear_tf,
            norm: artifact.norm,
            token_pattern,
            lowercase: artifact.lowercase,
        })
    }

    /// Parse a JSON artifact.
    ///
    /// # Errors
    ///
    /// Returns a vectorization error if the bytes are not a valid artifact.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ClassificationError> {
        let artifact: TfidfArtifact = serde_json::from_slice(bytes).map_err(|e| {
            ClassificationError::Vectorization(format!("malformed vectorizer artifact: {}", e))
        })?;
        Self::from_artifact(artifact)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    fn term_counts(&self, text: &str) -> HashMap<usize, f32> {
        let tokens: Vec<&str> = self
            .token_pattern
            .find_iter(text)
            .map(|m| m.as_str())
            .collect();

        let mut counts = HashMap::new();
        let (min_n, max_n) = self.ngram_range;
        for n in min_n..=max_n.min(tokens.len()) {
            for window in tokens.windows(n) {
                let index = if n == 1 {
                    self.vocabulary.get(window[0])
                } else {
                    self.vocabulary.get(&window.join(" "))
                };
                if let Some(&index) = index {
                    *counts.entry(index).or_insert(0.0) += 1.0;
                }
            }
        }
        counts
    }
}

impl Vectorizer for TfidfVectorizer {
    fn transform(&self, text: &CleanedText) -> Result<FeatureVector, ClassificationError> {
        let counts = if self.lowercase {
            self.term_counts(&text.to_lowercase())
        } else {
            self.term_counts(text)
        };

        let mut values = vec![0.0f32; self.idf.len()];
        for (index, count) in counts {
            let tf = if self.sublinear_tf {
                1.0 + count.ln()
            } else {
                count
            };
            values[index] = tf * self.idf[index];
        }

        let scale = match self.norm {
            Some(Norm::L2) => values.iter().map(|v| v * v).sum::<f32>().sqrt(),
            Some(Norm::L1) => values.iter().map(|v| v.abs()).sum::<f32>(),
            None => 1.0,
        };
        if scale > 0.0 && scale != 1.0 {
            values.iter_mut().for_each(|v| *v /= scale);
        }

        Ok(FeatureVector::new(values))
    }

    fn dimension(&self) -> usize {
        self.idf.len()
    }
}
