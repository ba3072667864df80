use super::errors::ClassificationError;
use serde::Serialize;
use std::ops::Deref;

/// Text after one of the language-specific normalizers has run.
///
/// Lowercase, word characters only, single-space separated and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanedText(String);

impl CleanedText {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for CleanedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

/// Dense feature vector produced by a vectorizer.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f32>);

impl FeatureVector {
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.0.iter().filter(|v| **v != 0.0).count()
    }
}

/// Model output, guaranteed finite and within [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Probability(f32);

impl Probability {
    pub fn new(value: f32) -> Result<Self, ClassificationError> {
        if !value.is_finite() {
            return Err(ClassificationError::Inference(format!(
                "model produced a non-finite probability ({})",
                value
            )));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ClassificationError::Inference(format!(
                "model probability {} is outside [0, 1]",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}
