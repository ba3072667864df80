use crate::domain::toxicity::{
    entity::LanguageTag, errors::ClassificationError, value_objects::CleanedText,
};

pub trait LanguageDetector: Send + Sync {
    /// Detect the language of a non-empty text.
    fn detect(&self, text: &str) -> Result<LanguageTag, ClassificationError>;
}

pub trait TextNormalizer: Send + Sync {
    /// Map raw text to the cleaned form the paired vectorizer was fitted on.
    fn normalize(&self, text: &str) -> Result<CleanedText, ClassificationError>;
}
