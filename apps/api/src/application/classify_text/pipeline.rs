use crate::{
    domain::toxicity::{errors::ClassificationError, value_objects::Probability},
    infrastructure::{
        ml::{
            artifacts::{ArtifactInfo, load_model, load_vectorizer},
            traits::{ClassifierModel, Vectorizer},
        },
        nlp::traits::TextNormalizer,
    },
};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Loaded state of one language pipeline, as reported by `/health`.
#[derive(Debug, Clone, Serialize)]
pub struct ModelStatus {
    pub language: String,
    pub vectorizer_dim: usize,
    pub model_format: &'static str,
    /// Absent for pipelines assembled in memory rather than loaded from disk
    pub fingerprint: Option<PairFingerprint>,
}

/// Identity of the two artifacts behind a pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct PairFingerprint {
    pub vectorizer: ArtifactInfo,
    pub model: ArtifactInfo,
}

/// Normalizer, vectorizer and classifier for one language.
///
/// Immutable once built; shared by every request.
pub struct LanguagePipeline {
    normalizer: Arc<dyn TextNormalizer>,
    vectorizer: Arc<dyn Vectorizer>,
    model: Arc<dyn ClassifierModel>,
    fingerprint: Option<PairFingerprint>,
}

impl LanguagePipeline {
    /// Assemble a pipeline, checking that the vectorizer output fits the model input.
    ///
    /// # Errors
    ///
    /// Returns an error on a dimension mismatch between vectorizer and model.
    pub fn new(
        normalizer: Arc<dyn TextNormalizer>,
        vectorizer: Arc<dyn Vectorizer>,
        model: Arc<dyn ClassifierModel>,
    ) -> anyhow::Result<Self> {
        if vectorizer.dimension() != model.input_dimension() {
            anyhow::bail!(
                "Vectorizer produces {} features but the {} model expects {}",
                vectorizer.dimension(),
                model.format(),
                model.input_dimension()
            );
        }
        Ok(Self {
            normalizer,
            vectorizer,
            model,
            fingerprint: None,
        })
    }

    /// Load both artifacts of a pair from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if either artifact fails to load or they do not fit together.
    pub fn load(
        normalizer: Arc<dyn TextNormalizer>,
        vectorizer_path: impl AsRef<Path>,
        model_path: impl AsRef<Path>,
    ) -> anyhow::Result<Self> {
        let (vectorizer, vectorizer_info) = load_vectorizer(vectorizer_path)?;
        let (model, model_info) = load_model(model_path, vectorizer.dimension())?;
        let mut pipeline = Self::new(normalizer, Arc::new(vectorizer), model)?;
        pipeline.fingerprint = Some(PairFingerprint {
            vectorizer: vectorizer_info,
            model: model_info,
        });
        Ok(pipeline)
    }

    /// Normalize, vectorize and score one text.
    pub fn score(&self, text: &str) -> Result<Probability, ClassificationError> {
        let cleaned = self.normalizer.normalize(text)?;
        let features = self.vectorizer.transform(&cleaned)?;
        tracing::trace!(
            cleaned = %cleaned.as_str(),
            active_features = features.nnz(),
            "text vectorized"
        );
        self.model.predict(&features)
    }

    pub fn status(&self, language: &str) -> ModelStatus {
        ModelStatus {
            language: language.to_string(),
            vectorizer_dim: self.vectorizer.dimension(),
            model_format: self.model.format(),
            fingerprint: self.fingerprint.clone(),
        }
    }
}
