use super::pipeline::{LanguagePipeline, ModelStatus};
use crate::{
    config::Config,
    domain::toxicity::{
        decision::decide, entity::ClassificationOutcome, errors::ClassificationError,
    },
    infrastructure::nlp::{
        english_normalizer::EnglishNormalizer,
        language_detector::WhatlangDetector,
        traits::LanguageDetector,
        vietnamese_normalizer::VietnameseNormalizer,
        vietnamese_segmenter::VietnameseSegmenter,
    },
};
use async_trait::async_trait;
use std::sync::Arc;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ToxicityService: Send + Sync {
    /// Classify one text. Pipeline failures come back as `Err`, never as panics.
    async fn classify(&self, text: String) -> Result<ClassificationOutcome, ClassificationError>;

    /// Loaded model pairs, English first.
    fn model_status(&self) -> Vec<ModelStatus>;
}

/// Routes text to the English or Vietnamese pipeline and thresholds the score.
#[derive(Clone)]
pub struct ClassifyTextUseCase {
    detector: Arc<dyn LanguageDetector>,
    english: Arc<LanguagePipeline>,
    vietnamese: Arc<LanguagePipeline>,
}

impl ClassifyTextUseCase {
    pub fn new(
        detector: Arc<dyn LanguageDetector>,
        english: LanguagePipeline,
        vietnamese: LanguagePipeline,
    ) -> Self {
        Self {
            detector,
            english: Arc::new(english),
            vietnamese: Arc::new(vietnamese),
        }
    }

    /// Load both model pairs from the configured artifact paths.
    ///
    /// # Errors
    ///
    /// Returns an error if any artifact or the Vietnamese lexicon fails to load.
    pub fn load(config: &Config) -> anyhow::Result<Self> {
        let english = LanguagePipeline::load(
            Arc::new(EnglishNormalizer),
            &config.en_vectorizer_path,
            &config.en_model_path,
        )?;

        let segmenter = match &config.vi_dictionary_path {
            Some(path) => VietnameseSegmenter::from_file(path, config.vi_max_syllables)?,
            None => VietnameseSegmenter::new(config.vi_max_syllables),
        };
        let vietnamese = LanguagePipeline::load(
            Arc::new(VietnameseNormalizer::with_joiner(
                segmenter,
                config.vi_compound_joiner.clone(),
            )),
            &config.vi_vectorizer_path,
            &config.vi_model_path,
        )?;

        Ok(Self::new(
            Arc::new(WhatlangDetector::new()),
            english,
            vietnamese,
        ))
    }

    pub fn execute(&self, text: &str) -> Result<ClassificationOutcome, ClassificationError> {
        let language = self.detector.detect(text)?;
        tracing::debug!(language = %language, "Detected language");

        let pipeline = if language.is_vietnamese() {
            &self.vietnamese
        } else {
            &self.english
        };
        let probability = pipeline.score(text)?;
        let label = decide(probability);

        tracing::info!(
            language = %language,
            probability = probability.value(),
            label = %label,
            "Text classified"
        );
        Ok(ClassificationOutcome {
            label,
            language,
            probability: probability.value(),
        })
    }
}

#[async_trait]
impl ToxicityService for ClassifyTextUseCase {
    async fn classify(&self, text: String) -> Result<ClassificationOutcome, ClassificationError> {
        let use_case = self.clone();
        tokio::task::spawn_blocking(move || use_case.execute(&text))
            .await
            .map_err(|e| ClassificationError::Inference(format!("classification task failed: {}", e)))?
    }

    fn model_status(&self) -> Vec<ModelStatus> {
        vec![self.english.status("en"), self.vietnamese.status("vi")]
    }
}
