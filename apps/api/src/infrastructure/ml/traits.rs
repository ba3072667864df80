use crate::domain::toxicity::{
    errors::ClassificationError,
    value_objects::{CleanedText, FeatureVector, Probability},
};

pub trait Vectorizer: Send + Sync {
    /// Map cleaned text to a feature vector of [`Vectorizer::dimension`] entries.
    fn transform(&self, text: &CleanedText) -> Result<FeatureVector, ClassificationError>;

    fn dimension(&self) -> usize;
}

pub trait ClassifierModel: Send + Sync {
    /// Score a feature vector, returning the probability of the toxic class.
    fn predict(&self, features: &FeatureVector) -> Result<Probability, ClassificationError>;

    /// Number of features the model expects.
    fn input_dimension(&self) -> usize;

    /// Short name of the artifact format, e.g. `onnx`.
    fn format(&self) -> &'static str;
}

/// Pick the toxic-class probability out of a model's final activations.
///
/// Sigmoid heads produce one value; two-way softmax heads put the toxic
/// class second.
pub fn toxic_class_score(outputs: &[f32]) -> Result<f32, ClassificationError> {
    match outputs {
        [p] => Ok(*p),
        [_, p] => Ok(*p),
        other => Err(ClassificationError::Inference(format!(
            "expected 1 or 2 model outputs, got {}",
            other.len()
        ))),
    }
}
