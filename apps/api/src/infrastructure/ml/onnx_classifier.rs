use super::traits::{ClassifierModel, toxic_class_score};
use crate::domain::toxicity::{
    errors::ClassificationError,
    value_objects::{FeatureVector, Probability},
};
use ort::{session::Session, value::Value};
use std::path::Path;
use std::sync::Mutex;

/// Classifier exported to ONNX, taking a `[1, input_dim]` float tensor.
pub struct OnnxClassifier {
    // Session::run needs &mut, predictions come in through &self
    session: Mutex<Session>,
    input_dim: usize,
}

impl OnnxClassifier {
    /// Load the graph. `input_dim` is the width of the paired vectorizer.
    pub fn new(model_path: impl AsRef<Path>, input_dim: usize) -> anyhow::Result<Self> {
        let session = Session::builder()?.commit_from_file(model_path.as_ref())?;

        Ok(Self {
            session: Mutex::new(session),
            input_dim,
        })
    }

    fn run(&self, features: &FeatureVector) -> anyhow::Result<Vec<f32>> {
        let input_shape = vec![1i64, features.dimension() as i64];
        let input_value = Value::from_array((input_shape, features.as_slice().to_vec()))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| anyhow::anyhow!("Failed to acquire session lock"))?;
        let outputs = session.run(ort::inputs![input_value])?;
        let (_, data) = outputs[0].try_extract_tensor::<f32>()?;
        Ok(data.to_vec())
    }
}

impl ClassifierModel for OnnxClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<Probability, ClassificationError> {
        if features.dimension() != self.input_dim {
            return Err(ClassificationError::Inference(format!(
                "model expects {} features, got {}",
                self.input_dim,
                features.dimension()
            )));
        }

        let outputs = self
            .run(features)
            .map_err(|e| ClassificationError::Inference(format!("onnx inference failed: {}", e)))?;
        Probability::new(toxic_class_score(&outputs)?)
    }

    fn input_dimension(&self) -> usize {
        self.input_dim
    }

    fn format(&self) -> &'static str {
        "onnx"
    }
}
