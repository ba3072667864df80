//! Feed-forward network evaluated with `ndarray`.
//!
//! Used for classifier heads exported layer by layer to JSON (a Keras
//! `Sequential` of `Dense` layers, or a logistic regression as a single
//! sigmoid layer).

use super::traits::{ClassifierModel, toxic_class_score};
use crate::domain::toxicity::{
    errors::ClassificationError,
    value_objects::{FeatureVector, Probability},
};
use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    #[default]
    Linear,
    Relu,
    Tanh,
    Sigmoid,
    Softmax,
}

impl Activation {
    fn apply(self, values: &mut Array1<f32>) {
        match self {
            Self::Linear => {}
            Self::Relu => values.mapv_inplace(|v| v.max(0.0)),
            Self::Tanh => values.mapv_inplace(f32::tanh),
            Self::Sigmoid => values.mapv_inplace(|v| 1.0 / (1.0 + (-v).exp())),
            Self::Softmax => {
                let max = values.fold(f32::NEG_INFINITY, |acc, v| acc.max(*v));
                values.mapv_inplace(|v| (v - max).exp());
                let sum = values.sum();
                values.mapv_inplace(|v| v / sum);
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseLayerArtifact {
    /// Row-major `[inputs][outputs]`, as Keras stores `Dense` kernels
    pub weights: Vec<Vec<f32>>,
    pub bias: Vec<f32>,
    #[serde(default)]
    pub activation: Activation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseArtifact {
    pub input_dim: usize,
    pub layers: Vec<DenseLayerArtifact>,
}

#[derive(Debug)]
struct DenseLayer {
    weights: Array2<f32>,
    bias: Array1<f32>,
    activation: Activation,
}

#[derive(Debug)]
pub struct DenseClassifier {
    input_dim: usize,
    layers: Vec<DenseLayer>,
}

impl DenseClassifier {
    /// Check layer shapes chain together and build the network.
    ///
    /// # Errors
    ///
    /// Returns an inference error describing the first inconsistent layer.
    pub fn from_artifact(artifact: DenseArtifact) -> Result<Self, ClassificationError> {
        let invalid = |msg: String| ClassificationError::Inference(msg);

        if artifact.layers.is_empty() {
            return Err(invalid("model artifact has no layers".into()));
        }

        let mut expected_inputs = artifact.input_dim;
        let mut layers = Vec::with_capacity(artifact.layers.len());
        for (position, layer) in artifact.layers.into_iter().enumerate() {
            let outputs = layer.bias.len();
            if layer.weights.len() != expected_inputs {
                return Err(invalid(format!(
                    "layer {} has {} weight rows, expected {}",
                    position,
                    layer.weights.len(),
                    expected_inputs
                )));
            }
            if let Some(row) = layer.weights.iter().position(|row| row.len() != outputs) {
                return Err(invalid(format!(
                    "layer {} row {} has {} columns, bias has {}",
                    position,
                    row,
                    layer.weights[row].len(),
                    outputs
                )));
            }

            let flat: Vec<f32> = layer.weights.into_iter().flatten().collect();
            let weights = Array2::from_shape_vec((expected_inputs, outputs), flat)
                .map_err(|e| invalid(format!("layer {}: {}", position, e)))?;
            layers.push(DenseLayer {
                weights,
                bias: Array1::from(layer.bias),
                activation: layer.activation,
            });
            expected_inputs = outputs;
        }

        if !matches!(expected_inputs, 1 | 2) {
            return Err(invalid(format!(
                "final layer must have 1 or 2 outputs, has {}",
                expected_inputs
            )));
        }

        Ok(Self {
            input_dim: artifact.input_dim,
            layers,
        })
    }

    /// Parse a JSON artifact.
    ///
    /// # Errors
    ///
    /// Returns an inference error if the bytes are not a valid artifact.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ClassificationError> {
        let artifact: DenseArtifact = serde_json::from_slice(bytes).map_err(|e| {
            ClassificationError::Inference(format!("malformed model artifact: {}", e))
        })?;
        Self::from_artifact(artifact)
    }
}

impl ClassifierModel for DenseClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<Probability, ClassificationError> {
        if features.dimension() != self.input_dim {
            return Err(ClassificationError::Inference(format!(
                "model expects {} features, got {}",
                self.input_dim,
                features.dimension()
            )));
        }

        let mut activations = ArrayView1::from(features.as_slice()).to_owned();
        for layer in &self.layers {
            let mut next = activations.dot(&layer.weights) + &layer.bias;
            layer.activation.apply(&mut next);
            activations = next;
        }

        let outputs = activations.to_vec();
        Probability::new(toxic_class_score(&outputs)?)
    }

    fn input_dimension(&self) -> usize {
        self.input_dim
    }

    fn format(&self) -> &'static str {
        "dense-json"
    }
}
