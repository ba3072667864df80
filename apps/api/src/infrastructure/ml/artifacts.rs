//! Loading of persisted vectorizer and model artifacts.
//!
//! Every artifact is read once at startup. Failures here abort the process
//! before the listener binds.

use super::{
    dense_classifier::DenseClassifier, onnx_classifier::OnnxClassifier,
    tfidf_vectorizer::TfidfVectorizer,
    traits::{ClassifierModel, Vectorizer},
};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::Path;
use std::sync::Arc;

/// Identity of a loaded artifact, reported by the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactInfo {
    pub path: String,
    pub sha256: String,
    pub size_bytes: usize,
}

impl ArtifactInfo {
    fn describe(path: &Path, bytes: &[u8]) -> Self {
        Self {
            path: path.display().to_string(),
            sha256: fingerprint(bytes),
            size_bytes: bytes.len(),
        }
    }
}

pub fn fingerprint(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

fn read_artifact(path: &Path, kind: &str) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} artifact {}: {}", kind, path.display(), e))
}

/// Load a TF-IDF vectorizer from a JSON artifact.
///
/// # Errors
///
/// Returns an error if the file is missing or not a valid vectorizer.
pub fn load_vectorizer(path: impl AsRef<Path>) -> anyhow::Result<(TfidfVectorizer, ArtifactInfo)> {
    let path = path.as_ref();
    let bytes = read_artifact(path, "vectorizer")?;
    let vectorizer = TfidfVectorizer::from_json(&bytes)
        .map_err(|e| anyhow::anyhow!("Invalid vectorizer artifact {}: {}", path.display(), e))?;
    let info = ArtifactInfo::describe(path, &bytes);

    tracing::info!(
        path = %info.path,
        dimension = vectorizer.dimension(),
        vocabulary = vectorizer.vocabulary_size(),
        sha256 = %info.sha256,
        "Vectorizer loaded"
    );
    Ok((vectorizer, info))
}

/// Load a classifier, choosing the backend from the file extension.
///
/// `.onnx` files run on ONNX Runtime; `.json` files are dense-layer exports.
///
/// # Errors
///
/// Returns an error if the file is missing, the extension is unknown, or the
/// model cannot be built.
pub fn load_model(
    path: impl AsRef<Path>,
    input_dim: usize,
) -> anyhow::Result<(Arc<dyn ClassifierModel>, ArtifactInfo)> {
    let path = path.as_ref();
    let bytes = read_artifact(path, "model")?;
    let info = ArtifactInfo::describe(path, &bytes);

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let model: Arc<dyn ClassifierModel> = match extension.as_deref() {
        Some("onnx") => Arc::new(OnnxClassifier::new(path, input_dim)?),
        Some("json") => Arc::new(
            DenseClassifier::from_json(&bytes)
                .map_err(|e| anyhow::anyhow!("Invalid model artifact {}: {}", path.display(), e))?,
        ),
        _ => anyhow::bail!(
            "Unsupported model artifact {}: expected a .onnx or .json file",
            path.display()
        ),
    };

    tracing::info!(
        path = %info.path,
        format = model.format(),
        input_dim = model.input_dimension(),
        sha256 = %info.sha256,
        "Classifier loaded"
    );
    Ok((model, info))
}
