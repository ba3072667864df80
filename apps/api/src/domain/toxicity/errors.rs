use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Failures raised inside the classification pipeline.
///
/// The message of each variant is what clients see after the `Error: ` prefix
/// when soft errors are enabled.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ClassificationError {
    #[error("{0}")]
    Detection(String),
    #[error("{0}")]
    Tokenization(String),
    #[error("{0}")]
    Vectorization(String),
    #[error("{0}")]
    Inference(String),
}

impl ClassificationError {
    /// Stable machine-readable name of the failing stage.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Detection(_) => "detection",
            Self::Tokenization(_) => "tokenization",
            Self::Vectorization(_) => "vectorization",
            Self::Inference(_) => "inference",
        }
    }

    /// Whether the failure was caused by the submitted text rather than the service.
    pub fn is_input_related(&self) -> bool {
        matches!(self, Self::Detection(_) | Self::Tokenization(_))
    }
}
