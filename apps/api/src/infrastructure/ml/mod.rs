pub mod artifacts;
pub mod dense_classifier;
pub mod onnx_classifier;
pub mod tfidf_vectorizer;
pub mod traits;
