pub mod english_normalizer;
pub mod language_detector;
pub mod patterns;
pub mod traits;
pub mod vietnamese_normalizer;
pub mod vietnamese_segmenter;
