//! Application configuration loading from environment variables.
//!
//! All configuration is loaded from the environment at startup via standard `std::env::var`.
//! A `.env` file in the working directory is read first when present.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `RUST_LOG`: Logging level (default: "info,toxicity_api=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 5000)
//! - `EN_VECTORIZER_PATH`: English TF-IDF artifact (default: "./models/tfidf_vectorizer.json")
//! - `EN_MODEL_PATH`: English classifier, `.onnx` or `.json` (default: "./models/toxic_comment_model.onnx")
//! - `VI_VECTORIZER_PATH`: Vietnamese TF-IDF artifact (default: "./models/vietnamese_tfidf_vectorizer.json")
//! - `VI_MODEL_PATH`: Vietnamese classifier (default: "./models/vietnamese_toxic_comment_model.onnx")
//! - `VI_DICTIONARY_PATH`: Vietnamese multi-syllable word list for segmentation
//! - `VI_COMPOUND_JOINER`: Joiner between syllables of one word (default: a single space)
//! - `VI_MAX_SYLLABLES`: Longest text the segmenter accepts, in syllables (default: 5000)
//! - `SOFT_ERRORS`: Report pipeline failures as `200 {"prediction": "Error: ..."}` (default: true)
//! - `MAX_BODY_BYTES`: Request body limit (default: 65536)

use serde::Deserialize;

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    pub en_vectorizer_path: String,

    pub en_model_path: String,

    pub vi_vectorizer_path: String,

    pub vi_model_path: String,

    /// Optional lexicon; without it every syllable is segmented on its own
    pub vi_dictionary_path: Option<String>,

    /// Joins the syllables of one Vietnamese word (" " or "_" in practice)
    pub vi_compound_joiner: String,

    /// Upper bound on syllables per request handed to the segmenter
    pub vi_max_syllables: usize,

    /// Degrade pipeline failures into a 200 payload instead of an error status
    pub soft_errors: bool,

    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// compound joiner contains whitespace other than a single space.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 5000)?,
            en_vectorizer_path: env_or(
                "EN_VECTORIZER_PATH",
                "./models/tfidf_vectorizer.json".to_string(),
            )?,
            en_model_path: env_or(
                "EN_MODEL_PATH",
                "./models/toxic_comment_model.onnx".to_string(),
            )?,
            vi_vectorizer_path: env_or(
                "VI_VECTORIZER_PATH",
                "./models/vietnamese_tfidf_vectorizer.json".to_string(),
            )?,
            vi_model_path: env_or(
                "VI_MODEL_PATH",
                "./models/vietnamese_toxic_comment_model.onnx".to_string(),
            )?,
            vi_dictionary_path: std::env::var("VI_DICTIONARY_PATH").ok(),
            vi_compound_joiner: std::env::var("VI_COMPOUND_JOINER")
                .unwrap_or_else(|_| " ".to_string()),
            vi_max_syllables: env_or("VI_MAX_SYLLABLES", 5000)?,
            soft_errors: env_or("SOFT_ERRORS", true)?,
            max_body_bytes: env_or("MAX_BODY_BYTES", 64 * 1024)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let joiner = self.vi_compound_joiner.as_str();
        if joiner.is_empty() || (joiner != " " && joiner.chars().any(char::is_whitespace)) {
            anyhow::bail!(
                "VI_COMPOUND_JOINER must be a single space or a non-empty string without whitespace"
            );
        }
        if self.vi_max_syllables == 0 {
            anyhow::bail!("VI_MAX_SYLLABLES must be greater than zero");
        }
        Ok(())
    }
}

/// Load an environment variable with a default value.
///
/// Returns the parsed environment variable if set, otherwise returns the default.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
