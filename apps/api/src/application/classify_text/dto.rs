use crate::domain::toxicity::{entity::ToxicityLabel, errors::ClassificationError};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

pub const NO_TEXT_PROVIDED: &str = "No text provided";

#[derive(Debug, Clone, Deserialize, Validate, TS)]
#[ts(export)]
pub struct PredictRequest {
    #[validate(
        required(message = "No text provided"),
        length(min = 1, message = "No text provided")
    )]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictResponse {
    /// A label, or `Error: <message>` when the pipeline failed in soft-error mode
    pub prediction: String,
}

impl PredictResponse {
    pub fn label(label: ToxicityLabel) -> Self {
        Self {
            prediction: label.to_string(),
        }
    }

    pub fn soft_error(error: &ClassificationError) -> Self {
        Self {
            prediction: format!("Error: {}", error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> PredictRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn missing_or_empty_text_fails_validation() {
        for json in [r#"{}"#, r#"{"text": null}"#, r#"{"text": ""}"#] {
            let errors = parse(json).validate().unwrap_err();
            let messages: Vec<String> = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .collect();
            assert_eq!(messages, vec![NO_TEXT_PROVIDED.to_string()], "{json}");
        }
    }

    #[test]
    fn whitespace_only_text_is_still_provided() {
        assert!(parse(r#"{"text": "   "}"#).validate().is_ok());
        assert!(parse(r#"{"text": "hello", "extra": 1}"#).validate().is_ok());
    }

    #[test]
    fn soft_error_prefixes_message() {
        let response =
            PredictResponse::soft_error(&ClassificationError::Detection("No features in text.".into()));
        assert_eq!(response.prediction, "Error: No features in text.");
    }
}
