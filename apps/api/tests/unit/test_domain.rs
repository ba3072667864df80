use toxicity_api::domain::toxicity::{
    decision::{TOXICITY_THRESHOLD, decide},
    entity::{LanguageTag, ToxicityLabel},
    errors::ClassificationError,
    value_objects::Probability,
};

fn label(value: f32) -> ToxicityLabel {
    decide(Probability::new(value).expect("valid probability"))
}

#[test]
fn decision_threshold_boundaries() {
    assert_eq!(TOXICITY_THRESHOLD, 0.5);
    assert_eq!(label(0.5), ToxicityLabel::Toxic);
    assert_eq!(label(0.4999), ToxicityLabel::NonToxic);
    assert_eq!(label(0.5001), ToxicityLabel::Toxic);
}

#[test]
fn labels_render_as_client_strings() {
    assert_eq!(ToxicityLabel::Toxic.as_str(), "Toxic Comment");
    assert_eq!(ToxicityLabel::NonToxic.as_str(), "Non-Toxic Comment");
}

#[test]
fn only_vi_selects_the_vietnamese_pipeline() {
    assert!(LanguageTag::from("vi").is_vietnamese());
    for code in ["en", "fr", "zh", "und"] {
        assert!(!LanguageTag::from(code).is_vietnamese(), "{code}");
    }
}

#[test]
fn error_kinds_split_input_and_service_failures() {
    assert!(ClassificationError::Detection(String::new()).is_input_related());
    assert!(ClassificationError::Tokenization(String::new()).is_input_related());
    assert!(!ClassificationError::Vectorization(String::new()).is_input_related());
    assert!(!ClassificationError::Inference(String::new()).is_input_related());
}
