use super::{entity::ToxicityLabel, value_objects::Probability};

/// Probabilities at or above this value are labelled toxic.
pub const TOXICITY_THRESHOLD: f32 = 0.5;

pub fn decide(probability: Probability) -> ToxicityLabel {
    if probability.value() >= TOXICITY_THRESHOLD {
        ToxicityLabel::Toxic
    } else {
        ToxicityLabel::NonToxic
    }
}
