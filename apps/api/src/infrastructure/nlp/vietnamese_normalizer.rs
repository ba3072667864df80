use super::{
    patterns::collapse_non_word, traits::TextNormalizer, vietnamese_segmenter::VietnameseSegmenter,
};
use crate::domain::toxicity::{errors::ClassificationError, value_objects::CleanedText};

pub struct VietnameseNormalizer {
    segmenter: VietnameseSegmenter,
    /// Joins the syllables of one multi-syllable word.
    compound_joiner: String,
}

impl VietnameseNormalizer {
    pub fn with_joiner(segmenter: VietnameseSegmenter, joiner: impl Into<String>) -> Self {
        Self {
            segmenter,
            compound_joiner: joiner.into(),
        }
    }

    pub fn clean(&self, text: &str) -> Result<String, ClassificationError> {
        let collapsed = collapse_non_word(&text.to_lowercase());
        let words: Vec<String> = self
            .segmenter
            .segment(&collapsed)?
            .map(|syllables| syllables.join(&self.compound_joiner))
            .collect();
        Ok(words.join(" "))
    }
}

impl TextNormalizer for VietnameseNormalizer {
    fn normalize(&self, text: &str) -> Result<CleanedText, ClassificationError> {
        self.clean(text).map(CleanedText::new)
    }
}
