use super::{patterns::collapse_non_word, traits::TextNormalizer};
use crate::domain::toxicity::{errors::ClassificationError, value_objects::CleanedText};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Order matters: the generic `'s` rule runs before the specific contractions.
    static ref CONTRACTIONS: Vec<(Regex, &'static str)> = [
        ("what's", "what is "),
        ("'s", " "),
        ("'ve", " have "),
        ("can't", "cannot "),
        ("n't", " not "),
        ("i'm", "i am "),
        ("'re", " are "),
        ("'d", " would "),
        ("'ll", " will "),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect();
}

pub fn clean_english(text: &str) -> String {
    let mut text = text.to_lowercase();
    for (pattern, replacement) in CONTRACTIONS.iter() {
        if let std::borrow::Cow::Owned(replaced) = pattern.replace_all(&text, *replacement) {
            text = replaced;
        }
    }
    collapse_non_word(&text).trim().to_string()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishNormalizer;

impl TextNormalizer for EnglishNormalizer {
    fn normalize(&self, text: &str) -> Result<CleanedText, ClassificationError> {
        Ok(CleanedText::new(clean_english(text)))
    }
}
