use super::traits::LanguageDetector;
use crate::domain::toxicity::{entity::LanguageTag, errors::ClassificationError};
use whatlang::{Detector, Lang};

const NO_FEATURES: &str = "No features in text.";

/// Letters that only occur in Vietnamese orthography (lowercase).
const VIETNAMESE_LETTERS: &str = "đăâêôơư\
    àáảãạằắẳẵặầấẩẫậ\
    èéẻẽẹềếểễệ\
    ìíỉĩị\
    òóỏõọồốổỗộờớởỡợ\
    ùúủũụừứửữự\
    ỳýỷỹỵ";

/// ISO 639-3 → ISO 639-1 for every language the detector knows.
const ISO_639_1: &[(&str, &str)] = &[
    ("afr", "af"), ("aka", "ak"), ("amh", "am"), ("ara", "ar"), ("aze", "az"),
    ("bel", "be"), ("ben", "bn"), ("bul", "bg"), ("cat", "ca"), ("ces", "cs"),
    ("cmn", "zh"), ("dan", "da"), ("deu", "de"), ("ell", "el"), ("eng", "en"),
    ("epo", "eo"), ("est", "et"), ("fin", "fi"), ("fra", "fr"), ("guj", "gu"),
    ("heb", "he"), ("hin", "hi"), ("hrv", "hr"), ("hun", "hu"), ("hye", "hy"),
    ("ind", "id"), ("ita", "it"), ("jav", "jv"), ("jpn", "ja"), ("kan", "kn"),
    ("kat", "ka"), ("khm", "km"), ("kor", "ko"), ("lat", "la"), ("lav", "lv"),
    ("lit", "lt"), ("mal", "ml"), ("mar", "mr"), ("mkd", "mk"), ("mya", "my"),
    ("nep", "ne"), ("nld", "nl"), ("nob", "nb"), ("ori", "or"), ("pan", "pa"),
    ("pes", "fa"), ("pol", "pl"), ("por", "pt"), ("ron", "ro"), ("rus", "ru"),
    ("sin", "si"), ("slk", "sk"), ("slv", "sl"), ("sna", "sn"), ("spa", "es"),
    ("srp", "sr"), ("swe", "sv"), ("tam", "ta"), ("tel", "te"), ("tgl", "tl"),
    ("tha", "th"), ("tuk", "tk"), ("tur", "tr"), ("ukr", "uk"), ("urd", "ur"),
    ("uzb", "uz"), ("vie", "vi"), ("yid", "yi"), ("zul", "zu"),
];

/// Two-letter code for a detector code; unmapped codes pass through unchanged.
fn iso_639_1(code: &str) -> &str {
    ISO_639_1
        .iter()
        .find(|(three, _)| *three == code)
        .map_or(code, |&(_, two)| two)
}

pub fn has_vietnamese_letters(text: &str) -> bool {
    text.chars()
        .flat_map(char::to_lowercase)
        .any(|c| VIETNAMESE_LETTERS.contains(c))
}

/// Trigram-based detector that only accepts a Vietnamese verdict when the
/// text actually carries Vietnamese letters.
pub struct WhatlangDetector {
    detector: Detector,
    without_vietnamese: Detector,
}

impl WhatlangDetector {
    pub fn new() -> Self {
        Self {
            detector: Detector::new(),
            without_vietnamese: Detector::with_denylist(vec![Lang::Vie]),
        }
    }

    fn tag_for(lang: Lang) -> LanguageTag {
        LanguageTag::from(iso_639_1(lang.code()))
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<LanguageTag, ClassificationError> {
        if !text.chars().any(char::is_alphabetic) {
            return Err(ClassificationError::Detection(NO_FEATURES.to_string()));
        }

        let Some(info) = self.detector.detect(text) else {
            tracing::debug!("no confident language verdict, falling back to english");
            return Ok(LanguageTag::English);
        };

        if info.lang() == Lang::Vie && !has_vietnamese_letters(text) {
            tracing::debug!(
                confidence = info.confidence(),
                "vietnamese verdict without vietnamese letters, using runner-up"
            );
            return Ok(self
                .without_vietnamese
                .detect(text)
                .map(|runner_up| Self::tag_for(runner_up.lang()))
                .unwrap_or(LanguageTag::English));
        }

        tracing::trace!(
            lang = info.lang().code(),
            confidence = info.confidence(),
            reliable = info.is_reliable(),
            "language detected"
        );
        Ok(Self::tag_for(info.lang()))
    }
}
