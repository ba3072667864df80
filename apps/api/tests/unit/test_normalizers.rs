use toxicity_api::infrastructure::nlp::{
    english_normalizer::clean_english,
    vietnamese_normalizer::VietnameseNormalizer,
    vietnamese_segmenter::{DEFAULT_MAX_SYLLABLES, VietnameseSegmenter},
};

const CORPUS: &[&str] = &[
    "",
    "   ",
    "I love this!",
    "What's going on? I can't believe you're here...",
    "That's my friend's car, isn't it?",
    "I'm sure they'd say we'll be fine; we've been through worse.",
    "  MULTIPLE   spaces\tand\nnewlines  ",
    "snake_case and numbers 123 456",
    "Émojis 🙂 and accents: naïve café",
    "'s 've 're 'd 'll n't",
    "what'swhat's",
    "Bộ phim này thật tuyệt vời!!!",
    "--==[[]]==--",
];

#[test]
fn english_normalizer_is_idempotent() {
    for input in CORPUS {
        let once = clean_english(input);
        assert_eq!(clean_english(&once), once, "input {input:?}");
    }
}

#[test]
fn english_output_is_trimmed_single_spaced_lowercase() {
    for input in CORPUS {
        let out = clean_english(input);
        assert_eq!(out.trim(), out);
        assert!(!out.contains("  "), "{out:?}");
        assert_eq!(out.to_lowercase(), out);
    }
}

#[test]
fn vietnamese_output_has_no_stray_whitespace() {
    let segmenter =
        VietnameseSegmenter::from_words(["bộ phim", "tuyệt vời"], DEFAULT_MAX_SYLLABLES);
    for joiner in [" ", "_"] {
        let normalizer = VietnameseNormalizer::with_joiner(segmenter.clone(), joiner);
        for input in CORPUS {
            let out = normalizer.clean(input).expect("within syllable limit");
            assert_eq!(out.trim(), out, "{out:?}");
            assert!(!out.contains("  "), "{out:?}");
        }
    }
}

#[test]
fn vietnamese_compounds_use_the_joiner() {
    let segmenter = VietnameseSegmenter::from_words(["bộ phim"], DEFAULT_MAX_SYLLABLES);
    let normalizer = VietnameseNormalizer::with_joiner(segmenter, "_");
    assert_eq!(
        normalizer.clean("Bộ phim này thật tuyệt vời!!!").unwrap(),
        "bộ_phim này thật tuyệt vời"
    );
}
