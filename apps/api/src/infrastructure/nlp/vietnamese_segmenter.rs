//! Dictionary-driven Vietnamese word segmentation.
//!
//! Vietnamese text is written as space-separated syllables, and a single word
//! frequently spans several of them ("học sinh", "cà phê sữa"). The segmenter
//! groups syllables into words by forward maximum matching against a lexicon
//! of multi-syllable words. Syllables not covered by any lexicon entry become
//! single-syllable words.
//!
//! # Lexicon format
//!
//! One word per line, syllables separated by whitespace. Blank lines and lines
//! starting with `#` are ignored. Entries are lowercased on load.

use crate::domain::toxicity::errors::ClassificationError;
use std::collections::HashSet;
use std::path::Path;

pub const DEFAULT_MAX_SYLLABLES: usize = 5000;

#[derive(Debug, Clone)]
pub struct VietnameseSegmenter {
    lexicon: HashSet<String>,
    longest_word: usize,
    max_syllables: usize,
}

impl VietnameseSegmenter {
    /// Segmenter without a lexicon: every syllable is its own word.
    pub fn new(max_syllables: usize) -> Self {
        Self {
            lexicon: HashSet::new(),
            longest_word: 1,
            max_syllables,
        }
    }

    pub fn from_words<I, S>(words: I, max_syllables: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut segmenter = Self::new(max_syllables);
        for word in words {
            segmenter.insert(word.as_ref());
        }
        segmenter
    }

    /// Load a lexicon file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>, max_syllables: usize) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read Vietnamese lexicon {}: {}", path.display(), e)
        })?;
        let segmenter = Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
            max_syllables,
        );
        tracing::info!(
            path = %path.display(),
            words = segmenter.lexicon.len(),
            longest_word = segmenter.longest_word,
            "Vietnamese lexicon loaded"
        );
        Ok(segmenter)
    }

    fn insert(&mut self, word: &str) {
        let syllables: Vec<String> = word.split_whitespace().map(str::to_lowercase).collect();
        if syllables.len() < 2 {
            return;
        }
        self.longest_word = self.longest_word.max(syllables.len());
        self.lexicon.insert(syllables.join(" "));
    }

    pub fn lexicon_size(&self) -> usize {
        self.lexicon.len()
    }

    /// Split whitespace-separated syllables into words.
    ///
    /// # Errors
    ///
    /// Returns a tokenization error when the text has more syllables than the
    /// configured limit.
    pub fn segment<'a>(&'a self, text: &'a str) -> Result<Segments<'a>, ClassificationError> {
        let syllables: Vec<&str> = text.split_whitespace().collect();
        if syllables.len() > self.max_syllables {
            return Err(ClassificationError::Tokenization(format!(
                "text has {} syllables, word segmentation is limited to {}",
                syllables.len(),
                self.max_syllables
            )));
        }
        Ok(Segments {
            segmenter: self,
            syllables,
            position: 0,
        })
    }

    fn match_length(&self, syllables: &[&str]) -> usize {
        let window = self.longest_word.min(syllables.len());
        (2..=window)
            .rev()
            .find(|&len| self.lexicon.contains(&syllables[..len].join(" ")))
            .unwrap_or(1)
    }
}

/// Lazy sequence of words, each a run of one or more syllables.
pub struct Segments<'a> {
    segmenter: &'a VietnameseSegmenter,
    syllables: Vec<&'a str>,
    position: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.syllables[self.position..];
        if rest.is_empty() {
            return None;
        }
        let len = self.segmenter.match_length(rest);
        let word = rest[..len].to_vec();
        self.position += len;
        Some(word)
    }
}
