use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref NON_WORD: Regex = Regex::new(r"\W").unwrap();
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Replace every non-word character with a space, then collapse whitespace
/// runs to one space. Leading and trailing spaces are left in place.
pub fn collapse_non_word(text: &str) -> String {
    let spaced = NON_WORD.replace_all(text, " ");
    WHITESPACE_RUN.replace_all(&spaced, " ").into_owned()
}
