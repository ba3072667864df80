pub mod ml;
pub mod nlp;
