pub mod classify_text;
