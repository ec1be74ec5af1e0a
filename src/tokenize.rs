//! Text normalization
//!
//! Turns raw text into the lowercase alphabetic token sequence the graph
//! builder consumes: every non-alphabetic character (punctuation, digits,
//! line breaks) acts as a separator, whitespace runs collapse, and words
//! are lowercased.

/// Normalize raw text into lowercase alphabetic tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            word.push(c.to_ascii_lowercase());
        } else if !word.is_empty() {
            tokens.push(std::mem::take(&mut word));
        }
    }
    if !word.is_empty() {
        tokens.push(word);
    }

    tokens
}
