//! Tokenizers that turn text into sequences for line, char or grapheme diffs

use unicode_segmentation::UnicodeSegmentation;

/// Split text into lines, without their terminators
pub fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

pub fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Split text into extended grapheme clusters, so combined characters and
/// emoji sequences are compared as one symbol
pub fn graphemes(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}
