// src/codec/normalize.rs

//! Cleans raw learner text into a digit string.
//!
//! Learner input is free-form: digits interleaved with line comments and
//! whatever whitespace layout makes the picture readable in the editor.
//! `normalize` reduces that to the bare symbol sequence the rest of the
//! pipeline operates on.

/// Everything from this marker to the end of the line is discarded.
const COMMENT_MARKER: &str = "//";

/// Strips comments and whitespace from raw learner text and uppercases the
/// remainder.
///
/// Per line, everything from the first `//` onward is dropped; the surviving
/// fragments are concatenated with no separator, all whitespace is removed,
/// and the result is uppercased. Symbols outside the digit alphabet are left
/// in place here; downstream stages filter them.
///
/// Empty input comes back unchanged.
pub fn normalize(text: &str) -> String {
    text.split('\n')
        .map(|line| line.split_once(COMMENT_MARKER).map_or(line, |(code, _)| code))
        .collect::<String>()
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}
