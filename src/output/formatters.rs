//! Formatting utilities for terminal output

use crate::core::{Letter, LetterSet};
use crate::form::LetterRow;

/// Format a row as its letters with `_` for empty slots
#[must_use]
pub fn row_pattern(row: &LetterRow) -> String {
    row.slots()
        .iter()
        .map(|slot| slot.map_or('_', Letter::label))
        .collect()
}

/// Format a letter set for a summary line, `-` when empty
#[must_use]
pub fn letter_list(set: LetterSet) -> String {
    if set.is_empty() {
        return String::from("-");
    }
    set.iter()
        .map(|letter| letter.label().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Words laid out in columns of equal width
#[must_use]
pub fn columns(words: &[String], per_line: usize) -> Vec<String> {
    let width = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
    words
        .chunks(per_line.max(1))
        .map(|line| {
            line.iter()
                .map(|w| format!("{w:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}
