//! Found-letters rows
//!
//! Each row records the letters of one earlier guess. A row's letter set only
//! grows: erasing a cell leaves the set (and the required set) as it was.
//! Rows keep the length they were created with.

use super::row::{Keystroke, LetterRow};
use crate::core::{LengthError, Letter, LetterSet, parse_word_length};
use std::fmt;

/// Alert shown when a row is requested without a usable word length
pub const INVALID_LENGTH_ALERT: &str = "Defina um tamanho válido antes de adicionar linhas.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundRow {
    cells: LetterRow,
    letters: LetterSet,
}

impl FoundRow {
    #[must_use]
    pub fn cells(&self) -> &LetterRow {
        &self.cells
    }

    /// Every letter ever typed into this row
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundRowError(pub LengthError);

impl fmt::Display for FoundRowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{INVALID_LENGTH_ALERT}")
    }
}

impl std::error::Error for FoundRowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

pub struct FoundLettersTracker<'s> {
    rows: &'s mut Vec<FoundRow>,
    required: &'s mut LetterSet,
}

impl<'s> FoundLettersTracker<'s> {
    pub fn new(rows: &'s mut Vec<FoundRow>, required: &'s mut LetterSet) -> Self {
        Self { rows, required }
    }

    /// Append a row sized from the raw word length field
    ///
    /// # Errors
    /// Returns `FoundRowError` when the field does not hold a valid length;
    /// no row is added in that case.
    pub fn add_row(&mut self, length_input: &str) -> Result<usize, FoundRowError> {
        let length = parse_word_length(length_input).map_err(FoundRowError)?;
        self.rows.push(FoundRow {
            cells: LetterRow::new(length),
            letters: LetterSet::new(),
        });
        let index = self.rows.len() - 1;
        tracing::debug!(row = index, length, "added found-letters row");
        Ok(index)
    }

    /// Keystroke in a found-letters cell
    ///
    /// An accepted letter joins the row's set and the required set. Focus
    /// advances within the row only.
    pub fn type_letter(&mut self, row: usize, col: usize, c: char) -> Keystroke {
        let Some(found) = self.rows.get_mut(row) else {
            return Keystroke::REJECTED;
        };
        let stroke = found.cells.write(col, c, true);
        if let Some(letter) = stroke.letter {
            found.letters.insert(letter);
            self.required.insert(letter);
        }
        stroke
    }

    /// Clear one cell without touching any letter set
    pub fn erase(&mut self, row: usize, col: usize) -> Option<Letter> {
        self.rows.get_mut(row).and_then(|found| found.cells.clear(col))
    }
}
