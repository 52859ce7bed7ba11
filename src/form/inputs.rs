//! Positioned-letter and misplaced-letter input rows

use super::row::{Keystroke, LetterRow};
use crate::core::Letter;

/// Builds and edits the two per-position rows
///
/// Borrows the rows it manages from the form state for the duration of one
/// edit.
pub struct InputGenerator<'s> {
    positioned: &'s mut LetterRow,
    misplaced: &'s mut LetterRow,
}

impl<'s> InputGenerator<'s> {
    pub fn new(positioned: &'s mut LetterRow, misplaced: &'s mut LetterRow) -> Self {
        Self {
            positioned,
            misplaced,
        }
    }

    /// Rebuild both rows with `length` empty slots, discarding prior values
    pub fn generate(&mut self, length: usize) {
        *self.positioned = LetterRow::new(length);
        *self.misplaced = LetterRow::new(length);
        tracing::debug!(length, "regenerated letter rows");
    }

    /// Drop the positioned row (invalid length)
    pub fn clear_positioned(&mut self) {
        *self.positioned = LetterRow::default();
    }

    /// Keystroke in a positioned slot; focus advances to the next slot
    pub fn type_positioned(&mut self, index: usize, c: char) -> Keystroke {
        self.positioned.write(index, c, true)
    }

    pub fn erase_positioned(&mut self, index: usize) -> Option<Letter> {
        self.positioned.clear(index)
    }

    /// Keystroke in a misplaced slot; focus stays put
    pub fn type_misplaced(&mut self, index: usize, c: char) -> Keystroke {
        self.misplaced.write(index, c, false)
    }

    pub fn erase_misplaced(&mut self, index: usize) -> Option<Letter> {
        self.misplaced.clear(index)
    }
}

/// Placeholder shown in an empty misplaced slot (1-based position)
#[must_use]
pub fn misplaced_placeholder(index: usize) -> String {
    (index + 1).to_string()
}
