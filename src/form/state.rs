//! The single source of truth for the constraint form

use super::found::{FoundLettersTracker, FoundRow};
use super::inputs::InputGenerator;
use super::keyboard::VirtualKeyboard;
use super::row::LetterRow;
use crate::core::{LengthError, LetterSet, parse_word_length};

/// Everything the user has entered so far
///
/// Components never hold state of their own; they borrow the parts of this
/// struct they edit (see [`FormState::inputs`] and friends).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    length_input: String,
    positioned: LetterRow,
    misplaced: LetterRow,
    required: LetterSet,
    excluded: LetterSet,
    found_rows: Vec<FoundRow>,
}

impl FormState {
    /// A form whose length field holds `length_input`
    ///
    /// Rows are generated when the field parses as a valid length.
    #[must_use]
    pub fn new(length_input: impl Into<String>) -> Self {
        let mut state = Self {
            length_input: length_input.into(),
            ..Self::default()
        };
        if let Ok(length) = state.word_length() {
            state.inputs().generate(length);
        }
        state
    }

    #[must_use]
    pub fn length_input(&self) -> &str {
        &self.length_input
    }

    /// Replace the raw text of the length field; rows are left alone
    pub fn set_length_input(&mut self, raw: impl Into<String>) {
        self.length_input = raw.into();
    }

    /// Parsed word length
    ///
    /// # Errors
    /// Returns `LengthError` when the field is empty, non-numeric or out of range.
    pub fn word_length(&self) -> Result<usize, LengthError> {
        parse_word_length(&self.length_input)
    }

    #[must_use]
    pub fn positioned(&self) -> &LetterRow {
        &self.positioned
    }

    #[must_use]
    pub fn misplaced(&self) -> &LetterRow {
        &self.misplaced
    }

    #[must_use]
    pub const fn required(&self) -> LetterSet {
        self.required
    }

    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.excluded
    }

    #[must_use]
    pub fn found_rows(&self) -> &[FoundRow] {
        &self.found_rows
    }

    pub fn inputs(&mut self) -> InputGenerator<'_> {
        InputGenerator::new(&mut self.positioned, &mut self.misplaced)
    }

    pub fn required_keyboard(&mut self) -> VirtualKeyboard<'_> {
        VirtualKeyboard::new(&mut self.required)
    }

    pub fn excluded_keyboard(&mut self) -> VirtualKeyboard<'_> {
        VirtualKeyboard::new(&mut self.excluded)
    }

    pub fn found_tracker(&mut self) -> FoundLettersTracker<'_> {
        FoundLettersTracker::new(&mut self.found_rows, &mut self.required)
    }

    /// Add a found-letters row sized from the length field
    ///
    /// # Errors
    /// Returns `FoundRowError` when the length field is not a valid length.
    pub fn add_found_row(&mut self) -> Result<usize, super::FoundRowError> {
        FoundLettersTracker::new(&mut self.found_rows, &mut self.required)
            .add_row(&self.length_input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;
    use crate::form::keyboard::keys;

    #[test]
    fn new_generates_rows_for_valid_length() {
        let state = FormState::new("5");
        assert_eq!(state.word_length(), Ok(5));
        assert_eq!(state.positioned().len(), 5);
        assert_eq!(state.misplaced().len(), 5);
    }

    #[test]
    fn new_with_invalid_length_has_no_rows() {
        let state = FormState::new("x");
        assert!(state.word_length().is_err());
        assert!(state.positioned().is_empty());
        assert!(state.misplaced().is_empty());
    }

    #[test]
    fn found_row_letters_mark_required_keys() {
        let mut state = FormState::new("5");
        state.add_found_row().unwrap();
        state.found_tracker().type_letter(0, 0, 'k');

        let k = Letter::from_char('k').unwrap();
        assert!(state.required().contains(k));
        assert!(keys(&state.required).any(|key| key.letter == k && key.selected));
    }

    #[test]
    fn found_rows_survive_length_change() {
        let mut state = FormState::new("5");
        state.add_found_row().unwrap();
        state.set_length_input("3");
        state.inputs().generate(3);

        assert_eq!(state.positioned().len(), 3);
        assert_eq!(state.found_rows()[0].cells().len(), 5);
    }
}
