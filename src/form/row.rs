//! A row of single-letter input slots

use crate::core::Letter;

/// Ordered single-letter slots, one per word position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterRow {
    slots: Vec<Option<Letter>>,
}

/// Outcome of one keystroke in a row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keystroke {
    /// The letter stored, if the character was accepted
    pub letter: Option<Letter>,
    /// Slot that should receive focus next, when the row auto-advances
    pub advance_to: Option<usize>,
}

impl Keystroke {
    pub(crate) const REJECTED: Self = Self {
        letter: None,
        advance_to: None,
    };

    #[must_use]
    pub const fn accepted(self) -> bool {
        self.letter.is_some()
    }
}

impl LetterRow {
    /// A row of `len` empty slots
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Letter> {
        self.slots.get(index).copied().flatten()
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<Letter>] {
        &self.slots
    }

    /// Store `c` in slot `index`, replacing any previous letter
    ///
    /// Characters outside `[A-Za-z]` and out-of-range indices leave the row
    /// untouched. `advance` controls whether focus moves to the next slot.
    pub fn write(&mut self, index: usize, c: char, advance: bool) -> Keystroke {
        let Some(slot) = self.slots.get_mut(index) else {
            return Keystroke::REJECTED;
        };
        let Ok(letter) = Letter::from_char(c) else {
            return Keystroke::REJECTED;
        };

        *slot = Some(letter);
        let next = index + 1;
        Keystroke {
            letter: Some(letter),
            advance_to: (advance && next < self.slots.len()).then_some(next),
        }
    }

    /// Empty slot `index`, returning the letter it held
    pub fn clear(&mut self, index: usize) -> Option<Letter> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Filled slots with their 0-based positions
    pub fn filled(&self) -> impl Iterator<Item = (usize, Letter)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|letter| (i, letter)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_row_is_empty() {
        let row = LetterRow::new(4);
        assert_eq!(row.len(), 4);
        assert_eq!(row.filled().count(), 0);
    }

    #[test]
    fn write_normalizes_and_advances() {
        let mut row = LetterRow::new(3);
        let stroke = row.write(0, 'C', true);
        assert_eq!(stroke.letter.map(Letter::as_char), Some('c'));
        assert_eq!(stroke.advance_to, Some(1));
        assert_eq!(row.get(0).map(Letter::as_char), Some('c'));
    }

    #[test]
    fn last_slot_does_not_advance() {
        let mut row = LetterRow::new(3);
        assert_eq!(row.write(2, 'a', true).advance_to, None);
    }

    #[test]
    fn write_without_advance() {
        let mut row = LetterRow::new(3);
        let stroke = row.write(0, 'a', false);
        assert!(stroke.accepted());
        assert_eq!(stroke.advance_to, None);
    }

    #[test]
    fn invalid_input_is_ignored() {
        let mut row = LetterRow::new(3);
        row.write(1, 'x', true);

        assert_eq!(row.write(1, '7', true), Keystroke::REJECTED);
        assert_eq!(row.write(5, 'a', true), Keystroke::REJECTED);
        assert_eq!(row.get(1).map(Letter::as_char), Some('x'));
    }

    #[test]
    fn write_replaces_existing_letter() {
        let mut row = LetterRow::new(2);
        row.write(0, 'a', true);
        row.write(0, 'b', true);
        let filled: Vec<_> = row.filled().map(|(i, l)| (i, l.as_char())).collect();
        assert_eq!(filled, vec![(0, 'b')]);
    }

    #[test]
    fn clear_empties_slot() {
        let mut row = LetterRow::new(2);
        row.write(1, 'q', true);
        assert_eq!(row.clear(1).map(Letter::as_char), Some('q'));
        assert_eq!(row.clear(1), None);
        assert_eq!(row.clear(9), None);
    }
}
