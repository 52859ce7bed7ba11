//! Virtual A–Z keyboard bound to a letter set

use crate::core::{Letter, LetterSet};

/// One key as displayed: its letter and whether it is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub letter: Letter,
    pub selected: bool,
}

/// Toggle-selection keyboard over a borrowed set
///
/// The selected indicator is not stored anywhere: a key is selected exactly
/// when its letter is in the set.
pub struct VirtualKeyboard<'s> {
    selection: &'s mut LetterSet,
}

impl<'s> VirtualKeyboard<'s> {
    pub fn new(selection: &'s mut LetterSet) -> Self {
        Self { selection }
    }

    /// Press a key, returning whether it is now selected
    pub fn toggle(&mut self, letter: Letter) -> bool {
        let selected = self.selection.toggle(letter);
        tracing::trace!(letter = %letter, selected, "key toggled");
        selected
    }

    /// Select a key without toggling it off
    pub fn select(&mut self, letter: Letter) {
        self.selection.insert(letter);
    }
}

/// The 26 keys of a keyboard showing `selection`
pub fn keys(selection: &LetterSet) -> impl Iterator<Item = Key> + '_ {
    Letter::alphabet().map(move |letter| Key {
        letter,
        selected: selection.contains(letter),
    })
}
