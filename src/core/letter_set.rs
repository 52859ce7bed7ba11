//! Set of distinct letters
//!
//! Stored as a 26-bit mask. Used for the required/excluded selections and for
//! each found-letters row.

use super::Letter;
use serde::{Serialize, Serializer, ser::SerializeSeq};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    const fn bit(letter: Letter) -> u32 {
        1 << letter.index()
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    /// Add a letter, returning `true` if it was not already present
    pub fn insert(&mut self, letter: Letter) -> bool {
        let added = !self.contains(letter);
        self.0 |= Self::bit(letter);
        added
    }

    /// Remove a letter, returning `true` if it was present
    pub fn remove(&mut self, letter: Letter) -> bool {
        let present = self.contains(letter);
        self.0 &= !Self::bit(letter);
        present
    }

    /// Flip membership of a letter, returning the new membership
    pub fn toggle(&mut self, letter: Letter) -> bool {
        !self.remove(letter) && self.insert(letter)
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::alphabet().filter(move |&letter| self.contains(letter))
    }

    #[must_use]
    pub fn to_vec(self) -> Vec<Letter> {
        self.iter().collect()
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl Extend<Letter> for LetterSet {
    fn extend<I: IntoIterator<Item = Letter>>(&mut self, iter: I) {
        for letter in iter {
            self.insert(letter);
        }
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter.label())?;
        }
        Ok(())
    }
}

impl Serialize for LetterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for letter in self.iter() {
            seq.serialize_element(&letter)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn insert_and_remove_report_changes() {
        let mut set = LetterSet::new();
        assert!(set.insert(letter('a')));
        assert!(!set.insert(letter('a')));
        assert_eq!(set.len(), 1);
        assert!(set.remove(letter('a')));
        assert!(!set.remove(letter('a')));
        assert!(set.is_empty());
    }

    #[test]
    fn toggle_twice_restores_membership() {
        let original: LetterSet = "crn".chars().map(letter).collect();
        for c in ['a', 'c', 'z'] {
            let mut set = original;
            set.toggle(letter(c));
            assert_ne!(set, original);
            set.toggle(letter(c));
            assert_eq!(set, original);
        }
    }

    #[test]
    fn iterates_alphabetically() {
        let set: LetterSet = "zebra".chars().map(letter).collect();
        let collected: String = set.iter().map(Letter::as_char).collect();
        assert_eq!(collected, "aberz");
        assert_eq!(set.to_string(), "ABERZ");
    }

    #[test]
    fn boundary_letters() {
        let mut set = LetterSet::new();
        set.insert(letter('a'));
        set.insert(letter('z'));
        assert!(set.contains(letter('a')));
        assert!(set.contains(letter('z')));
        assert!(!set.contains(letter('m')));
    }

    #[test]
    fn serializes_as_list() {
        let set: LetterSet = "rs".chars().map(letter).collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["r","s"]"#);
        assert_eq!(serde_json::to_string(&LetterSet::new()).unwrap(), "[]");
    }
}
