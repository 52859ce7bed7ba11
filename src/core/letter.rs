//! Single-letter representation
//!
//! Every letter that enters the form state passes through [`Letter`], so the
//! rest of the crate can rely on lowercase ASCII `a..=z`.

use serde::{Serialize, Serializer};
use std::fmt;

/// A lowercase ASCII letter (`a..=z`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Error type for rejected letter input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    Empty,
    TooLong(usize),
    NotAlphabetic(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "No letter given"),
            Self::TooLong(len) => write!(f, "Expected a single letter, got {len} characters"),
            Self::NotAlphabetic(c) => write!(f, "'{c}' is not a letter from A to Z"),
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// Number of letters in the alphabet
    pub const COUNT: usize = 26;

    /// Create a letter from a character, folding uppercase to lowercase
    ///
    /// # Errors
    /// Returns `LetterError::NotAlphabetic` for anything outside `[A-Za-z]`.
    ///
    /// # Examples
    /// ```
    /// use word_filter::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('R').unwrap().as_char(), 'r');
    /// assert!(Letter::from_char('3').is_err());
    /// ```
    pub fn from_char(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_lowercase() as u8))
        } else {
            Err(LetterError::NotAlphabetic(c))
        }
    }

    /// Parse raw field text: surrounding whitespace is ignored and exactly one
    /// letter must remain
    ///
    /// # Errors
    /// Returns `LetterError` when the trimmed text is empty, longer than one
    /// character, or not a letter.
    pub fn parse(raw: &str) -> Result<Self, LetterError> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(LetterError::Empty),
            (Some(c), None) => Self::from_char(c),
            (Some(_), Some(_)) => Err(LetterError::TooLong(trimmed.chars().count())),
        }
    }

    /// Letter at alphabet position `index` (0 = 'a')
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(b'a' + index as u8))
        } else {
            None
        }
    }

    /// Alphabet position (0 = 'a', 25 = 'z')
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'a') as usize
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Uppercase form, used for key labels
    #[inline]
    #[must_use]
    pub const fn label(self) -> char {
        self.0.to_ascii_uppercase() as char
    }

    /// All 26 letters in alphabetical order
    pub fn alphabet() -> impl Iterator<Item = Self> {
        (b'a'..=b'z').map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Letter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut buf = [0u8; 4];
        serializer.serialize_str(self.as_char().encode_utf8(&mut buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_char_lowercases() {
        assert_eq!(Letter::from_char('C').unwrap().as_char(), 'c');
        assert_eq!(Letter::from_char('c').unwrap().as_char(), 'c');
    }

    #[test]
    fn from_char_rejects_non_letters() {
        assert_eq!(
            Letter::from_char('3'),
            Err(LetterError::NotAlphabetic('3'))
        );
        assert!(Letter::from_char(' ').is_err());
        assert!(Letter::from_char('é').is_err());
        assert!(Letter::from_char('_').is_err());
    }

    #[test]
    fn parse_trims_and_requires_one_char() {
        assert_eq!(Letter::parse(" x ").unwrap().as_char(), 'x');
        assert_eq!(Letter::parse(""), Err(LetterError::Empty));
        assert_eq!(Letter::parse("   "), Err(LetterError::Empty));
        assert_eq!(Letter::parse("ab"), Err(LetterError::TooLong(2)));
    }

    #[test]
    fn index_round_trip_covers_alphabet() {
        let letters: Vec<Letter> = Letter::alphabet().collect();
        assert_eq!(letters.len(), Letter::COUNT);
        for (i, letter) in letters.iter().enumerate() {
            assert_eq!(letter.index(), i);
            assert_eq!(Letter::from_index(i), Some(*letter));
        }
        assert_eq!(Letter::from_index(26), None);
    }

    #[test]
    fn label_is_uppercase() {
        assert_eq!(Letter::from_char('q').unwrap().label(), 'Q');
    }

    #[test]
    fn serializes_as_string() {
        let letter = Letter::from_char('Z').unwrap();
        assert_eq!(serde_json::to_string(&letter).unwrap(), "\"z\"");
    }
}
