//! Word length field parsing

use std::fmt;

/// Upper bound on the word length the form will lay out
pub const MAX_WORD_LENGTH: usize = 64;

/// Why the word length field is not usable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LengthError {
    Empty,
    NotNumeric(String),
    NotPositive(i64),
    TooLong(usize),
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word length is empty"),
            Self::NotNumeric(raw) => write!(f, "Word length '{raw}' is not a number"),
            Self::NotPositive(n) => write!(f, "Word length must be positive, got {n}"),
            Self::TooLong(n) => {
                write!(f, "Word length must be at most {MAX_WORD_LENGTH}, got {n}")
            }
        }
    }
}

impl std::error::Error for LengthError {}

/// Parse the raw text of the word length field
///
/// # Errors
/// Returns `LengthError` unless the trimmed text is an integer in
/// `1..=MAX_WORD_LENGTH`.
///
/// # Examples
/// ```
/// use word_filter::core::parse_word_length;
///
/// assert_eq!(parse_word_length(" 5 "), Ok(5));
/// assert!(parse_word_length("0").is_err());
/// assert!(parse_word_length("five").is_err());
/// ```
pub fn parse_word_length(raw: &str) -> Result<usize, LengthError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LengthError::Empty);
    }

    let value: i64 = trimmed
        .parse()
        .map_err(|_| LengthError::NotNumeric(trimmed.to_string()))?;

    if value <= 0 {
        return Err(LengthError::NotPositive(value));
    }

    let length = usize::try_from(value).map_err(|_| LengthError::TooLong(usize::MAX))?;
    if length > MAX_WORD_LENGTH {
        return Err(LengthError::TooLong(length));
    }

    Ok(length)
}
