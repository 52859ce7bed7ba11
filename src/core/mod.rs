//! Core domain types for the constraint form
//!
//! This module contains the fundamental value types with no I/O.
//! Everything that reaches the form state or the wire is validated here first.

mod length;
mod letter;
mod letter_set;

pub use length::{LengthError, MAX_WORD_LENGTH, parse_word_length};
pub use letter::{Letter, LetterError};
pub use letter_set::LetterSet;
