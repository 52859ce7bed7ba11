//! One-shot query command
//!
//! Fills a form from command-line patterns, the same way keystrokes would,
//! then sends a single request.

use crate::core::{LengthError, Letter, LetterError};
use crate::form::{FormState, FoundRowError};
use crate::query::{FilterClient, FilterRequest, QueryDispatcher, ResultsView, build_request};
use std::fmt;

/// Characters that mark an empty slot in a pattern
pub const BLANKS: [char; 4] = ['_', '.', '-', ' '];

/// Raw arguments of a query
#[derive(Debug, Clone, Default)]
pub struct QueryConfig {
    pub length: String,
    pub positioned: Option<String>,
    pub misplaced: Option<String>,
    pub required: Option<String>,
    pub excluded: Option<String>,
    pub found: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum QueryError {
    Length(LengthError),
    PatternLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    Letter {
        field: &'static str,
        source: LetterError,
    },
    FoundRow(FoundRowError),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(err) => write!(f, "invalid word length: {err}"),
            Self::PatternLength {
                field,
                expected,
                actual,
            } => write!(
                f,
                "--{field} pattern has {actual} slots but the word has {expected} letters"
            ),
            Self::Letter { field, source } => write!(f, "--{field}: {source}"),
            Self::FoundRow(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Length(err) => Some(err),
            Self::Letter { source, .. } => Some(source),
            Self::FoundRow(err) => Some(err),
            Self::PatternLength { .. } => None,
        }
    }
}

/// Slots of a pattern, `None` for blanks
fn pattern_slots(
    field: &'static str,
    pattern: &str,
    expected: usize,
) -> Result<Vec<Option<char>>, QueryError> {
    let slots: Vec<Option<char>> = pattern
        .chars()
        .map(|c| (!BLANKS.contains(&c)).then_some(c))
        .collect();

    if slots.len() != expected {
        return Err(QueryError::PatternLength {
            field,
            expected,
            actual: slots.len(),
        });
    }
    for c in slots.iter().flatten() {
        Letter::from_char(*c).map_err(|source| QueryError::Letter { field, source })?;
    }
    Ok(slots)
}

/// Letters of a keyboard argument: either `abc` or `a,b,c`
fn letter_list(field: &'static str, raw: &str) -> Result<Vec<Letter>, QueryError> {
    let letters: Result<Vec<Letter>, LetterError> = if raw.contains(',') {
        raw.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(Letter::parse)
            .collect()
    } else {
        raw.chars()
            .filter(|c| !c.is_whitespace())
            .map(Letter::from_char)
            .collect()
    };
    letters.map_err(|source| QueryError::Letter { field, source })
}

/// Build the form a user would have filled in by hand
///
/// # Errors
///
/// Returns an error if:
/// - The length is not a valid word length
/// - A pattern does not have exactly one slot per letter
/// - A pattern or letter list holds something other than letters and blanks
pub fn build_form(config: &QueryConfig) -> Result<FormState, QueryError> {
    let mut state = FormState::new(config.length.trim());
    let length = state.word_length().map_err(QueryError::Length)?;

    {
        let mut inputs = state.inputs();
        if let Some(pattern) = &config.positioned {
            for (i, c) in pattern_slots("positioned", pattern, length)?.into_iter().enumerate() {
                if let Some(c) = c {
                    inputs.type_positioned(i, c);
                }
            }
        }
        if let Some(pattern) = &config.misplaced {
            for (i, c) in pattern_slots("misplaced", pattern, length)?.into_iter().enumerate() {
                if let Some(c) = c {
                    inputs.type_misplaced(i, c);
                }
            }
        }
    }

    if let Some(raw) = &config.required {
        let letters = letter_list("require", raw)?;
        let mut keyboard = state.required_keyboard();
        for letter in letters {
            keyboard.select(letter);
        }
    }
    if let Some(raw) = &config.excluded {
        let letters = letter_list("exclude", raw)?;
        let mut keyboard = state.excluded_keyboard();
        for letter in letters {
            keyboard.select(letter);
        }
    }

    for pattern in &config.found {
        let slots = pattern_slots("found", pattern, length)?;
        let row = state.add_found_row().map_err(QueryError::FoundRow)?;
        let mut tracker = state.found_tracker();
        for (col, c) in slots.into_iter().enumerate() {
            if let Some(c) = c {
                tracker.type_letter(row, col, c);
            }
        }
    }

    Ok(state)
}

/// The request body a form would send
///
/// # Errors
/// Returns an error if the form's length is invalid.
pub fn preview_request(state: &FormState) -> Result<FilterRequest, QueryError> {
    build_request(state).map_err(QueryError::Length)
}

/// Send one query for the form
pub async fn run_query<C: FilterClient>(
    dispatcher: &QueryDispatcher<C>,
    state: &FormState,
) -> ResultsView {
    tracing::info!(length = state.length_input(), "sending one-shot query");
    dispatcher.dispatch(state).await
}
