//! The constraint form
//!
//! [`FormState`] holds everything the user entered. The components below
//! borrow the part of it they edit; [`FormController`] ties them together and
//! decides when to query.

mod controller;
mod found;
mod inputs;
pub mod keyboard;
mod row;
mod state;

pub use controller::{FormController, FormEvent, QueryTicket, Reaction};
pub use found::{FoundLettersTracker, FoundRow, FoundRowError, INVALID_LENGTH_ALERT};
pub use inputs::{InputGenerator, misplaced_placeholder};
pub use keyboard::{Key, VirtualKeyboard};
pub use row::{Keystroke, LetterRow};
pub use state::FormState;
