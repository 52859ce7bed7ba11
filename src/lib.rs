//! Word Filter
//!
//! Terminal client for a word-filtering server: describe what you know about a
//! word (letters in place, letters out of place, letters required or excluded)
//! and see every dictionary word that still fits.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use word_filter::form::FormState;
//! use word_filter::query::build_request;
//!
//! let mut state = FormState::new("5");
//! state.inputs().type_positioned(0, 'c');
//!
//! let request = build_request(&state).unwrap();
//! println!("{}", serde_json::to_string(&request).unwrap());
//! ```

// Core domain types
pub mod core;

// Constraint form and its components
pub mod form;

// Request payloads, transport and result views
pub mod query;

// Quiet-period timers
pub mod debounce;

// Settings and logging
pub mod config;
pub mod logging;

// Start-up worker registration
pub mod registration;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
