//! Terminal output formatting
//!
//! Display utilities for the one-shot query command.

pub mod display;
pub mod formatters;

pub use display::{print_query_summary, print_request, print_results};
