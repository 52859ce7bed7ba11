//! Command implementations

pub mod query;

pub use query::{BLANKS, QueryConfig, QueryError, build_form, preview_request, run_query};
