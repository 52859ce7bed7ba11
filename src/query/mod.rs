//! Filter queries: payload, transport and result views

mod client;
mod dispatcher;
mod payload;
mod results;

pub use client::{DispatchError, FILTER_PATH, FilterClient, HttpFilterClient};
pub use dispatcher::{QueryDispatcher, build_request};
pub use payload::{FilterRequest, FilterResponse, PlacedLetter};
pub use results::{
    INVALID_FIELD_LENGTH, INVALID_QUERY_LENGTH, NO_RESULTS, REQUEST_FAILED, ResultsView,
};
