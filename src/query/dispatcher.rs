//! Turns form state into a request and a request into a results view

use super::client::FilterClient;
use super::payload::{FilterRequest, FilterResponse, PlacedLetter};
use super::results::{INVALID_QUERY_LENGTH, ResultsView};
use crate::core::{LengthError, Letter};
use crate::form::{FormState, FoundRow};

/// Collect the current form state into a request body
///
/// Only filled slots are sent, each with its 0-based position.
///
/// # Errors
/// Returns `LengthError` when the length field does not hold a valid length;
/// no request should be sent in that case.
pub fn build_request(state: &FormState) -> Result<FilterRequest, LengthError> {
    let word_length = state.word_length()?;

    let placed = |(position, letter): (usize, Letter)| PlacedLetter { letter, position };

    Ok(FilterRequest {
        word_length,
        positioned: state.positioned().filled().map(placed).collect(),
        required: state.required(),
        excluded: state.excluded(),
        found: state.found_rows().iter().map(FoundRow::letters).collect(),
        misplaced: state.misplaced().filled().map(placed).collect(),
    })
}

/// Sends requests through a [`FilterClient`] and interprets the answers
#[derive(Debug, Clone)]
pub struct QueryDispatcher<C> {
    client: C,
}

impl<C: FilterClient> QueryDispatcher<C> {
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Submit one request; failures become views, never errors
    pub async fn submit(&self, request: &FilterRequest) -> ResultsView {
        match self.client.filter(request).await {
            Ok(response) => {
                match &response {
                    FilterResponse::Rejected { error } => {
                        tracing::warn!(%error, "server rejected filter request");
                    }
                    FilterResponse::Matches { total, words } => {
                        tracing::info!(total, shown = words.len(), "filter results");
                    }
                }
                ResultsView::from_response(response)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to filter words");
                ResultsView::Failure
            }
        }
    }

    /// Validate, build and submit in one go
    pub async fn dispatch(&self, state: &FormState) -> ResultsView {
        match build_request(state) {
            Ok(request) => self.submit(&request).await,
            Err(err) => {
                tracing::debug!(error = %err, "query skipped");
                ResultsView::Invalid(INVALID_QUERY_LENGTH)
            }
        }
    }
}
