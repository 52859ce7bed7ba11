//! Constraint form controller
//!
//! Owns the form state, routes every user event to the component that handles
//! it, and decides when a query is due. Queries leave the controller as
//! [`QueryTicket`]s; whoever runs them hands the resulting view back through
//! [`FormController::apply`].

use super::FormState;
use crate::core::{Letter, MAX_WORD_LENGTH};
use crate::debounce::Debouncer;
use crate::query::{
    FilterRequest, INVALID_FIELD_LENGTH, INVALID_QUERY_LENGTH, ResultsView, build_request,
};
use std::time::{Duration, Instant};

/// A user action on the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// New raw text of the word length field
    EditLength(String),
    IncrementLength,
    DecrementLength,
    TypePositioned { index: usize, ch: char },
    ErasePositioned { index: usize },
    TypeMisplaced { index: usize, ch: char },
    EraseMisplaced { index: usize },
    TypeFound { row: usize, col: usize, ch: char },
    EraseFound { row: usize, col: usize },
    ToggleRequired(Letter),
    ToggleExcluded(Letter),
    AddFoundRow,
}

/// A request ready to be sent, numbered in issue order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    pub seq: u64,
    pub request: FilterRequest,
}

/// What the front-end should do after an event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reaction {
    /// Send this query now
    pub query: Option<QueryTicket>,
    /// Move focus to this slot of the row that was typed in
    pub advance_to: Option<usize>,
    /// Show a blocking alert
    pub alert: Option<String>,
}

impl Reaction {
    fn query(query: Option<QueryTicket>) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }
}

pub struct FormController {
    state: FormState,
    results: ResultsView,
    query_debounce: Debouncer,
    length_debounce: Debouncer,
    issued: u64,
    newest_applied: u64,
    in_flight: usize,
}

impl FormController {
    #[must_use]
    pub fn new(initial_length: usize, quiet_period: Duration) -> Self {
        Self::with_state(FormState::new(initial_length.to_string()), quiet_period)
    }

    #[must_use]
    pub fn with_state(state: FormState, quiet_period: Duration) -> Self {
        Self {
            state,
            results: ResultsView::Empty,
            query_debounce: Debouncer::new(quiet_period),
            length_debounce: Debouncer::new(quiet_period),
            issued: 0,
            newest_applied: 0,
            in_flight: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    #[must_use]
    pub fn results(&self) -> &ResultsView {
        &self.results
    }

    /// Queries issued whose results have not come back yet
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Whether an edit is still waiting out its quiet period
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.query_debounce.is_pending() || self.length_debounce.is_pending()
    }

    /// Initial query for a freshly generated form
    pub fn start(&mut self) -> Option<QueryTicket> {
        self.query_now()
    }

    pub fn handle(&mut self, event: FormEvent, now: Instant) -> Reaction {
        match event {
            FormEvent::EditLength(raw) => {
                self.state.set_length_input(raw);
                self.length_debounce.schedule(now);
                Reaction::default()
            }
            FormEvent::IncrementLength => {
                let current = leading_integer(self.state.length_input()).unwrap_or(0).max(0);
                let max = i64::try_from(MAX_WORD_LENGTH).unwrap_or(i64::MAX);
                if current >= max {
                    return Reaction::default();
                }
                self.state.set_length_input((current + 1).to_string());
                Reaction::query(self.settle_length())
            }
            FormEvent::DecrementLength => match leading_integer(self.state.length_input()) {
                Some(current) if current > 1 => {
                    self.state.set_length_input((current - 1).to_string());
                    Reaction::query(self.settle_length())
                }
                _ => Reaction::default(),
            },
            FormEvent::TypePositioned { index, ch } => {
                let stroke = self.state.inputs().type_positioned(index, ch);
                if stroke.accepted() {
                    self.query_debounce.schedule(now);
                }
                Reaction {
                    advance_to: stroke.advance_to,
                    ..Reaction::default()
                }
            }
            FormEvent::ErasePositioned { index } => {
                if self.state.inputs().erase_positioned(index).is_some() {
                    self.query_debounce.schedule(now);
                }
                Reaction::default()
            }
            FormEvent::TypeMisplaced { index, ch } => {
                if self.state.inputs().type_misplaced(index, ch).accepted() {
                    self.query_debounce.schedule(now);
                }
                Reaction::default()
            }
            FormEvent::EraseMisplaced { index } => {
                if self.state.inputs().erase_misplaced(index).is_some() {
                    self.query_debounce.schedule(now);
                }
                Reaction::default()
            }
            FormEvent::TypeFound { row, col, ch } => {
                let stroke = self.state.found_tracker().type_letter(row, col, ch);
                if stroke.accepted() {
                    self.query_debounce.schedule(now);
                }
                Reaction {
                    advance_to: stroke.advance_to,
                    ..Reaction::default()
                }
            }
            FormEvent::EraseFound { row, col } => {
                if self.state.found_tracker().erase(row, col).is_some() {
                    self.query_debounce.schedule(now);
                }
                Reaction::default()
            }
            FormEvent::ToggleRequired(letter) => {
                self.state.required_keyboard().toggle(letter);
                Reaction::query(self.query_now())
            }
            FormEvent::ToggleExcluded(letter) => {
                self.state.excluded_keyboard().toggle(letter);
                Reaction::query(self.query_now())
            }
            FormEvent::AddFoundRow => match self.state.add_found_row() {
                Ok(_) => Reaction::query(self.query_now()),
                Err(err) => {
                    tracing::debug!(error = %err.0, "found-letters row refused");
                    Reaction {
                        alert: Some(err.to_string()),
                        ..Reaction::default()
                    }
                }
            },
        }
    }

    /// Run whichever debounced action is due
    ///
    /// A settled length edit takes precedence over a pending keystroke query,
    /// since settling already queries the current state.
    pub fn tick(&mut self, now: Instant) -> Option<QueryTicket> {
        let length_due = self.length_debounce.fire(now);
        let query_due = self.query_debounce.fire(now);

        if length_due {
            self.settle_length()
        } else if query_due {
            self.query_now()
        } else {
            None
        }
    }

    /// How long the front-end may wait before calling [`FormController::tick`]
    #[must_use]
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        match (
            self.query_debounce.remaining(now),
            self.length_debounce.remaining(now),
        ) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Build a query from the current state, or show why it cannot be sent
    pub fn query_now(&mut self) -> Option<QueryTicket> {
        match build_request(&self.state) {
            Ok(request) => {
                self.issued += 1;
                self.in_flight += 1;
                tracing::debug!(seq = self.issued, "query issued");
                Some(QueryTicket {
                    seq: self.issued,
                    request,
                })
            }
            Err(err) => {
                tracing::debug!(error = %err, "query not sent");
                self.results = ResultsView::Invalid(INVALID_QUERY_LENGTH);
                None
            }
        }
    }

    /// Show the outcome of query `seq`
    ///
    /// Results are applied in arrival order. An older query that finishes
    /// late replaces the view of a newer one.
    pub fn apply(&mut self, seq: u64, view: ResultsView) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if seq < self.newest_applied {
            tracing::debug!(seq, newest = self.newest_applied, "stale response applied");
        }
        self.newest_applied = self.newest_applied.max(seq);
        self.results = view;
    }

    /// Regenerate the rows from the length field, then query
    fn settle_length(&mut self) -> Option<QueryTicket> {
        self.length_debounce.cancel();
        match self.state.word_length() {
            Ok(length) => {
                self.state.inputs().generate(length);
                self.query_now()
            }
            Err(err) => {
                tracing::debug!(error = %err, "length field invalid");
                self.state.inputs().clear_positioned();
                self.results = ResultsView::Invalid(INVALID_FIELD_LENGTH);
                None
            }
        }
    }
}

/// Integer prefix of the length field, the way the +/- buttons read it
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::FilterResponse;
    use serde_json::json;

    const QUIET: Duration = Duration::from_millis(300);

    fn controller() -> FormController {
        FormController::new(5, QUIET)
    }

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn start_issues_initial_query() {
        let mut form = controller();
        let ticket = form.start().unwrap();
        assert_eq!(ticket.seq, 1);
        assert_eq!(ticket.request.word_length, 5);
        assert_eq!(form.in_flight(), 1);
    }

    #[test]
    fn typing_is_debounced() {
        let start = Instant::now();
        let mut form = controller();

        let reaction = form.handle(FormEvent::TypePositioned { index: 2, ch: 'c' }, start);
        assert_eq!(reaction.query, None);
        assert_eq!(reaction.advance_to, Some(3));
        assert_eq!(form.tick(start + Duration::from_millis(100)), None);

        let ticket = form.tick(start + QUIET).unwrap();
        assert_eq!(
            serde_json::to_value(&ticket.request.positioned).unwrap(),
            json!([{"letra": "c", "posicao": 2}])
        );
    }

    #[test]
    fn rapid_typing_collapses_into_one_query() {
        let start = Instant::now();
        let mut form = controller();

        for (i, ch) in "crane".chars().enumerate() {
            let now = start + Duration::from_millis(50 * i as u64);
            form.handle(FormEvent::TypePositioned { index: i, ch }, now);
            assert_eq!(form.tick(now), None);
        }

        let ticket = form.tick(start + Duration::from_millis(200) + QUIET).unwrap();
        assert_eq!(ticket.request.positioned.len(), 5);
        assert_eq!(form.tick(start + Duration::from_secs(5)), None);
    }

    #[test]
    fn key_toggles_query_immediately() {
        let now = Instant::now();
        let mut form = controller();

        let first = form.handle(FormEvent::ToggleRequired(letter('r')), now);
        let request = first.query.unwrap().request;
        assert_eq!(serde_json::to_value(request.required).unwrap(), json!(["r"]));

        let second = form.handle(FormEvent::ToggleRequired(letter('r')), now);
        let request = second.query.unwrap().request;
        assert_eq!(serde_json::to_value(request.required).unwrap(), json!([]));
    }

    #[test]
    fn required_and_excluded_are_independent() {
        let now = Instant::now();
        let mut form = controller();
        form.handle(FormEvent::ToggleRequired(letter('a')), now);
        form.handle(FormEvent::ToggleExcluded(letter('a')), now);

        assert!(form.state().required().contains(letter('a')));
        assert!(form.state().excluded().contains(letter('a')));
    }

    #[test]
    fn length_edit_settles_after_quiet_period() {
        let start = Instant::now();
        let mut form = controller();
        form.handle(FormEvent::TypePositioned { index: 0, ch: 'x' }, start);

        form.handle(FormEvent::EditLength("3".to_string()), start);
        assert_eq!(form.state().positioned().len(), 5);

        let ticket = form.tick(start + QUIET).unwrap();
        assert_eq!(ticket.request.word_length, 3);
        assert!(ticket.request.positioned.is_empty());
        assert_eq!(form.state().positioned().len(), 3);
        assert_eq!(form.state().misplaced().len(), 3);
    }

    #[test]
    fn invalid_length_edit_clears_positioned_row() {
        let start = Instant::now();
        let mut form = controller();

        form.handle(FormEvent::EditLength("0".to_string()), start);
        assert_eq!(form.tick(start + QUIET), None);

        assert!(form.state().positioned().is_empty());
        assert_eq!(form.results(), &ResultsView::Invalid(INVALID_FIELD_LENGTH));
        assert_eq!(form.results().total_line(), "");
    }

    #[test]
    fn increment_and_decrement_regenerate_immediately() {
        let now = Instant::now();
        let mut form = controller();
        form.handle(FormEvent::TypeMisplaced { index: 0, ch: 'q' }, now);

        let up = form.handle(FormEvent::IncrementLength, now);
        assert_eq!(up.query.unwrap().request.word_length, 6);
        assert_eq!(form.state().length_input(), "6");
        assert_eq!(form.state().misplaced().len(), 6);
        assert_eq!(form.state().misplaced().filled().count(), 0);

        let down = form.handle(FormEvent::DecrementLength, now);
        assert_eq!(down.query.unwrap().request.word_length, 5);
    }

    #[test]
    fn increment_stops_at_longest_word() {
        let mut form = FormController::new(MAX_WORD_LENGTH, QUIET);
        let reaction = form.handle(FormEvent::IncrementLength, Instant::now());
        assert_eq!(reaction, Reaction::default());
        assert_eq!(form.state().length_input(), MAX_WORD_LENGTH.to_string());
    }

    #[test]
    fn decrement_stops_at_one() {
        let mut form = FormController::new(1, QUIET);
        let reaction = form.handle(FormEvent::DecrementLength, Instant::now());
        assert_eq!(reaction, Reaction::default());
        assert_eq!(form.state().length_input(), "1");
    }

    #[test]
    fn increment_from_garbage_starts_at_one() {
        let now = Instant::now();
        let mut form = controller();
        form.handle(FormEvent::EditLength("abc".to_string()), now);

        let reaction = form.handle(FormEvent::IncrementLength, now);
        assert_eq!(reaction.query.unwrap().request.word_length, 1);
        // The pending edit was absorbed by the increment
        assert_eq!(form.tick(now + QUIET), None);
    }

    #[test]
    fn add_found_row_without_length_alerts() {
        let now = Instant::now();
        let mut form = controller();
        form.handle(FormEvent::EditLength(String::new()), now);

        let reaction = form.handle(FormEvent::AddFoundRow, now);
        assert_eq!(
            reaction.alert.as_deref(),
            Some("Defina um tamanho válido antes de adicionar linhas.")
        );
        assert_eq!(reaction.query, None);
        assert!(form.state().found_rows().is_empty());
    }

    #[test]
    fn found_row_letters_become_required() {
        let now = Instant::now();
        let mut form = controller();
        let added = form.handle(FormEvent::AddFoundRow, now);
        assert_eq!(added.query.unwrap().request.found.len(), 1);

        let typed = form.handle(
            FormEvent::TypeFound {
                row: 0,
                col: 4,
                ch: 'E',
            },
            now,
        );
        assert_eq!(typed.advance_to, None);
        assert!(form.state().required().contains(letter('e')));

        let ticket = form.tick(now + QUIET).unwrap();
        assert_eq!(
            serde_json::to_value(&ticket.request.found).unwrap(),
            json!([["e"]])
        );
    }

    #[test]
    fn query_with_invalid_length_shows_validation_message() {
        let now = Instant::now();
        let mut form = controller();
        form.handle(FormEvent::EditLength("-2".to_string()), now);

        let reaction = form.handle(FormEvent::ToggleExcluded(letter('z')), now);
        assert_eq!(reaction.query, None);
        assert_eq!(form.results(), &ResultsView::Invalid(INVALID_QUERY_LENGTH));
    }

    #[test]
    fn late_response_overwrites_newer_one() {
        let now = Instant::now();
        let mut form = controller();
        let first = form.start().unwrap();
        let second = form
            .handle(FormEvent::ToggleRequired(letter('a')), now)
            .query
            .unwrap();
        assert_eq!(form.in_flight(), 2);

        form.apply(
            second.seq,
            ResultsView::from_response(FilterResponse::Matches {
                total: 1,
                words: vec!["aback".to_string()],
            }),
        );
        form.apply(
            first.seq,
            ResultsView::from_response(FilterResponse::Matches {
                total: 0,
                words: Vec::new(),
            }),
        );

        assert_eq!(form.in_flight(), 0);
        assert_eq!(form.results().total_line(), "Total de palavras encontradas: 0");
    }

    #[test]
    fn next_deadline_tracks_earliest_timer() {
        let start = Instant::now();
        let mut form = controller();
        assert_eq!(form.next_deadline(start), None);

        form.handle(FormEvent::TypePositioned { index: 0, ch: 'a' }, start);
        form.handle(
            FormEvent::EditLength("6".to_string()),
            start + Duration::from_millis(100),
        );
        assert_eq!(form.next_deadline(start), Some(QUIET));
    }

    #[test]
    fn waiting_until_quiet_period_passes() {
        let start = Instant::now();
        let mut form = controller();
        assert!(!form.is_waiting());

        form.handle(FormEvent::TypeMisplaced { index: 1, ch: 'o' }, start);
        assert!(form.is_waiting());

        form.tick(start + QUIET);
        assert!(!form.is_waiting());
    }

    #[test]
    fn leading_integer_reads_prefix() {
        assert_eq!(leading_integer("12abc"), Some(12));
        assert_eq!(leading_integer(" -4"), Some(-4));
        assert_eq!(leading_integer("abc"), None);
        assert_eq!(leading_integer(""), None);
        assert_eq!(leading_integer("-"), None);
    }
}
