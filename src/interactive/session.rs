//! Runs queries off the UI thread
//!
//! Tickets are spawned onto the tokio runtime; finished views come back over
//! a channel in whatever order the server answers.

use crate::form::QueryTicket;
use crate::query::{FilterClient, QueryDispatcher, ResultsView};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

pub type Completion = (u64, ResultsView);

pub struct QuerySession<C> {
    runtime: Handle,
    dispatcher: Arc<QueryDispatcher<C>>,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
}

impl<C: FilterClient + 'static> QuerySession<C> {
    pub fn new(runtime: Handle, dispatcher: QueryDispatcher<C>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            runtime,
            dispatcher: Arc::new(dispatcher),
            tx,
            rx,
        }
    }

    /// Send a query in the background
    pub fn spawn(&self, ticket: QueryTicket) {
        let dispatcher = Arc::clone(&self.dispatcher);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let view = dispatcher.submit(&ticket.request).await;
            if tx.send((ticket.seq, view)).is_err() {
                tracing::debug!(seq = ticket.seq, "result dropped after shutdown");
            }
        });
    }

    /// A finished query, if one is waiting
    pub fn try_next(&mut self) -> Option<Completion> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next finished query
    #[cfg(test)]
    pub async fn next(&mut self) -> Option<Completion> {
        self.rx.recv().await
    }
}
