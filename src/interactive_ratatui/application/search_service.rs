use crate::interactive_ratatui::domain::models::{SearchOutcome, SearchTicket};
use crate::search::SearchClient;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use tokio::runtime::Handle;
use tracing::debug;

/// Runs search tickets against the backend.
///
/// Every ticket gets its own task. The outcome carries the ticket id so the
/// controller can drop results that arrive after a newer submission.
pub struct SearchService {
    client: Arc<SearchClient>,
}

impl SearchService {
    pub fn new(client: SearchClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub async fn search(&self, ticket: SearchTicket) -> SearchOutcome {
        run_ticket(&self.client, ticket).await
    }

    /// Spawn the call on `runtime` and deliver its outcome on `sender`.
    pub fn dispatch(&self, runtime: &Handle, ticket: SearchTicket, sender: Sender<SearchOutcome>) {
        let client = Arc::clone(&self.client);
        runtime.spawn(async move {
            let outcome = run_ticket(&client, ticket).await;
            if sender.send(outcome).is_err() {
                debug!("search outcome receiver dropped");
            }
        });
    }
}

async fn run_ticket(client: &SearchClient, ticket: SearchTicket) -> SearchOutcome {
    let result = client.search(&ticket.query).await;
    SearchOutcome {
        id: ticket.id,
        result,
    }
}
