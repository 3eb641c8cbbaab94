use crate::schemas::SearchResponse;
use crate::search::SearchError;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Mode {
    Search,
    Help,
}

/// What the page shows. Exactly one of these holds at any time.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum UiState {
    /// No query attempted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request failed.
    Error { message: String },
    /// The last request succeeded.
    Ready { response: SearchResponse },
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    pub fn response(&self) -> Option<&SearchResponse> {
        match self {
            UiState::Ready { response } => Some(response),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            UiState::Error { message } => Some(message),
            _ => None,
        }
    }
}

// Search ticket and outcome for async communication
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTicket {
    pub id: u64,
    pub query: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    pub id: u64,
    pub result: Result<SearchResponse, SearchError>,
}
