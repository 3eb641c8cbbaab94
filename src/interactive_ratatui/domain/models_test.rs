#[cfg(test)]
mod tests {
    use super::super::models::*;
    use crate::schemas::{SearchResponse, SearchStatistics};
    use crate::search::SearchError;

    fn empty_response() -> SearchResponse {
        SearchResponse {
            query: "q".to_string(),
            ai_summary: String::new(),
            statistics: SearchStatistics {
                total_studies: 0,
                top_organism: String::new(),
                missions: vec![],
                assay_types: vec![],
            },
            records: vec![],
        }
    }

    #[test]
    fn test_ui_state_defaults_to_idle() {
        assert_eq!(UiState::default(), UiState::Idle);
    }

    #[test]
    fn test_ui_state_accessors() {
        let loading = UiState::Loading;
        assert!(loading.is_loading());
        assert!(loading.response().is_none());
        assert!(loading.error_message().is_none());

        let error = UiState::Error {
            message: "HTTP error! status: 500".to_string(),
        };
        assert!(!error.is_loading());
        assert_eq!(error.error_message(), Some("HTTP error! status: 500"));

        let ready = UiState::Ready {
            response: empty_response(),
        };
        assert_eq!(ready.response(), Some(&empty_response()));
    }

    #[test]
    fn test_mode_equality() {
        assert_eq!(Mode::Search, Mode::Search);
        assert_ne!(Mode::Search, Mode::Help);
    }

    #[test]
    fn test_search_outcome_carries_ticket_id() {
        let ticket = SearchTicket {
            id: 7,
            query: "tissue samples spaceflight".to_string(),
        };
        let outcome = SearchOutcome {
            id: ticket.id,
            result: Err(SearchError::Transport("connection refused".to_string())),
        };

        assert_eq!(outcome.id, 7);
        assert!(outcome.result.is_err());
    }
}
