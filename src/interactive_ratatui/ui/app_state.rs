use crate::browser::OutboundLink;
use crate::interactive_ratatui::constants::*;
use crate::interactive_ratatui::domain::models::{SearchOutcome, SearchTicket};
use crate::interactive_ratatui::ui::commands::Command;
use crate::interactive_ratatui::ui::events::Message;
use crate::search::error::GENERIC_FAILURE_MESSAGE;
use tracing::{debug, warn};

// Re-export Mode and UiState
pub use crate::interactive_ratatui::domain::models::{Mode, UiState};

pub struct AppState {
    pub mode: Mode,
    pub status: UiState,
    pub search: SearchState,
    pub ui: StatusLineState,
}

pub struct SearchState {
    /// Id of the most recently issued request. Outcomes carrying any other
    /// id are stale and dropped.
    pub current_search_id: u64,
    pub last_query: Option<String>,
    pub selected_index: usize,
}

pub struct StatusLineState {
    pub message: Option<String>,
    pub spinner_tick: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Search,
            status: UiState::Idle,
            search: SearchState {
                current_search_id: 0,
                last_query: None,
                selected_index: 0,
            },
            ui: StatusLineState {
                message: None,
                spinner_tick: 0,
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[(self.ui.spinner_tick / SPINNER_TICKS_PER_FRAME) % SPINNER_FRAMES.len()]
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::SubmitQuery(query) => self.submit_query(&query),
            Message::SearchCompleted(outcome) => {
                self.complete_search(outcome);
                Command::None
            }
            Message::SelectStudy(index) => {
                let len = self.status.response().map_or(0, |r| r.records.len());
                if index < len {
                    self.search.selected_index = index;
                }
                Command::None
            }
            Message::OpenStudy(url) => {
                if url.trim().is_empty() {
                    self.ui.message = Some(NO_LINK_MESSAGE.to_string());
                    return Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS);
                }
                match OutboundLink::web(&url) {
                    Some(link) => Command::OpenUrl(link),
                    None => {
                        warn!(%url, "refusing to open non-web study link");
                        self.ui.message = Some(UNSAFE_LINK_MESSAGE.to_string());
                        Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
                    }
                }
            }
            Message::ShowHelp => {
                self.mode = Mode::Help;
                Command::None
            }
            Message::CloseHelp => {
                self.mode = Mode::Search;
                Command::None
            }
            Message::Tick => {
                if self.is_loading() {
                    self.ui.spinner_tick = self.ui.spinner_tick.wrapping_add(1);
                }
                Command::None
            }
            Message::SetStatus(text) => {
                self.ui.message = Some(text);
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::ClearStatus => {
                self.ui.message = None;
                Command::None
            }
            Message::Quit => Command::Quit,
        }
    }

    fn submit_query(&mut self, query: &str) -> Command {
        let query = query.trim();
        if query.is_empty() {
            return Command::None;
        }
        // The input is disabled while loading; this keeps the single
        // in-flight request invariant even if a submission slips through.
        if self.is_loading() {
            debug!(query, "ignoring submission while a search is in flight");
            return Command::None;
        }

        self.search.current_search_id += 1;
        self.search.last_query = Some(query.to_string());
        self.search.selected_index = 0;
        self.status = UiState::Loading;
        self.ui.spinner_tick = 0;

        Command::ExecuteSearch(SearchTicket {
            id: self.search.current_search_id,
            query: query.to_string(),
        })
    }

    fn complete_search(&mut self, outcome: SearchOutcome) {
        if outcome.id != self.search.current_search_id {
            debug!(
                stale_id = outcome.id,
                current_id = self.search.current_search_id,
                "dropping stale search outcome"
            );
            return;
        }

        self.status = match outcome.result {
            Ok(response) => {
                self.search.selected_index = 0;
                UiState::Ready { response }
            }
            Err(e) => {
                let message = e.to_string();
                UiState::Error {
                    message: if message.trim().is_empty() {
                        GENERIC_FAILURE_MESSAGE.to_string()
                    } else {
                        message
                    },
                }
            }
        };
    }
}
