use crate::interactive_ratatui::constants::{
    ALERT_HEIGHT, APP_TAGLINE, APP_TITLE, EMPTY_STATE_HINT, EMPTY_STATE_PROMPT,
    INPUT_STATUS_TEXT, LOADING_STATUS_TEXT, RECORDS_COLUMN_PERCENT, SEARCH_BAR_HEIGHT,
};
use crate::interactive_ratatui::ui::app_state::{AppState, Mode, UiState};
use crate::interactive_ratatui::ui::components::{
    Component,
    help_dialog::HelpDialog,
    insights_panel::InsightsPanel,
    result_list::ResultList,
    search_bar::SearchBar,
    view_layout::{Styles, ViewLayout},
};
use crate::schemas::SearchResponse;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub struct Renderer {
    search_bar: SearchBar,
    result_list: ResultList,
    insights_panel: InsightsPanel,
    help_dialog: HelpDialog,
    // Search id whose response is loaded into the result components
    loaded_search_id: Option<u64>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            result_list: ResultList::new(),
            insights_panel: InsightsPanel::new(),
            help_dialog: HelpDialog::new(),
            loaded_search_id: None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        match state.mode {
            Mode::Search => self.render_search_mode(f, state),
            Mode::Help => self.render_help_mode(f, state),
        }
    }

    fn render_search_mode(&mut self, f: &mut Frame, state: &AppState) {
        let layout = ViewLayout::new(APP_TITLE.to_string())
            .with_subtitle(APP_TAGLINE.to_string())
            .with_status_bar(state.mode == Mode::Search)
            .with_status_text(Self::status_hint(&state.status));

        let area = f.area();
        layout.render(f, area, |f, area| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(SEARCH_BAR_HEIGHT), // Search bar
                    Constraint::Min(0),                    // Body
                ])
                .split(area);

            // Update search bar state
            self.search_bar.set_disabled(state.is_loading());
            self.search_bar.set_spinner_frame(state.spinner_frame());
            self.search_bar.set_message(state.ui.message.clone());
            self.search_bar.render(f, chunks[0]);

            match &state.status {
                UiState::Idle => Self::render_empty_state(f, chunks[1]),
                UiState::Loading => Self::render_loading(f, chunks[1], state),
                UiState::Error { message } => Self::render_alert(f, chunks[1], message),
                UiState::Ready { response } => {
                    self.sync_results(state, response);
                    self.render_results(f, chunks[1]);
                }
            }
        });
    }

    fn render_help_mode(&mut self, f: &mut Frame, state: &AppState) {
        // First render the search mode underneath
        self.render_search_mode(f, state);

        // Then render the help dialog on top
        let area = f.area();
        self.help_dialog.render(f, area);
    }

    fn render_empty_state(f: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(EMPTY_STATE_PROMPT, Styles::value())),
            Line::from(""),
            Line::from(Span::styled(EMPTY_STATE_HINT, Styles::dimmed())),
        ];
        let empty = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(empty, area);
    }

    fn render_loading(f: &mut Frame, area: Rect, state: &AppState) {
        let query = state.search.last_query.as_deref().unwrap_or_default();
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{} Searching NASA space biology data...", state.spinner_frame()),
                Styles::busy(),
            )),
            Line::from(Span::styled(format!("\"{query}\""), Styles::dimmed())),
        ];
        let loading = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(loading, area);
    }

    fn render_alert(f: &mut Frame, area: Rect, message: &str) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(ALERT_HEIGHT), Constraint::Min(0)])
            .split(area);

        let alert = Paragraph::new(vec![
            Line::from(Span::styled("Error", Styles::error())),
            Line::from(Span::styled(message, Style::default().fg(Color::Red))),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: true });
        f.render_widget(alert, chunks[0]);
    }

    fn render_results(&mut self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(RECORDS_COLUMN_PERCENT),
                Constraint::Percentage(100 - RECORDS_COLUMN_PERCENT),
            ])
            .split(area);

        self.result_list.render(f, columns[0]);
        self.insights_panel.render(f, columns[1]);
    }

    /// Result-list hints only make sense while a response is on screen.
    fn status_hint(status: &UiState) -> Option<String> {
        match status {
            UiState::Ready { .. } => None,
            UiState::Loading => Some(LOADING_STATUS_TEXT.to_string()),
            UiState::Idle | UiState::Error { .. } => Some(INPUT_STATUS_TEXT.to_string()),
        }
    }

    /// Bring the result components up to date with `state` without drawing.
    ///
    /// Keys reach the result list between frames, so this must run after
    /// every state change.
    pub fn sync(&mut self, state: &AppState) {
        if let UiState::Ready { response } = &state.status {
            self.sync_results(state, response);
        }
    }

    /// Load a new response into the result components once per search, then
    /// keep the card selection in step with the state.
    fn sync_results(&mut self, state: &AppState, response: &SearchResponse) {
        let search_id = state.search.current_search_id;
        if self.loaded_search_id != Some(search_id) {
            self.result_list
                .set_results(response.records.clone(), response.statistics.total_studies);
            self.insights_panel
                .set_insights(response.ai_summary.clone(), response.statistics.clone());
            self.loaded_search_id = Some(search_id);
        }
        self.result_list
            .set_selected_index(state.search.selected_index);
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_result_list_mut(&mut self) -> &mut ResultList {
        &mut self.result_list
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
