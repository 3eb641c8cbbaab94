use crate::interactive_ratatui::domain::models::SearchOutcome;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // Search events
    SubmitQuery(String),
    SearchCompleted(SearchOutcome),
    SelectStudy(usize),

    // Outbound links
    OpenStudy(String),

    // Mode changes
    ShowHelp,
    CloseHelp,

    // UI events
    Tick,
    SetStatus(String),
    ClearStatus,

    // Terminal events
    Quit,
}
