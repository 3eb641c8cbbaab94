use crate::browser::OutboundLink;
use crate::interactive_ratatui::domain::models::SearchTicket;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    ExecuteSearch(SearchTicket),
    OpenUrl(OutboundLink),
    ShowMessage(String),
    ClearMessage,
    ScheduleClearMessage(u64), // delay in milliseconds
    Quit,
}
