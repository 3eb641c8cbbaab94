pub mod help_dialog;
pub mod insights_panel;
pub mod result_list;
pub mod search_bar;
pub mod study_card;
pub mod text_input;
pub mod view_layout;

#[cfg(test)]
mod search_bar_test;
#[cfg(test)]
mod text_input_test;

use crate::interactive_ratatui::constants::EXIT_PROMPT;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

/// True while the status line is asking for a second Ctrl+C.
pub fn is_exit_prompt(message: Option<&str>) -> bool {
    message == Some(EXIT_PROMPT)
}
