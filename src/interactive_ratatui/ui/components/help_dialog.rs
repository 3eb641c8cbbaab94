use crate::interactive_ratatui::constants::{
    APP_TITLE, HELP_DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH, QUERY_PRESETS,
};
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(vec![Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )])
    }

    pub fn get_help_text() -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(vec![Span::styled(
                format!("{APP_TITLE} - Interactive Mode"),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Self::section("Search:"),
            Line::from("  Type        - Edit the query"),
            Line::from("  Enter       - Run the search"),
            Line::from("  Ctrl+U/K/W  - Delete to start / to end / word"),
            Line::from("  Ctrl+A/E    - Jump to start / end of the query"),
            Line::from(""),
            Self::section("Quick-fill:"),
        ];

        for (i, (label, query)) in QUERY_PRESETS.iter().enumerate() {
            lines.push(Line::from(format!(
                "  F{n} / Alt+{n} - {label} (\"{query}\")",
                n = i + 1
            )));
        }

        lines.extend([
            Line::from(""),
            Self::section("Results:"),
            Line::from("  ↑/↓         - Select a study"),
            Line::from("  PgUp/PgDn   - Move by a page"),
            Line::from("  Home/End    - First / last study (empty query)"),
            Line::from("  Ctrl+Home/End - First / last study"),
            Line::from("  Ctrl+O      - Open the selected study in the browser"),
            Line::from(""),
            Self::section("General:"),
            Line::from("  ?           - Show this help (empty query)"),
            Line::from("  Esc         - Clear the query, or quit when empty"),
            Line::from("  Ctrl+C (x2) - Exit"),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]);
        lines
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::get_help_text();

        // Calculate dimensions for the help dialog
        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(HELP_DIALOG_MARGIN));
        let height =
            (help_text.len() as u16 + 2).min(area.height.saturating_sub(HELP_DIALOG_MARGIN));

        // Center the dialog
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;

        let dialog_area = Rect::new(x, y, width, height);

        // Clear the area behind the dialog
        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // Any key closes the help dialog
        Some(Message::CloseHelp)
    }
}
