use crate::interactive_ratatui::constants::{QUERY_PRESETS, SEARCH_PLACEHOLDER};
use crate::interactive_ratatui::ui::components::view_layout::Styles;
use crate::interactive_ratatui::ui::components::{
    Component, is_exit_prompt, text_input::TextInput,
};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// The query input: a draft line, a submit key and quick-fill presets.
///
/// Owns only its draft. Submitting emits the trimmed query upward and
/// clears the draft; a blank draft is ignored without feedback.
#[derive(Default)]
pub struct SearchBar {
    input: TextInput,
    disabled: bool,
    spinner_frame: &'static str,
    message: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            input: TextInput::new(),
            disabled: false,
            spinner_frame: "",
            message: None,
        }
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn set_spinner_frame(&mut self, frame: &'static str) {
        self.spinner_frame = frame;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn set_draft(&mut self, draft: String) {
        self.input.set_text(draft);
    }

    pub fn draft(&self) -> &str {
        self.input.text()
    }

    /// Fill the draft with a preset query without submitting it.
    pub fn apply_preset(&mut self, index: usize) -> bool {
        match QUERY_PRESETS.get(index) {
            Some((_, query)) => {
                self.input.set_text(query.to_string());
                true
            }
            None => false,
        }
    }

    fn submit(&mut self) -> Option<Message> {
        let query = self.input.text().trim().to_string();
        if query.is_empty() {
            return None;
        }
        self.input.clear();
        Some(Message::SubmitQuery(query))
    }

    fn preset_index(key: &KeyEvent) -> Option<usize> {
        match key.code {
            KeyCode::F(n @ 1..=3) => Some(n as usize - 1),
            KeyCode::Char(c @ '1'..='3') if key.modifiers.contains(KeyModifiers::ALT) => {
                Some(c as usize - '1' as usize)
            }
            _ => None,
        }
    }

    fn title(&self) -> Line<'_> {
        let mut spans = if self.disabled {
            vec![Span::styled(
                format!(" {} Searching... ", self.spinner_frame),
                Styles::busy(),
            )]
        } else {
            vec![Span::styled(" Search ", Styles::title())]
        };
        if let Some(msg) = &self.message {
            let style = if is_exit_prompt(Some(msg.as_str())) {
                Styles::error()
            } else {
                Styles::dimmed()
            };
            spans.push(Span::styled(format!("- {msg} "), style));
        }
        Line::from(spans)
    }

    fn input_line(&self) -> Line<'_> {
        if self.disabled {
            return Line::from(Span::styled(self.input.text(), Styles::dimmed()));
        }
        if self.input.text().is_empty() {
            let mut spans = self.input.render_cursor_spans();
            spans.push(Span::styled(SEARCH_PLACEHOLDER, Styles::dimmed()));
            return Line::from(spans);
        }
        Line::from(self.input.render_cursor_spans())
    }

    fn presets_line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(QUERY_PRESETS.len() * 2);
        for (i, (label, _)) in QUERY_PRESETS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("F{}", i + 1), Styles::label()));
            spans.push(Span::styled(
                format!(" {label} "),
                Style::default().bg(Color::DarkGray).fg(Color::White),
            ));
        }
        Line::from(spans)
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let border_style = if self.disabled {
            Styles::dimmed()
        } else {
            Style::default().fg(Color::Yellow)
        };

        let input = Paragraph::new(self.input_line()).block(
            Block::default()
                .title(self.title())
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        f.render_widget(input, chunks[0]);

        let presets = Paragraph::new(self.presets_line()).alignment(Alignment::Center);
        f.render_widget(presets, chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.disabled {
            return None;
        }

        if let Some(index) = Self::preset_index(&key) {
            self.apply_preset(index);
            return None;
        }

        match key.code {
            KeyCode::Enter => self.submit(),
            _ => {
                self.input.handle_key(key);
                None
            }
        }
    }
}
