use crate::formatter::NO_RESULTS_MESSAGE;
use crate::interactive_ratatui::constants::{PAGE_SIZE, STUDY_CARD_HEIGHT};
use crate::interactive_ratatui::ui::components::{
    Component, study_card::StudyCard, view_layout::Styles,
};
use crate::interactive_ratatui::ui::events::Message;
use crate::schemas::StudyRecord;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Column of study cards under a "Studies Found (N)" header.
#[derive(Default)]
pub struct ResultList {
    records: Vec<StudyRecord>,
    total: u64,
    selected_index: usize,
    scroll_offset: usize,
}

impl ResultList {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            selected_index: 0,
            scroll_offset: 0,
        }
    }

    /// `total` is the service-reported count and is shown as-is, even when it
    /// disagrees with the number of records.
    pub fn set_results(&mut self, records: Vec<StudyRecord>, total: u64) {
        self.records = records;
        self.total = total;
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.records.len() {
            self.selected_index = index;
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn selected_record(&self) -> Option<&StudyRecord> {
        self.records.get(self.selected_index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn title(&self) -> String {
        format!("Studies Found ({})", self.total)
    }

    fn move_to(&mut self, index: usize) -> bool {
        if self.is_empty() {
            return false;
        }
        let index = index.min(self.len() - 1);
        if index == self.selected_index() {
            return false;
        }
        self.selected_index = index;
        true
    }

    fn move_up(&mut self) -> bool {
        self.move_to(self.selected_index.saturating_sub(1))
    }

    fn move_down(&mut self) -> bool {
        self.move_to(self.selected_index + 1)
    }

    fn page_up(&mut self) -> bool {
        self.move_to(self.selected_index.saturating_sub(PAGE_SIZE))
    }

    fn page_down(&mut self) -> bool {
        self.move_to(self.selected_index + PAGE_SIZE)
    }

    fn move_to_start(&mut self) -> bool {
        self.move_to(0)
    }

    fn move_to_end(&mut self) -> bool {
        self.move_to(self.len().saturating_sub(1))
    }

    /// Keep the selected card inside the window of `visible_count` cards.
    pub fn adjust_scroll_offset(&mut self, visible_count: usize) {
        let visible_count = visible_count.max(1);
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible_count {
            self.scroll_offset = self.selected_index + 1 - visible_count;
        }
    }

    fn selection_message(&self, moved: bool) -> Option<Message> {
        moved.then_some(Message::SelectStudy(self.selected_index))
    }
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(Span::styled(format!(" {} ", self.title()), Styles::title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));
        let inner = block.inner(area);
        f.render_widget(block, area);

        if self.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                NO_RESULTS_MESSAGE,
                Styles::dimmed(),
            )))
            .alignment(Alignment::Center);
            f.render_widget(empty, inner);
            return;
        }

        let visible_count = (inner.height / STUDY_CARD_HEIGHT).max(1) as usize;
        self.adjust_scroll_offset(visible_count);

        let start = self.scroll_offset();
        let end = (start + visible_count).min(self.len());
        let mut y = inner.y;
        for index in start..end {
            let remaining = inner.bottom().saturating_sub(y);
            if remaining == 0 {
                break;
            }
            let card_area = Rect::new(inner.x, y, inner.width, STUDY_CARD_HEIGHT.min(remaining));
            let mut card = StudyCard::new(self.records[index].clone())
                .with_selected(index == self.selected_index());
            card.render(f, card_area);
            y += STUDY_CARD_HEIGHT;
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => {
                let moved = self.move_up();
                self.selection_message(moved)
            }
            KeyCode::Down => {
                let moved = self.move_down();
                self.selection_message(moved)
            }
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                let moved = self.move_up();
                self.selection_message(moved)
            }
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                let moved = self.move_down();
                self.selection_message(moved)
            }
            KeyCode::PageUp => {
                let moved = self.page_up();
                self.selection_message(moved)
            }
            KeyCode::PageDown => {
                let moved = self.page_down();
                self.selection_message(moved)
            }
            KeyCode::Home => {
                let moved = self.move_to_start();
                self.selection_message(moved)
            }
            KeyCode::End => {
                let moved = self.move_to_end();
                self.selection_message(moved)
            }
            KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let record = self.selected_record()?.clone();
                StudyCard::new(record).handle_key(key)
            }
            _ => None,
        }
    }
}
