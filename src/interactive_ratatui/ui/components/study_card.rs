use crate::browser::OutboundLink;
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::components::view_layout::Styles;
use crate::interactive_ratatui::ui::events::Message;
use crate::schemas::StudyRecord;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub const LINK_LABEL: &str = "View on NASA OSDR ↗";

/// One study rendered as a card: title, id, a 2x2 field grid and the
/// outbound link. Fields are shown verbatim, empty ones included.
pub struct StudyCard {
    study: StudyRecord,
    selected: bool,
}

impl StudyCard {
    pub fn new(study: StudyRecord) -> Self {
        Self {
            study,
            selected: false,
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn study(&self) -> &StudyRecord {
        &self.study
    }

    /// The card's link always opens in a new browsing context with no
    /// opener access.
    pub fn link(&self) -> OutboundLink {
        OutboundLink::isolated(self.study.source_url.clone())
    }

    /// Grid cells in reading order: (label, value).
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("Organism", self.study.organism.as_str()),
            ("Mission", self.study.mission.as_str()),
            ("Assay Type", self.study.assay_type.as_str()),
            ("PI", self.study.principal_investigator.as_str()),
        ]
    }

    fn field_line<'a>(label: &'static str, value: &'a str) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("{label}: "), Styles::label()),
            Span::styled(value, Styles::value()),
        ])
    }

    fn link_line(&self) -> Line<'_> {
        Line::from(vec![
            Span::styled(LINK_LABEL, Styles::link().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(self.study.source_url.as_str(), Styles::link()),
        ])
    }
}

impl Component for StudyCard {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if self.selected {
                Styles::selected_border()
            } else {
                Styles::dimmed()
            });
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Study id
                Constraint::Length(1), // Organism | Mission
                Constraint::Length(1), // Assay | PI
                Constraint::Length(1), // Link
            ])
            .split(inner);

        let title = Paragraph::new(Line::from(Span::styled(
            self.study.title.as_str(),
            Styles::title(),
        )));
        f.render_widget(title, rows[0]);

        let id = Paragraph::new(Line::from(Span::styled(
            format!("Study ID: {}", self.study.id),
            Styles::dimmed(),
        )));
        f.render_widget(id, rows[1]);

        let fields = self.fields();
        for (row, pair) in fields.chunks(2).enumerate() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rows[2 + row]);
            for (column, &(label, value)) in pair.iter().enumerate() {
                f.render_widget(
                    Paragraph::new(Self::field_line(label, value)),
                    columns[column],
                );
            }
        }

        f.render_widget(Paragraph::new(self.link_line()), rows[4]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::OpenStudy(self.link().url))
            }
            _ => None,
        }
    }
}
