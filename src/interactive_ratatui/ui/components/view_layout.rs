use crate::interactive_ratatui::constants::{HEADER_HEIGHT, RESULTS_STATUS_TEXT};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Page frame: title bar, caller-drawn content, one-line status bar.
pub struct ViewLayout {
    title: String,
    subtitle: Option<String>,
    show_status_bar: bool,
    status_text: Option<String>,
}

impl ViewLayout {
    pub fn new(title: String) -> Self {
        Self {
            title,
            subtitle: None,
            show_status_bar: true,
            status_text: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: String) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn with_status_bar(mut self, show: bool) -> Self {
        self.show_status_bar = show;
        self
    }

    pub fn with_status_text(mut self, text: Option<String>) -> Self {
        self.status_text = text;
        self
    }

    pub fn render<F>(&self, f: &mut Frame, area: Rect, render_content: F)
    where
        F: FnOnce(&mut Frame, Rect),
    {
        let constraints = if self.show_status_bar {
            vec![
                Constraint::Length(HEADER_HEIGHT), // Title bar
                Constraint::Min(0),                // Content
                Constraint::Length(1),             // Status bar
            ]
        } else {
            vec![
                Constraint::Length(HEADER_HEIGHT), // Title bar
                Constraint::Min(0),                // Content
            ]
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        self.render_title_bar(f, chunks[0]);

        render_content(f, chunks[1]);

        if self.show_status_bar && chunks.len() > 2 {
            self.render_status_bar(f, chunks[2]);
        }
    }

    fn render_title_bar(&self, f: &mut Frame, area: Rect) {
        let mut title_lines = vec![Line::from(vec![Span::styled(
            self.title.as_str(),
            Styles::title(),
        )])];

        if let Some(ref subtitle) = self.subtitle {
            title_lines.push(Line::from(Span::styled(subtitle.as_str(), Styles::subtitle())));
        }

        let title_block = Paragraph::new(title_lines)
            .block(Block::default().borders(Borders::BOTTOM))
            .alignment(Alignment::Center);

        f.render_widget(title_block, area);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = self.status_text.as_deref().unwrap_or(RESULTS_STATUS_TEXT);

        let status_bar = Paragraph::new(status_text)
            .style(Styles::dimmed())
            .alignment(Alignment::Center);

        f.render_widget(status_bar, area);
    }
}

// Helper struct for consistent color scheme
pub struct ColorScheme;

impl ColorScheme {
    pub const PRIMARY: Color = Color::Cyan;
    pub const SECONDARY: Color = Color::Yellow;
    pub const ACCENT: Color = Color::Magenta;
    pub const LINK: Color = Color::Blue;
    pub const TEXT: Color = Color::White;
    pub const TEXT_DIM: Color = Color::DarkGray;
    pub const SELECTION: Color = Color::LightBlue;
    pub const ERROR: Color = Color::Red;
}

// Helper struct for consistent styling
pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default()
            .fg(ColorScheme::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn label() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn value() -> Style {
        Style::default()
            .fg(ColorScheme::TEXT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(ColorScheme::TEXT)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn selected_border() -> Style {
        Style::default().fg(ColorScheme::SELECTION)
    }

    pub fn link() -> Style {
        Style::default()
            .fg(ColorScheme::LINK)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn mission_chip() -> Style {
        Style::default().bg(Color::Blue).fg(Color::White)
    }

    pub fn assay_chip() -> Style {
        Style::default().bg(ColorScheme::ACCENT).fg(Color::White)
    }

    pub fn busy() -> Style {
        Style::default()
            .fg(ColorScheme::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(ColorScheme::ERROR)
            .add_modifier(Modifier::BOLD)
    }
}
