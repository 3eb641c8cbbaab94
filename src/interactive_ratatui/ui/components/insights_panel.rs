use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::components::view_layout::Styles;
use crate::interactive_ratatui::ui::events::Message;
use crate::schemas::SearchStatistics;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// AI summary plus the aggregate statistics of one response.
///
/// Tags are shown as chips in the order the service sent them; nothing is
/// sorted, deduplicated or truncated here.
#[derive(Default)]
pub struct InsightsPanel {
    summary: String,
    statistics: Option<SearchStatistics>,
}

impl InsightsPanel {
    pub fn new() -> Self {
        Self {
            summary: String::new(),
            statistics: None,
        }
    }

    pub fn set_insights(&mut self, summary: String, statistics: SearchStatistics) {
        self.summary = summary;
        self.statistics = Some(statistics);
    }

    fn chip_line(tags: &[String], style: Style) -> Line<'_> {
        let mut spans = Vec::with_capacity(tags.len() * 2);
        for (i, tag) in tags.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!(" {tag} "), style));
        }
        Line::from(spans)
    }

    fn stat_line<'a>(label: &'static str, value: String, value_style: Style) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("{label:<14}"), Styles::label()),
            Span::styled(value, value_style),
        ])
    }

    pub fn lines(&self) -> Vec<Line<'_>> {
        let mut lines = vec![
            Line::from(Span::raw(self.summary.as_str())),
            Line::from(""),
            Line::from(Span::styled("Key Statistics", Styles::title())),
        ];

        let Some(stats) = &self.statistics else {
            return lines;
        };

        lines.push(Self::stat_line(
            "Total Studies",
            stats.total_studies.to_string(),
            Style::default().fg(Color::LightBlue),
        ));
        lines.push(Self::stat_line(
            "Top Organism",
            stats.top_organism.clone(),
            Styles::value(),
        ));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Missions", Styles::label())));
        lines.push(Self::chip_line(&stats.missions, Styles::mission_chip()));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Assay Types", Styles::label())));
        lines.push(Self::chip_line(&stats.assay_types, Styles::assay_chip()));
        lines
    }
}

impl Component for InsightsPanel {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let panel = Paragraph::new(self.lines())
            .block(
                Block::default()
                    .title(Span::styled(" AI Overview ", Styles::title()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .style(Styles::normal())
            .wrap(Wrap { trim: false });

        f.render_widget(panel, area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
