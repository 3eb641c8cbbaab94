#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::search_bar::*;
    use crate::interactive_ratatui::constants::{EXIT_PROMPT, SEARCH_PLACEHOLDER};
    use crate::interactive_ratatui::ui::events::Message;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: crossterm::event::KeyEventKind::Press,
            state: crossterm::event::KeyEventState::empty(),
        }
    }

    fn create_key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: crossterm::event::KeyEventKind::Press,
            state: crossterm::event::KeyEventState::empty(),
        }
    }

    fn type_text(search_bar: &mut SearchBar, text: &str) {
        for c in text.chars() {
            assert!(search_bar.handle_key(create_key_event(KeyCode::Char(c))).is_none());
        }
    }

    fn render(search_bar: &mut SearchBar, width: u16) -> Buffer {
        let backend = TestBackend::new(width, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                search_bar.render(f, f.area());
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
        let content = buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        content.contains(text)
    }

    /// Index of the first cell where `text` starts (ASCII text only).
    fn find_cell(buffer: &Buffer, text: &str) -> Option<usize> {
        let chars: Vec<String> = text.chars().map(|c| c.to_string()).collect();
        buffer.content.windows(chars.len()).position(|cells| {
            cells
                .iter()
                .zip(&chars)
                .all(|(cell, c)| cell.symbol() == c.as_str())
        })
    }

    #[test]
    fn test_search_bar_creation() {
        let search_bar = SearchBar::new();

        assert_eq!(search_bar.draft(), "");
    }

    #[test]
    fn test_typing_edits_draft_without_emitting() {
        let mut search_bar = SearchBar::new();

        type_text(&mut search_bar, "mouse");

        assert_eq!(search_bar.draft(), "mouse");
    }

    #[test]
    fn test_enter_submits_trimmed_query_and_clears_draft() {
        let mut search_bar = SearchBar::new();
        type_text(&mut search_bar, "  mouse microgravity ISS ");

        let msg = search_bar.handle_key(create_key_event(KeyCode::Enter));

        assert_eq!(
            msg,
            Some(Message::SubmitQuery("mouse microgravity ISS".to_string()))
        );
        assert_eq!(search_bar.draft(), "");
    }

    #[test]
    fn test_blank_draft_is_silently_ignored() {
        let mut search_bar = SearchBar::new();

        assert!(search_bar.handle_key(create_key_event(KeyCode::Enter)).is_none());

        type_text(&mut search_bar, "   ");
        assert!(search_bar.handle_key(create_key_event(KeyCode::Enter)).is_none());
        assert_eq!(search_bar.draft(), "   ");
    }

    #[test]
    fn test_disabled_rejects_every_key() {
        let mut search_bar = SearchBar::new();
        search_bar.set_draft("mouse".to_string());
        search_bar.set_disabled(true);

        assert!(search_bar.handle_key(create_key_event(KeyCode::Char('x'))).is_none());
        assert!(search_bar.handle_key(create_key_event(KeyCode::Backspace)).is_none());
        assert!(search_bar.handle_key(create_key_event(KeyCode::F(1))).is_none());
        assert!(search_bar.handle_key(create_key_event(KeyCode::Enter)).is_none());

        assert_eq!(search_bar.draft(), "mouse");
    }

    #[test]
    fn test_presets_fill_draft_without_submitting() {
        let mut search_bar = SearchBar::new();

        let msg = search_bar.handle_key(create_key_event(KeyCode::F(1)));
        assert!(msg.is_none());
        assert_eq!(search_bar.draft(), "Arabidopsis space radiation");

        let msg = search_bar.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('2'),
            KeyModifiers::ALT,
        ));
        assert!(msg.is_none());
        assert_eq!(search_bar.draft(), "mouse microgravity ISS");

        search_bar.handle_key(create_key_event(KeyCode::F(3)));
        assert_eq!(search_bar.draft(), "tissue samples spaceflight");

        // Out of range presets are not bound.
        search_bar.handle_key(create_key_event(KeyCode::F(4)));
        assert_eq!(search_bar.draft(), "tissue samples spaceflight");
        assert!(!search_bar.apply_preset(3));
    }

    #[test]
    fn test_preset_then_enter_submits_preset() {
        let mut search_bar = SearchBar::new();
        search_bar.handle_key(create_key_event(KeyCode::F(2)));

        let msg = search_bar.handle_key(create_key_event(KeyCode::Enter));

        assert_eq!(
            msg,
            Some(Message::SubmitQuery("mouse microgravity ISS".to_string()))
        );
    }

    #[test]
    fn test_render_idle_shows_label_placeholder_and_presets() {
        let mut search_bar = SearchBar::new();

        let buffer = render(&mut search_bar, 120);

        assert!(buffer_contains(&buffer, "Search"));
        assert!(!buffer_contains(&buffer, "Searching..."));
        assert!(buffer_contains(&buffer, SEARCH_PLACEHOLDER));
        assert!(buffer_contains(&buffer, "Arabidopsis radiation"));
        assert!(buffer_contains(&buffer, "Mouse microgravity"));
        assert!(buffer_contains(&buffer, "Tissue samples"));
    }

    #[test]
    fn test_render_disabled_shows_busy_indicator() {
        let mut search_bar = SearchBar::new();
        search_bar.set_disabled(true);
        search_bar.set_spinner_frame("⠋");

        let buffer = render(&mut search_bar, 120);

        assert!(buffer_contains(&buffer, "Searching..."));
        assert!(buffer_contains(&buffer, "⠋"));
    }

    #[test]
    fn test_render_message_in_title() {
        let mut search_bar = SearchBar::new();
        search_bar.set_message(Some("Press Ctrl+C again to exit".to_string()));

        let buffer = render(&mut search_bar, 120);

        assert!(buffer_contains(&buffer, "Press Ctrl+C again to exit"));
    }

    #[test]
    fn test_exit_prompt_stands_out_from_other_messages() {
        let mut search_bar = SearchBar::new();
        search_bar.set_message(Some(EXIT_PROMPT.to_string()));
        let buffer = render(&mut search_bar, 120);
        let index = find_cell(&buffer, EXIT_PROMPT).unwrap();
        assert_eq!(buffer.content[index].fg, Color::Red);

        search_bar.set_message(Some("Opened in browser".to_string()));
        let buffer = render(&mut search_bar, 120);
        let index = find_cell(&buffer, "Opened in browser").unwrap();
        assert_eq!(buffer.content[index].fg, Color::DarkGray);
    }
}
