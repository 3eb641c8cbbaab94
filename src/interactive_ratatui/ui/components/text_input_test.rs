#[cfg(test)]
mod tests {
    use super::super::text_input::TextInput;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

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

    fn ctrl(c: char) -> KeyEvent {
        create_key_event_with_modifiers(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_text_input_creation() {
        let input = TextInput::new();
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor_position(), 0);
    }

    #[test]
    fn test_set_text_moves_cursor_to_end() {
        let mut input = TextInput::new();
        input.set_text("mouse bone".to_string());
        assert_eq!(input.text(), "mouse bone");
        assert_eq!(input.cursor_position(), 10);
    }

    #[test]
    fn test_character_input() {
        let mut input = TextInput::new();

        assert!(input.handle_key(create_key_event(KeyCode::Char('I'))));
        assert!(input.handle_key(create_key_event(KeyCode::Char('S'))));
        assert!(input.handle_key(create_key_event(KeyCode::Char('S'))));

        assert_eq!(input.text(), "ISS");
        assert_eq!(input.cursor_position(), 3);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = TextInput::new();
        input.set_text("rodent".to_string());

        assert!(input.handle_key(create_key_event(KeyCode::Backspace)));
        assert_eq!(input.text(), "roden");

        input.handle_key(create_key_event(KeyCode::Home));
        assert!(!input.handle_key(create_key_event(KeyCode::Backspace)));
        assert!(input.handle_key(create_key_event(KeyCode::Delete)));
        assert_eq!(input.text(), "oden");
        assert_eq!(input.cursor_position(), 0);

        input.handle_key(create_key_event(KeyCode::End));
        assert!(!input.handle_key(create_key_event(KeyCode::Delete)));
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextInput::new();
        input.set_text("mose".to_string());
        input.set_cursor_position(2);

        input.handle_key(create_key_event(KeyCode::Char('u')));

        assert_eq!(input.text(), "mouse");
        assert_eq!(input.cursor_position(), 3);
    }

    #[test]
    fn test_cursor_movement_is_clamped() {
        let mut input = TextInput::new();
        input.set_text("ab".to_string());

        input.handle_key(create_key_event(KeyCode::Right));
        assert_eq!(input.cursor_position(), 2);

        input.handle_key(create_key_event(KeyCode::Left));
        input.handle_key(create_key_event(KeyCode::Left));
        input.handle_key(create_key_event(KeyCode::Left));
        assert_eq!(input.cursor_position(), 0);

        input.set_cursor_position(99);
        assert_eq!(input.cursor_position(), 2);
    }

    #[test]
    fn test_emacs_bindings() {
        let mut input = TextInput::new();
        input.set_text("space radiation plants".to_string());

        assert!(input.handle_key(ctrl('w')));
        assert_eq!(input.text(), "space radiation ");

        input.handle_key(ctrl('a'));
        assert_eq!(input.cursor_position(), 0);
        assert!(input.handle_key(ctrl('d')));
        assert_eq!(input.text(), "pace radiation ");

        input.handle_key(ctrl('e'));
        assert!(input.handle_key(ctrl('h')));
        assert_eq!(input.text(), "pace radiation");

        input.set_cursor_position(4);
        assert!(input.handle_key(ctrl('k')));
        assert_eq!(input.text(), "pace");

        assert!(input.handle_key(ctrl('u')));
        assert_eq!(input.text(), "");
        assert!(!input.handle_key(ctrl('u')));
    }

    #[test]
    fn test_word_movement() {
        let mut input = TextInput::new();
        input.set_text("tissue samples spaceflight".to_string());

        let alt = |c| create_key_event_with_modifiers(KeyCode::Char(c), KeyModifiers::ALT);

        assert!(!input.handle_key(alt('b')));
        assert_eq!(input.cursor_position(), 15);
        input.handle_key(alt('b'));
        assert_eq!(input.cursor_position(), 7);
        input.handle_key(alt('f'));
        assert_eq!(input.cursor_position(), 15);
        assert_eq!(input.text(), "tissue samples spaceflight");
    }

    #[test]
    fn test_unicode_editing() {
        let mut input = TextInput::new();
        input.set_text("µg→ISS".to_string());
        input.set_cursor_position(2);

        assert!(input.handle_key(create_key_event(KeyCode::Delete)));
        assert_eq!(input.text(), "µgISS");

        assert!(input.handle_key(create_key_event(KeyCode::Backspace)));
        assert_eq!(input.text(), "µISS");
        assert_eq!(input.cursor_position(), 1);
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new();
        input.set_text("query".to_string());
        input.clear();
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor_position(), 0);
    }

    #[test]
    fn test_render_cursor_spans() {
        let mut input = TextInput::new();
        let spans = input.render_cursor_spans();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, " ");

        input.set_text("abc".to_string());
        let spans = input.render_cursor_spans();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "abc");

        input.set_cursor_position(1);
        let spans = input.render_cursor_spans();
        let contents: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(contents, vec!["a", "b", "c"]);
    }
}
