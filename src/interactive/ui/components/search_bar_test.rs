#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::search_bar::*;
    use crate::interactive::ui::events::Message;
    use crate::schemas::Catalog;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn create_key_event(code: KeyCode) -> KeyEvent {
        create_key_event_with_modifiers(code, KeyModifiers::empty())
    }

    fn create_key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: crossterm::event::KeyEventKind::Press,
            state: crossterm::event::KeyEventState::empty(),
        }
    }

    fn render_to_string(search_bar: &mut SearchBar) -> String {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| search_bar.render(f, f.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn buffer_to_string(buffer: &Buffer) -> String {
        let mut output = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                output.push_str(buffer.cell((x, y)).unwrap().symbol());
            }
            output.push('\n');
        }
        output
    }

    #[test]
    fn test_character_input() {
        let mut search_bar = SearchBar::new();

        let msg = search_bar.handle_key(create_key_event(KeyCode::Char('t')));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "t"));

        let msg = search_bar.handle_key(create_key_event(KeyCode::Char('e')));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "te"));

        assert_eq!(search_bar.get_query(), "te");
    }

    #[test]
    fn test_backspace() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("chai");

        let msg = search_bar.handle_key(create_key_event(KeyCode::Backspace));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "cha"));

        search_bar.set_query("");
        let msg = search_bar.handle_key(create_key_event(KeyCode::Backspace));
        assert!(msg.is_none());
    }

    #[test]
    fn test_insert_in_middle_with_multibyte() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("₹99");
        search_bar.handle_key(create_key_event(KeyCode::Left));
        search_bar.handle_key(create_key_event(KeyCode::Left));

        let msg = search_bar.handle_key(create_key_event(KeyCode::Char('1')));

        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "₹199"));
        assert_eq!(search_bar.cursor_position(), 2);
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("milk");
        search_bar.handle_key(create_key_event(KeyCode::Home));

        let msg = search_bar.handle_key(create_key_event(KeyCode::Delete));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "ilk"));

        search_bar.handle_key(create_key_event(KeyCode::End));
        assert!(search_bar.handle_key(create_key_event(KeyCode::Delete)).is_none());
    }

    #[test]
    fn test_ctrl_w_deletes_previous_word() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("green tea ");

        let msg = search_bar.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('w'),
            KeyModifiers::CONTROL,
        ));

        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "green "));
    }

    #[test]
    fn test_ctrl_u_and_ctrl_k() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("cold brew");
        search_bar.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('b'),
            KeyModifiers::ALT,
        ));
        assert_eq!(search_bar.cursor_position(), 5);

        let msg = search_bar.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('k'),
            KeyModifiers::CONTROL,
        ));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "cold "));

        let msg = search_bar.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('u'),
            KeyModifiers::CONTROL,
        ));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q.is_empty()));
    }

    #[test]
    fn test_control_keys_do_not_insert() {
        let mut search_bar = SearchBar::new();
        let msg = search_bar.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('x'),
            KeyModifiers::CONTROL,
        ));
        assert!(msg.is_none());
        assert_eq!(search_bar.get_query(), "");
    }

    #[test]
    fn test_set_query_keeps_cursor_when_unchanged() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("2202");
        search_bar.handle_key(create_key_event(KeyCode::Home));

        search_bar.set_query("2202");
        assert_eq!(search_bar.cursor_position(), 0);

        search_bar.set_query("22021010");
        assert_eq!(search_bar.cursor_position(), 8);
    }

    #[test]
    fn test_render_placeholder_per_catalog() {
        let mut search_bar = SearchBar::new();
        search_bar.set_focused(false);
        assert!(render_to_string(&mut search_bar).contains("Search products, brands"));

        search_bar.set_catalog(Catalog::Hsn);
        assert!(render_to_string(&mut search_bar).contains("Search HSN codes"));
    }

    #[test]
    fn test_render_loading_title() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("tea");
        search_bar.set_loading(true);

        let content = render_to_string(&mut search_bar);
        assert!(content.contains("[searching...]"));
        assert!(content.contains("tea"));
    }
}
