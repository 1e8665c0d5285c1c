use crate::interactive::ui::components::{Component, is_exit_prompt};
use crate::interactive::ui::events::Message;
use crate::schemas::Catalog;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor_position: usize,
    is_loading: bool,
    focused: bool,
    message: Option<String>,
    catalog: Catalog,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            cursor_position: 0,
            is_loading: false,
            focused: true,
            message: None,
            catalog: Catalog::Products,
        }
    }

    /// Replaces the text. The cursor only jumps to the end when the text
    /// actually changed, so redraws don't disturb editing.
    pub fn set_query(&mut self, query: &str) {
        if self.query != query {
            self.query = query.to_string();
            self.cursor_position = self.query.chars().count();
        }
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    pub fn get_query(&self) -> &str {
        &self.query
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    fn placeholder(&self) -> &'static str {
        match self.catalog {
            Catalog::Products => "Search products, brands, categories...",
            Catalog::Hsn => "Search HSN codes or descriptions...",
        }
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }

    /// Find the previous word boundary from the given position
    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| c.is_whitespace()) {
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !c.is_whitespace()) {
            pos -= 1;
        }

        pos
    }

    /// Find the next word boundary from the given position
    fn find_next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;
        let len = chars.len();

        while pos < len && chars.get(pos).is_some_and(|c| !c.is_whitespace()) {
            pos += 1;
        }
        while pos < len && chars.get(pos).is_some_and(|c| c.is_whitespace()) {
            pos += 1;
        }

        pos
    }

    /// Delete from start position to end position and return if query changed
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.query.chars().count() {
            return false;
        }

        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        self.query.drain(byte_start..byte_end);
        self.cursor_position = start;
        true
    }

    fn changed(&self) -> Option<Message> {
        Some(Message::QueryChanged(self.query.clone()))
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);

        let input_text = if self.query.is_empty() && !self.focused {
            vec![Span::styled(
                self.placeholder(),
                Style::default().fg(Color::DarkGray),
            )]
        } else if self.query.is_empty() {
            vec![
                Span::styled(" ", cursor_style),
                Span::styled(self.placeholder(), Style::default().fg(Color::DarkGray)),
            ]
        } else if !self.focused {
            vec![Span::raw(self.query.as_str())]
        } else if self.cursor_position < self.query.chars().count() {
            let before: String = self.query.chars().take(self.cursor_position).collect();
            let at: String = self
                .query
                .chars()
                .nth(self.cursor_position)
                .map(String::from)
                .unwrap_or_else(|| " ".to_string());
            let after: String = self.query.chars().skip(self.cursor_position + 1).collect();

            vec![
                Span::raw(before),
                Span::styled(at, cursor_style),
                Span::raw(after),
            ]
        } else {
            vec![Span::raw(self.query.as_str()), Span::styled(" ", cursor_style)]
        };

        let mut title = "Search".to_string();
        if self.is_loading {
            title.push_str(" - [searching...]");
        } else if let Some(msg) = &self.message {
            title.push_str(&format!(" - {msg}"));
        }

        let title_style = if is_exit_prompt(&self.message) {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let input = Paragraph::new(Line::from(input_text)).block(
            Block::default()
                .title(Span::styled(title, title_style))
                .borders(Borders::ALL)
                .border_style(border_style),
        );

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        // Handle Control key combinations
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                // Ctrl+A - Move cursor to beginning of line
                KeyCode::Char('a') => self.cursor_position = 0,
                // Ctrl+E - Move cursor to end of line
                KeyCode::Char('e') => self.cursor_position = self.query.chars().count(),
                // Ctrl+B - Move cursor backward one character
                KeyCode::Char('b') => self.cursor_position = self.cursor_position.saturating_sub(1),
                // Ctrl+F - Move cursor forward one character
                KeyCode::Char('f') => {
                    if self.cursor_position < self.query.chars().count() {
                        self.cursor_position += 1;
                    }
                }
                // Ctrl+H - Delete character before cursor (same as backspace)
                KeyCode::Char('h') => {
                    if self.cursor_position > 0
                        && self.delete_range(self.cursor_position - 1, self.cursor_position)
                    {
                        return self.changed();
                    }
                }
                // Ctrl+D - Delete character under cursor
                KeyCode::Char('d') => {
                    if self.delete_range(self.cursor_position, self.cursor_position + 1) {
                        return self.changed();
                    }
                }
                // Ctrl+W - Delete word before cursor
                KeyCode::Char('w') => {
                    let new_pos = self.find_prev_word_boundary(self.cursor_position);
                    if self.delete_range(new_pos, self.cursor_position) {
                        return self.changed();
                    }
                }
                // Ctrl+U - Delete from cursor to beginning of line
                KeyCode::Char('u') => {
                    if self.delete_range(0, self.cursor_position) {
                        return self.changed();
                    }
                }
                // Ctrl+K - Delete from cursor to end of line
                KeyCode::Char('k') => {
                    let len = self.query.chars().count();
                    if self.delete_range(self.cursor_position, len) {
                        return self.changed();
                    }
                }
                _ => {}
            }
            return None;
        }

        // Handle Alt key combinations
        if key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                KeyCode::Char('b') => {
                    self.cursor_position = self.find_prev_word_boundary(self.cursor_position);
                }
                KeyCode::Char('f') => {
                    self.cursor_position = self.find_next_word_boundary(self.cursor_position);
                }
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Char(c) => {
                let byte_pos = self.byte_offset(self.cursor_position);
                self.query.insert(byte_pos, c);
                self.cursor_position += 1;
                self.changed()
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0
                    && self.delete_range(self.cursor_position - 1, self.cursor_position)
                {
                    self.changed()
                } else {
                    None
                }
            }
            KeyCode::Delete => {
                if self.delete_range(self.cursor_position, self.cursor_position + 1) {
                    self.changed()
                } else {
                    None
                }
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if self.cursor_position < self.query.chars().count() {
                    self.cursor_position += 1;
                }
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.query.chars().count();
                None
            }
            _ => None,
        }
    }
}
