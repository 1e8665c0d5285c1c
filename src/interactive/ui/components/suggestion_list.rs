use crate::formatters::plain_number;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crate::schemas::HsnRecord;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

/// Autocomplete popup drawn under the search bar.
#[derive(Default)]
pub struct SuggestionList {
    suggestions: Vec<HsnRecord>,
    highlighted: Option<usize>,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_suggestions(&mut self, suggestions: &[HsnRecord], highlighted: Option<usize>) {
        self.suggestions = suggestions.to_vec();
        self.highlighted = highlighted.filter(|&i| i < self.suggestions.len());
    }

    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// Popup height including borders.
    pub fn height(&self) -> u16 {
        self.suggestions.len() as u16 + 2
    }

    /// Index of the suggestion drawn at (`column`, `row`) inside `area`.
    pub fn row_at(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        let first_row = area.y + 1;
        if row < first_row {
            return None;
        }
        let index = (row - first_row) as usize;
        (index < self.suggestions.len()).then_some(index)
    }

    fn item(record: &HsnRecord) -> ListItem<'static> {
        ListItem::new(Line::from(vec![
            Span::styled(
                format!("{:<10}", record.hsn_code),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(record.description.clone()),
            Span::styled(
                format!("  {}%", plain_number(record.gst_rate)),
                Style::default().fg(Color::DarkGray),
            ),
        ]))
    }
}

impl Component for SuggestionList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        if self.suggestions.is_empty() {
            return;
        }

        let items: Vec<ListItem> = self.suggestions.iter().map(Self::item).collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Suggestions")
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray));

        let mut state = ListState::default().with_selected(self.highlighted);
        f.render_widget(Clear, area);
        f.render_stateful_widget(list, area, &mut state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Down => Some(Message::HighlightNextSuggestion),
            KeyCode::Up => Some(Message::HighlightPreviousSuggestion),
            KeyCode::Enter => self.highlighted.map(Message::SelectSuggestion),
            KeyCode::Esc => Some(Message::DismissSuggestions),
            _ => None,
        }
    }
}
