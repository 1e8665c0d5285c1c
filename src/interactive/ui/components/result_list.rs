use crate::formatters::{DescriptionLimit, HsnRow, ProductCard, empty_summary, results_summary};
use crate::interactive::constants::PAGE_SIZE;
use crate::interactive::ui::components::{Component, hsn_table::hsn_table, product_cards::card_lines};
use crate::interactive::ui::events::Message;
use crate::schemas::{Catalog, Record};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, TableState, Wrap},
};

pub struct ResultList {
    records: Vec<Record>,
    records_version: Option<u64>,
    catalog: Catalog,
    selected: usize,
    compact: bool,
    focused: bool,
    is_loading: bool,
    error: Option<String>,
    has_searched: bool,
}

impl Default for ResultList {
    fn default() -> Self {
        Self::new(Catalog::Products)
    }
}

impl ResultList {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            records: Vec::new(),
            records_version: None,
            catalog,
            selected: 0,
            compact: true,
            focused: false,
            is_loading: false,
            error: None,
            has_searched: false,
        }
    }

    pub fn set_results(&mut self, records: Vec<Record>, selected: usize) {
        self.records = records;
        self.records_version = None;
        self.selected = selected.min(self.records.len().saturating_sub(1));
    }

    /// Copies `records` only when `version` differs from the last sync;
    /// the selection is always refreshed.
    pub fn sync_results(&mut self, records: &[Record], version: u64, selected: usize) {
        if self.records_version != Some(version) {
            self.records = records.to_vec();
            self.records_version = Some(version);
        }
        self.selected = selected.min(self.records.len().saturating_sub(1));
    }

    pub fn set_status(&mut self, is_loading: bool, error: Option<String>, has_searched: bool) {
        self.is_loading = is_loading;
        self.error = error;
        self.has_searched = has_searched;
    }

    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    pub fn set_compact(&mut self, compact: bool) {
        self.compact = compact;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_record(&self) -> Option<&Record> {
        self.records.get(self.selected)
    }

    fn description_limit(&self) -> DescriptionLimit {
        if self.compact {
            DescriptionLimit::Compact
        } else {
            DescriptionLimit::Full
        }
    }

    fn block(&self) -> Block<'static> {
        let border = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        Block::default()
            .title("Results")
            .borders(Borders::ALL)
            .border_style(border)
    }

    fn render_notice(&self, f: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
        let notice = Paragraph::new(lines)
            .block(self.block())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(notice, area);
    }

    fn render_cards(&self, f: &mut Frame, area: Rect) {
        let limit = self.description_limit();
        let width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .records
            .iter()
            .enumerate()
            .filter_map(|(i, record)| record.as_product().map(|p| (i, p)))
            .map(|(i, product)| {
                let card = ProductCard::from_product(product, i, limit);
                ListItem::new(card_lines(&card, width))
            })
            .collect();

        let list = List::new(items)
            .block(self.block())
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▸ ");
        let mut state = ListState::default().with_selected(Some(self.selected));
        f.render_stateful_widget(list, area, &mut state);
    }

    fn render_table(&self, f: &mut Frame, area: Rect) {
        let rows: Vec<HsnRow> = self
            .records
            .iter()
            .filter_map(Record::as_hsn)
            .map(HsnRow::from_record)
            .collect();
        let table = hsn_table(&rows).block(self.block());
        let mut state = TableState::default().with_selected(Some(self.selected));
        f.render_stateful_widget(table, area, &mut state);
    }

    fn navigate(&mut self, target: usize) -> Option<Message> {
        if self.records.is_empty() {
            return None;
        }
        let target = target.min(self.records.len() - 1);
        if target == self.selected {
            return None;
        }
        self.selected = target;
        Some(Message::SelectResult(target))
    }
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        if let Some(error) = &self.error {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("Error: {error}"),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
            ];
            self.render_notice(f, area, lines);
            return;
        }

        if self.is_loading {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("Searching {}...", self.catalog.noun(2)),
                    Style::default().fg(Color::Yellow),
                )),
            ];
            self.render_notice(f, area, lines);
            return;
        }

        if !self.has_searched {
            self.render_notice(f, area, vec![]);
            return;
        }

        if self.records.is_empty() {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    empty_summary(self.catalog),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("Try a different search term or browse all {}", self.catalog.noun(2)),
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            self.render_notice(f, area, lines);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let summary = Paragraph::new(Line::from(Span::styled(
            results_summary(self.records.len(), self.catalog),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        f.render_widget(summary, chunks[0]);

        match self.catalog {
            Catalog::Products => self.render_cards(f, chunks[1]),
            Catalog::Hsn => self.render_table(f, chunks[1]),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => self.navigate(self.selected.saturating_sub(1)),
            KeyCode::Down => self.navigate(self.selected + 1),
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                self.navigate(self.selected.saturating_sub(1))
            }
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                self.navigate(self.selected + 1)
            }
            KeyCode::PageUp => self.navigate(self.selected.saturating_sub(PAGE_SIZE)),
            KeyCode::PageDown => self.navigate(self.selected + PAGE_SIZE),
            KeyCode::Home => self.navigate(0),
            KeyCode::End => self.navigate(usize::MAX),
            _ => None,
        }
    }
}
