use crate::interactive::constants::{HEADER_HEIGHT, SEARCH_BAR_HEIGHT, STATUS_BAR_HEIGHT};
use crate::interactive::domain::models::Focus;
use crate::interactive::ui::app_state::{AppState, Mode};
use crate::interactive::ui::components::{
    Component, help_dialog::HelpDialog, result_list::ResultList, search_bar::SearchBar,
    suggestion_list::SuggestionList,
};
use crate::schemas::Catalog;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// What a mouse click at a given cell landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    SearchInput,
    /// Inside the suggestion popup; `None` when on its border.
    Suggestion(Option<usize>),
    Results,
    Outside,
}

#[derive(Default)]
struct LastLayout {
    search_bar: Rect,
    suggestions: Option<Rect>,
    results: Rect,
}

pub struct Renderer {
    search_bar: SearchBar,
    suggestion_list: SuggestionList,
    result_list: ResultList,
    help_dialog: HelpDialog,
    layout: LastLayout,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            suggestion_list: SuggestionList::new(),
            result_list: ResultList::default(),
            help_dialog: HelpDialog::new(),
            layout: LastLayout::default(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        self.render_search_mode(f, state);
        if state.mode == Mode::Help {
            self.help_dialog.render(f, f.area());
        }
    }

    fn render_search_mode(&mut self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(f.area());

        self.sync(state);

        f.render_widget(Self::header(state.catalog), chunks[0]);
        self.search_bar.render(f, chunks[1]);
        self.result_list.render(f, chunks[2]);
        f.render_widget(Self::key_hints(state.focus), chunks[3]);

        self.layout.search_bar = chunks[1];
        self.layout.results = chunks[2];
        self.layout.suggestions = None;

        // The popup overlaps the top of the results, like a dropdown.
        if !self.suggestion_list.is_empty() {
            let below = chunks[2];
            let height = self.suggestion_list.height().min(below.height);
            if height > 2 {
                let popup = Rect::new(chunks[1].x, below.y, chunks[1].width, height);
                self.suggestion_list.render(f, popup);
                self.layout.suggestions = Some(popup);
            }
        }
    }

    /// Pushes the state into the components. Runs before every draw and
    /// before key routing, so components never act on stale data.
    pub fn sync(&mut self, state: &AppState) {
        let input_focused = state.focus == Focus::Input;

        self.search_bar.set_query(&state.search.query);
        self.search_bar.set_loading(state.search.is_loading);
        self.search_bar.set_message(state.ui.message.clone());
        self.search_bar.set_catalog(state.catalog);
        self.search_bar.set_focused(input_focused);

        self.suggestion_list
            .set_suggestions(state.suggest.visible(), state.suggest.highlighted);

        self.result_list.set_catalog(state.catalog);
        self.result_list.set_compact(state.ui.compact);
        self.result_list.set_focused(!input_focused);
        self.result_list.set_status(
            state.search.is_loading,
            state.search.error.clone(),
            state.search.has_searched,
        );
        self.result_list.sync_results(
            &state.search.results,
            state.search.results_version,
            state.search.selected_index,
        );
    }

    fn header(catalog: Catalog) -> Paragraph<'static> {
        let subtitle = match catalog {
            Catalog::Products => "Search products by name, brand or category",
            Catalog::Hsn => "Look up HSN codes and GST rates",
        };
        Paragraph::new(vec![Line::from(vec![
            Span::styled(
                "D2CMate",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(subtitle, Style::default().fg(Color::DarkGray)),
        ])])
    }

    fn key_hints(focus: Focus) -> Paragraph<'static> {
        let hints = match focus {
            Focus::Input => "Enter: Search | ↑/↓: Suggestions | Tab: Results | Esc: Close/Exit",
            Focus::Results => "↑/↓: Navigate | /: Search | Ctrl+T: Compact | ?: Help | Esc: Exit",
        };
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray))
    }

    /// Resolves a click against the layout of the last draw.
    pub fn hit_test(&self, column: u16, row: u16) -> HitTarget {
        let position = Position::new(column, row);
        // The popup is drawn on top of the results, so it wins.
        if let Some(popup) = self.layout.suggestions {
            if popup.contains(position) {
                return HitTarget::Suggestion(self.suggestion_list.row_at(popup, column, row));
            }
        }
        if self.layout.search_bar.contains(position) {
            HitTarget::SearchInput
        } else if self.layout.results.contains(position) {
            HitTarget::Results
        } else {
            HitTarget::Outside
        }
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_suggestion_list_mut(&mut self) -> &mut SuggestionList {
        &mut self.suggestion_list
    }

    pub fn get_result_list_mut(&mut self) -> &mut ResultList {
        &mut self.result_list
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
