use crate::interactive::constants::HELP_DIALOG_MAX_WIDTH;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(vec![Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )])
    }

    fn get_help_text() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                "D2CMate Search - Interactive Mode",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Self::section("Search Box:"),
            Line::from("  Type        - Edit query (HSN suggestions appear as you type)"),
            Line::from("  Enter       - Search (or pick the highlighted suggestion)"),
            Line::from("  ↑/↓         - Move through suggestions"),
            Line::from("  Esc         - Hide suggestions, then quit"),
            Line::from("  Tab / ↓     - Jump to results"),
            Line::from(""),
            Self::section("Results:"),
            Line::from("  ↑/↓ PgUp/PgDn Home/End - Navigate"),
            Line::from("  /           - Back to the search box"),
            Line::from("  Ctrl+T      - Toggle compact cards"),
            Line::from("  ?           - Show this help"),
            Line::from(""),
            Self::section("Anywhere:"),
            Line::from("  Click       - Focus input, pick a suggestion, or dismiss"),
            Line::from("  Ctrl+C x2   - Exit"),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]
    }

    /// Centered rectangle the dialog occupies inside `area`.
    pub fn dialog_area(area: Rect) -> Rect {
        let lines = Self::get_help_text().len() as u16;
        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(4));
        let height = (lines + 2).min(area.height.saturating_sub(2));
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width, height)
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let dialog_area = Self::dialog_area(area);

        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(Self::get_help_text())
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        Some(Message::CloseHelp)
    }
}
