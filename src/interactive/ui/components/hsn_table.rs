use crate::formatters::HsnRow;
use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    widgets::{Cell, Row, Table},
};

pub const COLUMN_WIDTHS: [Constraint; 4] = [
    Constraint::Length(6),
    Constraint::Length(12),
    Constraint::Min(20),
    Constraint::Length(9),
];

/// Fixed four-column table: id, code, description, rate.
pub fn hsn_table(rows: &[HsnRow]) -> Table<'static> {
    let header = Row::new(HsnRow::HEADERS.map(Cell::from))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let body = rows.iter().map(|row| {
        Row::new(vec![
            Cell::from(row.id.clone()),
            Cell::from(row.hsn_code.clone()).style(Style::default().fg(Color::Yellow)),
            Cell::from(row.description.clone()),
            Cell::from(row.gst_rate.clone()).style(Style::default().fg(Color::Green)),
        ])
    });

    Table::new(body, COLUMN_WIDTHS)
        .header(header)
        .column_spacing(1)
        .row_highlight_style(Style::default().bg(Color::DarkGray))
}
