use colored::Colorize;

use super::{HsnRow, ImageSlot, ProductCard};

/// Plain-text rendering of a card for the one-shot command line output.
pub fn format_product_card(card: &ProductCard, use_color: bool) -> String {
    let mut lines = Vec::new();

    let title = if use_color {
        card.title.bold().bright_white().to_string()
    } else {
        card.title.clone()
    };
    match &card.price {
        Some(price) if use_color => lines.push(format!("{title}  {}", price.bright_green())),
        Some(price) => lines.push(format!("{title}  {price}")),
        None => lines.push(title),
    }

    if let Some(meta) = card.meta_line() {
        lines.push(if use_color {
            format!("  {}", meta.bright_blue())
        } else {
            format!("  {meta}")
        });
    }

    if let Some(description) = &card.description {
        lines.push(format!("  {description}"));
    }

    let badges = card.tax_badges();
    if !badges.is_empty() {
        let joined = badges
            .iter()
            .map(|b| format!("[{b}]"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(if use_color {
            format!("  {}", joined.bright_yellow())
        } else {
            format!("  {joined}")
        });
    }

    let image = match &card.image {
        ImageSlot::Url(url) => format!("  image: {url}"),
        ImageSlot::Placeholder => "  image: (none)".to_string(),
    };
    lines.push(if use_color {
        image.dimmed().to_string()
    } else {
        image
    });

    lines.join("\n")
}

/// Fixed-column table of HSN rows with a header line.
pub fn format_hsn_table(rows: &[HsnRow], use_color: bool) -> String {
    let mut widths = HsnRow::HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: [&str; 4]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header = format_line(HsnRow::HEADERS);
    let mut lines = vec![if use_color {
        header.bold().to_string()
    } else {
        header
    }];
    lines.extend(rows.iter().map(|row| format_line(row.cells())));
    lines.join("\n")
}
