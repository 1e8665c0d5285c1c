use crate::formatters::{ImageSlot, ProductCard};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const INDENT: &str = "  ";

/// Terminal lines for one product card, wrapped to `width` columns.
pub fn card_lines(card: &ProductCard, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let mut headline = vec![Span::styled(
        card.title.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(price) = &card.price {
        headline.push(Span::raw("  "));
        headline.push(Span::styled(
            price.clone(),
            Style::default().fg(Color::Green),
        ));
    }
    lines.push(Line::from(headline));

    if let Some(meta) = card.meta_line() {
        lines.push(Line::from(Span::styled(
            format!("{INDENT}{meta}"),
            Style::default().fg(Color::Blue),
        )));
    }

    if let Some(description) = &card.description {
        let body_width = width.saturating_sub(INDENT.len());
        for line in wrap_text(description, body_width) {
            lines.push(Line::from(format!("{INDENT}{line}")));
        }
    }

    let badges = card.tax_badges();
    if !badges.is_empty() {
        let mut spans = vec![Span::raw(INDENT)];
        for (i, badge) in badges.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!("[{badge}]"),
                Style::default().fg(Color::Yellow),
            ));
        }
        lines.push(Line::from(spans));
    }

    let image = match &card.image {
        ImageSlot::Url(url) => format!("{INDENT}▣ {url}"),
        ImageSlot::Placeholder => format!("{INDENT}▢ no image"),
    };
    lines.push(Line::from(Span::styled(
        image,
        Style::default().fg(Color::DarkGray),
    )));

    lines.push(Line::from(""));
    lines
}

pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let text = text.replace('\n', " ");
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();

        if current_width > 0 && current_width + 1 + word_width > max_width {
            lines.push(std::mem::take(&mut current_line));
            current_line.push_str(word);
            current_width = word_width;
        } else {
            if current_width > 0 {
                current_line.push(' ');
                current_width += 1;
            }
            current_line.push_str(word);
            current_width += word_width;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::DescriptionLimit;
    use crate::schemas::Product;
    use serde_json::json;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("small batch cold pressed", 11),
            vec!["small batch", "cold", "pressed"]
        );
        assert_eq!(wrap_text("", 10), vec![String::new()]);
        assert!(wrap_text("anything", 0).is_empty());
    }

    #[test]
    fn test_card_lines_full_card() {
        let product = Product::from_value(json!({
            "name": "Masala Chai",
            "brand": "Chai Point",
            "price": 299,
            "desc": "Spiced tea",
            "hsn": "0902",
            "igst": 5,
            "thumbnail": "https://img.example/chai.png"
        }));
        let card = ProductCard::from_product(&product, 0, DescriptionLimit::Compact);

        let lines: Vec<String> = card_lines(&card, 40).iter().map(line_text).collect();

        assert_eq!(lines[0], "Masala Chai  ₹299");
        assert_eq!(lines[1], "  Chai Point");
        assert_eq!(lines[2], "  Spiced tea");
        assert_eq!(lines[3], "  [HSN: 0902] [GST: 5%]");
        assert_eq!(lines[4], "  ▣ https://img.example/chai.png");
        assert_eq!(lines[5], "");
    }

    #[test]
    fn test_card_lines_minimal_card() {
        let card = ProductCard::from_product(&Product::default(), 0, DescriptionLimit::Compact);

        let lines: Vec<String> = card_lines(&card, 40).iter().map(line_text).collect();

        assert_eq!(lines, vec!["Untitled Product", "  ▢ no image", ""]);
    }
}
