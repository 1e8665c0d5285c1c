use super::{fields, numbers};
use crate::schemas::Product;

pub const UNTITLED_PRODUCT: &str = "Untitled Product";
pub const ELLIPSIS: &str = "...";

/// How much of a product description a card shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DescriptionLimit {
    /// Full cards, used by the one-shot output.
    #[default]
    Full,
    /// Dense cards, used by the interactive result list.
    Compact,
}

impl DescriptionLimit {
    pub const fn max_chars(self) -> usize {
        match self {
            DescriptionLimit::Full => 200,
            DescriptionLimit::Compact => 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    Url(String),
    Placeholder,
}

/// Display model of a single product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    /// Stable identity: the record id, or its position when it has none.
    pub key: String,
    pub title: String,
    pub description: Option<String>,
    pub image: ImageSlot,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub hsn: Option<String>,
    /// IGST rate without the `%` suffix.
    pub igst: Option<String>,
    /// Price already formatted as a rupee amount.
    pub price: Option<String>,
}

impl ProductCard {
    pub fn from_product(product: &Product, index: usize, limit: DescriptionLimit) -> Self {
        Self {
            key: fields::id(product).unwrap_or_else(|| index.to_string()),
            title: fields::title(product).unwrap_or_else(|| UNTITLED_PRODUCT.to_string()),
            description: fields::description(product)
                .map(|d| truncate_description(&d, limit.max_chars())),
            image: fields::image(product).map_or(ImageSlot::Placeholder, ImageSlot::Url),
            category: fields::category(product),
            brand: fields::brand(product),
            hsn: fields::hsn(product),
            igst: fields::igst(product).map(numbers::plain_number),
            price: fields::price(product).map(numbers::format_inr),
        }
    }

    /// `brand · category`, whichever of the two are known.
    pub fn meta_line(&self) -> Option<String> {
        match (&self.brand, &self.category) {
            (Some(brand), Some(category)) => Some(format!("{brand} · {category}")),
            (Some(only), None) | (None, Some(only)) => Some(only.clone()),
            (None, None) => None,
        }
    }

    /// Auxiliary tax badges, e.g. `HSN: 2202` and `GST: 18%`.
    pub fn tax_badges(&self) -> Vec<String> {
        let mut badges = Vec::with_capacity(2);
        if let Some(hsn) = &self.hsn {
            badges.push(format!("HSN: {hsn}"));
        }
        if let Some(igst) = &self.igst {
            badges.push(format!("GST: {igst}%"));
        }
        badges
    }
}

/// Cuts `text` to `max_chars` characters and appends `...` when anything was
/// removed. Counting is by `char`, never by byte.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
