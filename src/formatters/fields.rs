//! Ordered-fallback accessors for loosely typed product records.
//!
//! The product catalog does not agree on key names: a title may arrive as
//! `title` or `name`, an image as `image`, `imageUrl` or `thumbnail`. Each
//! semantic field has exactly one accessor here. It walks the synonyms in the
//! listed order and returns the first usable value; `null`, empty strings,
//! arrays and objects are skipped so the next synonym gets a chance.

use serde_json::Value;

use super::numbers::plain_number;
use crate::schemas::Product;

pub const ID_KEYS: &[&str] = &["_id", "id"];
pub const TITLE_KEYS: &[&str] = &["title", "name"];
pub const DESCRIPTION_KEYS: &[&str] = &["desc", "description"];
pub const IMAGE_KEYS: &[&str] = &["image", "imageUrl", "thumbnail"];
pub const CATEGORY_KEYS: &[&str] = &["cat", "category"];
pub const BRAND_KEYS: &[&str] = &["brand"];
pub const HSN_KEYS: &[&str] = &["hsn"];
pub const IGST_KEYS: &[&str] = &["igst"];
pub const PRICE_KEYS: &[&str] = &["price"];

/// Text form of a scalar JSON value, or `None` when it carries nothing to show.
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => n.as_f64().map(plain_number),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Numeric form of a JSON value. Numeric strings are accepted.
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// First synonym in `keys` with a displayable value.
pub fn first_text(product: &Product, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| product.get(key))
        .find_map(display_value)
}

/// First synonym in `keys` that is present and not null, read as a number.
///
/// Presence is strict: `0` is a value, not an absence.
pub fn first_number(product: &Product, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .filter_map(|key| product.get(key))
        .filter(|value| !value.is_null())
        .find_map(numeric_value)
}

pub fn id(product: &Product) -> Option<String> {
    first_text(product, ID_KEYS)
}

pub fn title(product: &Product) -> Option<String> {
    first_text(product, TITLE_KEYS)
}

pub fn description(product: &Product) -> Option<String> {
    first_text(product, DESCRIPTION_KEYS)
}

pub fn image(product: &Product) -> Option<String> {
    first_text(product, IMAGE_KEYS)
}

pub fn category(product: &Product) -> Option<String> {
    first_text(product, CATEGORY_KEYS)
}

pub fn brand(product: &Product) -> Option<String> {
    first_text(product, BRAND_KEYS)
}

pub fn hsn(product: &Product) -> Option<String> {
    first_text(product, HSN_KEYS)
}

pub fn igst(product: &Product) -> Option<f64> {
    first_number(product, IGST_KEYS)
}

pub fn price(product: &Product) -> Option<f64> {
    first_number(product, PRICE_KEYS)
}
