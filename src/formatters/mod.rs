//! Pure mapping from catalog records to display models.
//!
//! Nothing in here touches the network or mutable state, so every view
//! (terminal widgets, plain text, JSON) goes through the same field
//! resolution and truncation rules.

pub mod card;
pub mod fields;
pub mod hsn_row;
pub mod numbers;
pub mod text;

#[cfg(test)]
mod card_test;
#[cfg(test)]
mod fields_test;

use crate::schemas::Catalog;

pub use card::{DescriptionLimit, ImageSlot, ProductCard, truncate_description};
pub use hsn_row::HsnRow;
pub use numbers::{format_inr, plain_number};
pub use text::{format_hsn_table, format_product_card};

/// Headline shown above a result set, e.g. `3 products found`.
pub fn results_summary(count: usize, catalog: Catalog) -> String {
    format!("{count} {} found", catalog.noun(count))
}

/// Headline shown when a completed search returned nothing.
pub fn empty_summary(catalog: Catalog) -> String {
    format!("No {} found", catalog.noun(0))
}
