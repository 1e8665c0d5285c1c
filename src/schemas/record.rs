use super::{HsnRecord, Product};
use serde::Serialize;

/// Which remote collection backs an authoritative search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Catalog {
    /// Free-text product search (`/search`), shown as cards.
    #[default]
    Products,
    /// HSN code search (`/hsn`), shown as a table.
    Hsn,
}

impl Catalog {
    /// Noun used in result summaries, pluralized for `count`.
    pub fn noun(self, count: usize) -> &'static str {
        match (self, count == 1) {
            (Catalog::Products, true) => "product",
            (Catalog::Products, false) => "products",
            (Catalog::Hsn, true) => "HSN code",
            (Catalog::Hsn, false) => "HSN codes",
        }
    }
}

/// One entry of the main result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Product(Product),
    Hsn(HsnRecord),
}

impl Record {
    pub fn as_product(&self) -> Option<&Product> {
        match self {
            Record::Product(product) => Some(product),
            Record::Hsn(_) => None,
        }
    }

    pub fn as_hsn(&self) -> Option<&HsnRecord> {
        match self {
            Record::Hsn(record) => Some(record),
            Record::Product(_) => None,
        }
    }
}
