pub mod api;
pub mod formatters;
pub mod interactive;
pub mod logging;
pub mod schemas;

use interactive::constants::DEFAULT_DEBOUNCE_MS;

pub use api::{ApiClient, CatalogBackend, DEFAULT_API_URL, RequestError};
pub use formatters::{DescriptionLimit, HsnRow, ProductCard, format_hsn_table, format_product_card};
pub use schemas::{Catalog, HsnRecord, Product, Record};

/// Resolved settings handed from the command line to the library.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub api_url: String,
    pub catalog: Catalog,
    pub debounce_ms: u64,
    pub suggestions_enabled: bool,
    pub verbose: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            catalog: Catalog::Products,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            suggestions_enabled: true,
            verbose: false,
        }
    }
}
