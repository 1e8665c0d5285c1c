//! HTTP access to the D2CMate search API.
//!
//! Two endpoints are used: `/search` (products, body is a bare array) and
//! `/hsn` (tax schedule, body is a `{ "data": [...] }` envelope). Both are
//! queried with GET and a single optional free-text parameter; omitting the
//! parameter asks the server for the unfiltered collection.

pub mod client;
pub mod error;

#[cfg(test)]
mod client_test;

use async_trait::async_trait;

use crate::schemas::{Catalog, HsnRecord, Product, Record};

pub use client::{ApiClient, DEFAULT_API_URL};
pub use error::RequestError;

/// The remote catalog as seen by the search and suggestion services.
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    async fn search_products(&self, query: Option<&str>) -> Result<Vec<Product>, RequestError>;

    async fn search_hsn(&self, query: Option<&str>) -> Result<Vec<HsnRecord>, RequestError>;

    async fn search(
        &self,
        catalog: Catalog,
        query: Option<&str>,
    ) -> Result<Vec<Record>, RequestError> {
        match catalog {
            Catalog::Products => Ok(self
                .search_products(query)
                .await?
                .into_iter()
                .map(Record::Product)
                .collect()),
            Catalog::Hsn => Ok(self
                .search_hsn(query)
                .await?
                .into_iter()
                .map(Record::Hsn)
                .collect()),
        }
    }
}
