use std::sync::Arc;

use crate::api::CatalogBackend;
use crate::interactive::domain::models::{SearchRequest, SearchResponse};
use crate::schemas::Catalog;

/// Runs authoritative searches against the configured catalog.
pub struct SearchService {
    backend: Arc<dyn CatalogBackend>,
    catalog: Catalog,
}

impl SearchService {
    pub fn new(backend: Arc<dyn CatalogBackend>, catalog: Catalog) -> Self {
        Self { backend, catalog }
    }

    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    pub async fn search(&self, request: SearchRequest) -> SearchResponse {
        // Empty query means "everything": the parameter is left off.
        let query = Some(request.query.as_str()).filter(|q| !q.is_empty());

        let outcome = self.backend.search(self.catalog, query).await;
        match &outcome {
            Ok(records) => {
                tracing::info!(id = request.id, query = %request.query, count = records.len(), "search completed")
            }
            Err(e) => tracing::warn!(id = request.id, query = %request.query, error = %e, "search failed"),
        }

        SearchResponse {
            id: request.id,
            outcome,
        }
    }
}
