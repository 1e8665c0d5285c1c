use std::sync::Arc;

use crate::api::CatalogBackend;
use crate::interactive::domain::models::{SuggestionRequest, SuggestionResponse};

/// Lookahead queries against the HSN schedule.
pub struct SuggestionService {
    backend: Arc<dyn CatalogBackend>,
}

impl SuggestionService {
    pub fn new(backend: Arc<dyn CatalogBackend>) -> Self {
        Self { backend }
    }

    pub async fn suggest(&self, request: SuggestionRequest) -> SuggestionResponse {
        let query = Some(request.query.as_str()).filter(|q| !q.is_empty());
        let outcome = self.backend.search_hsn(query).await;

        // Failures never reach the user; the list just stays empty.
        if let Err(e) = &outcome {
            tracing::debug!(id = request.id, query = %request.query, error = %e, "suggestion lookup failed");
        }

        SuggestionResponse {
            id: request.id,
            outcome,
        }
    }
}
