use async_trait::async_trait;
use reqwest::{Client, header::CACHE_CONTROL};
use serde::de::DeserializeOwned;

use super::{CatalogBackend, RequestError};
use crate::schemas::{HsnEnvelope, HsnRecord, Product};

pub const DEFAULT_API_URL: &str = "https://d2cmate-backend.onrender.com/api";

const PRODUCT_ENDPOINT: &str = "/search";
const PRODUCT_QUERY_PARAM: &str = "q";
const HSN_ENDPOINT: &str = "/hsn";
const HSN_QUERY_PARAM: &str = "search";

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, RequestError> {
        let http = Client::builder()
            .user_agent(concat!("d2cmate/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a fresh GET for `endpoint`. An absent or empty `query` leaves
    /// the parameter off the URL entirely.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        param: &str,
        query: Option<&str>,
    ) -> Result<T, RequestError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut request = self.http.get(&url).header(CACHE_CONTROL, "no-store");
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            request = request.query(&[(param, query)]);
        }

        tracing::debug!(%url, ?query, "sending catalog request");
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "catalog request failed");
            return Err(RequestError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| {
            tracing::warn!(
                %url,
                error = %source,
                body_preview = %body.chars().take(200).collect::<String>(),
                "undecodable catalog response"
            );
            RequestError::Decode { endpoint, source }
        })
    }
}

#[async_trait]
impl CatalogBackend for ApiClient {
    async fn search_products(&self, query: Option<&str>) -> Result<Vec<Product>, RequestError> {
        let products: Vec<Product> = self
            .get_json(PRODUCT_ENDPOINT, PRODUCT_QUERY_PARAM, query)
            .await?;
        tracing::debug!(count = products.len(), "product search completed");
        Ok(products)
    }

    async fn search_hsn(&self, query: Option<&str>) -> Result<Vec<HsnRecord>, RequestError> {
        let envelope: HsnEnvelope = self.get_json(HSN_ENDPOINT, HSN_QUERY_PARAM, query).await?;
        tracing::debug!(count = envelope.data.len(), "hsn search completed");
        Ok(envelope.data)
    }
}
