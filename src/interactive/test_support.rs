//! In-memory catalog used by the interactive tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::api::{CatalogBackend, RequestError};
use crate::schemas::{HsnRecord, Product};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Products(Option<String>),
    Hsn(Option<String>),
}

#[derive(Default)]
pub struct FakeBackend {
    products: Vec<Product>,
    hsn: Vec<HsnRecord>,
    fail_with: Option<u16>,
    calls: Mutex<Vec<Call>>,
}

impl FakeBackend {
    pub fn new(products: Vec<Product>, hsn: Vec<HsnRecord>) -> Self {
        Self {
            products,
            hsn,
            ..Self::default()
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_failure(&self) -> Result<(), RequestError> {
        match self.fail_with {
            Some(status) => Err(RequestError::Status { status }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CatalogBackend for FakeBackend {
    async fn search_products(&self, query: Option<&str>) -> Result<Vec<Product>, RequestError> {
        self.record(Call::Products(query.map(str::to_string)));
        self.check_failure()?;
        Ok(self.products.clone())
    }

    async fn search_hsn(&self, query: Option<&str>) -> Result<Vec<HsnRecord>, RequestError> {
        self.record(Call::Hsn(query.map(str::to_string)));
        self.check_failure()?;
        let prefix = query.unwrap_or_default();
        Ok(self
            .hsn
            .iter()
            .filter(|r| r.hsn_code.starts_with(prefix))
            .cloned()
            .collect())
    }
}

pub fn sample_products(count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| {
            Product::from_value(json!({
                "_id": format!("p{i}"),
                "title": format!("Product {i}"),
                "price": 100 + i,
            }))
        })
        .collect()
}

/// Twelve codes sharing the `220204` prefix plus two unrelated ones.
pub fn sample_hsn() -> Vec<HsnRecord> {
    let mut records: Vec<HsnRecord> = (0..12)
        .map(|i| HsnRecord {
            id: i + 1,
            hsn_code: format!("2202040{i:x}"),
            description: format!("Beverage variant {i}"),
            gst_rate: 18.0,
        })
        .collect();
    records.push(HsnRecord {
        id: 100,
        hsn_code: "04011000".to_string(),
        description: "Milk".to_string(),
        gst_rate: 0.0,
    });
    records.push(HsnRecord {
        id: 101,
        hsn_code: "09021010".to_string(),
        description: "Green tea".to_string(),
        gst_rate: 5.0,
    });
    records
}
