use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A product as returned by `/search`.
///
/// The catalog behind the API is not normalized: different sources use
/// different key names for the same field and any field may be missing. The
/// record therefore keeps the raw JSON object and leaves interpretation to the
/// accessors in [`crate::formatters::fields`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product(Map<String, Value>);

impl Product {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Builds a product from an arbitrary JSON value. Anything other than an
    /// object yields an empty product.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::default(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Product {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
