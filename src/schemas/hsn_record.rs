use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A row of the GST tax schedule served by `/hsn`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HsnRecord {
    pub id: i64,
    #[serde(deserialize_with = "string_or_number")]
    pub hsn_code: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub gst_rate: f64,
}

/// Body of a `/hsn` response. A body without `data` is an empty result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HsnEnvelope {
    #[serde(default)]
    pub data: Vec<HsnRecord>,
}

// Codes like 22021010 are sometimes emitted as JSON numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for hsn_code, got {other}"
        ))),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// NUMERIC columns tend to arrive as strings such as "18.00".
fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let rate = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        other => {
            return Err(serde::de::Error::custom(format!(
                "expected number or numeric string for gst_rate, got {other}"
            )));
        }
    };
    rate.filter(|r| r.is_finite())
        .ok_or_else(|| serde::de::Error::custom("gst_rate is not a finite number"))
}
