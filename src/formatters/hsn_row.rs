use super::numbers::plain_number;
use crate::schemas::HsnRecord;

/// One row of the HSN results table. The schema is closed, so no fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HsnRow {
    pub id: String,
    pub hsn_code: String,
    pub description: String,
    pub gst_rate: String,
}

impl HsnRow {
    pub const HEADERS: [&'static str; 4] = ["ID", "HSN Code", "Description", "GST Rate"];

    pub fn from_record(record: &HsnRecord) -> Self {
        Self {
            id: record.id.to_string(),
            hsn_code: record.hsn_code.clone(),
            description: record.description.clone(),
            gst_rate: format!("{}%", plain_number(record.gst_rate)),
        }
    }

    pub fn cells(&self) -> [&str; 4] {
        [&self.id, &self.hsn_code, &self.description, &self.gst_rate]
    }
}
