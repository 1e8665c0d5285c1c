pub mod hsn_record;
pub mod product;
pub mod record;

pub use hsn_record::{HsnEnvelope, HsnRecord};
pub use product::Product;
pub use record::{Catalog, Record};
