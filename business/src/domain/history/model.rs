use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::{ProductId, StoreId};

/// A product the customer has looked up by scanning. Recorded by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanHistoryEntry {
    pub product_id: ProductId,
    pub store_id: Option<StoreId>,
    pub product_name: String,
    pub scanned_at: Option<DateTime<Utc>>,
}
