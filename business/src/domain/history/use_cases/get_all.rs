use async_trait::async_trait;

use crate::domain::history::errors::HistoryError;
use crate::domain::history::model::ScanHistoryEntry;

#[async_trait]
pub trait GetScanHistoryUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ScanHistoryEntry>, HistoryError>;
}
