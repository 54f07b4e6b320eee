use async_trait::async_trait;

use crate::domain::product::errors::ResolveError;
use crate::domain::product::model::ResolvedScan;

pub struct ResolvePayloadParams {
    pub payload: String,
}

#[async_trait]
pub trait ResolvePayloadUseCase: Send + Sync {
    async fn execute(&self, params: ResolvePayloadParams) -> Result<ResolvedScan, ResolveError>;
}
