use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{AuthenticatedUser, Credentials};

/// Opens an authenticated backend session. The session itself (cookie) is
/// held by the adapter and reused by the other gateways.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<AuthenticatedUser, GatewayError>;
}
