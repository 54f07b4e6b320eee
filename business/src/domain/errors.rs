/// Errors raised by the storefront backend gateways.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway.not_found")]
    NotFound,
    #[error("gateway.network")]
    Network,
    #[error("gateway.unauthorized")]
    Unauthorized,
    #[error("gateway.rejected")]
    Rejected { status: u16 },
    #[error("gateway.invalid_response")]
    InvalidResponse,
}

impl GatewayError {
    pub fn not_found() -> Self {
        GatewayError::NotFound
    }
    pub fn network() -> Self {
        GatewayError::Network
    }
    pub fn unauthorized() -> Self {
        GatewayError::Unauthorized
    }
    pub fn rejected(status: u16) -> Self {
        GatewayError::Rejected { status }
    }
}
