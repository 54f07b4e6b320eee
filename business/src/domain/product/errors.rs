use crate::domain::scan::errors::PayloadParseError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductLookupError {
    #[error("product.not_found")]
    NotFound,
    #[error("product.network")]
    Network,
    #[error("product.unauthorized")]
    Unauthorized,
}

/// Classified failure of payload resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    Parse(#[from] PayloadParseError),
    #[error(transparent)]
    Lookup(#[from] ProductLookupError),
}
