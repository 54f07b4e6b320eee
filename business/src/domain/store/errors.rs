#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("store.not_found")]
    NotFound,
    #[error("store.network")]
    Network,
    #[error("store.unauthorized")]
    Unauthorized,
}
