#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("history.network")]
    Network,
    #[error("history.unauthorized")]
    Unauthorized,
}
