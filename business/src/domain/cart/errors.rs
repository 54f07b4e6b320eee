#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartSubmissionError {
    #[error("cart.missing_identifiers")]
    MissingIdentifiers,
    #[error("cart.network")]
    Network,
    #[error("cart.unauthorized")]
    Unauthorized,
    #[error("cart.rejected")]
    Rejected { status: u16 },
}

impl CartSubmissionError {
    /// Whether confirming again may succeed without a new scan.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, CartSubmissionError::MissingIdentifiers)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("cart.line_not_found")]
    LineNotFound,
    #[error("cart.network")]
    Network,
    #[error("cart.unauthorized")]
    Unauthorized,
}
