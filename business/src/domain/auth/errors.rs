#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("auth.missing_credentials")]
    MissingCredentials,
    #[error("auth.invalid_credentials")]
    InvalidCredentials,
    #[error("auth.role_not_allowed")]
    RoleNotAllowed,
    #[error("auth.network")]
    Network,
}
