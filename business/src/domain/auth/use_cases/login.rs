use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::AuthenticatedUser;

pub struct LoginParams {
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, params: LoginParams) -> Result<AuthenticatedUser, AuthError>;
}
