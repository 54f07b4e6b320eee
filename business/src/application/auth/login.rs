use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::gateway::AuthGateway;
use crate::domain::auth::model::{AuthenticatedUser, Credentials, UserRole};
use crate::domain::auth::use_cases::login::{LoginParams, LoginUseCase};
use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;

/// Logs a customer in. Cart and history endpoints only accept customers.
pub struct LoginUseCaseImpl {
    pub gateway: Arc<dyn AuthGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<AuthenticatedUser, AuthError> {
        let email = params.email.trim();
        if email.is_empty() || params.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        self.logger.info(&format!("Logging in as {}", email));

        let credentials = Credentials {
            email: email.to_string(),
            password: params.password,
        };

        let user = self
            .gateway
            .login(&credentials)
            .await
            .map_err(|e| match e {
                GatewayError::Unauthorized | GatewayError::Rejected { status: 400..=403 } => {
                    AuthError::InvalidCredentials
                }
                _ => AuthError::Network,
            })?;

        if user.role != UserRole::Customer {
            self.logger.warn(&format!(
                "User {} has role {}, scanning requires a customer account",
                user.user_id, user.role
            ));
            return Err(AuthError::RoleNotAllowed);
        }

        Ok(user)
    }
}
