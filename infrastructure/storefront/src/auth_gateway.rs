use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use business::domain::auth::gateway::AuthGateway;
use business::domain::auth::model::{AuthenticatedUser, Credentials, UserRole};
use business::domain::errors::GatewayError;

use crate::client::{StorefrontClient, ensure_success, transport_error};

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    user_id: String,
    role: String,
}

/// Logs in against the storefront. The session cookie lands in the shared
/// client's cookie store.
pub struct AuthGatewayStorefront {
    client: StorefrontClient,
}

impl AuthGatewayStorefront {
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for AuthGatewayStorefront {
    async fn login(&self, credentials: &Credentials) -> Result<AuthenticatedUser, GatewayError> {
        let response = self
            .client
            .client
            .post(self.client.login_url())
            .json(&LoginBody {
                email: &credentials.email,
                password: &credentials.password,
            })
            .send()
            .await
            .map_err(transport_error)?;

        let data: LoginResponse = ensure_success(response)?
            .json()
            .await
            .map_err(|_| GatewayError::InvalidResponse)?;

        let role = data
            .role
            .parse::<UserRole>()
            .map_err(|_| GatewayError::InvalidResponse)?;

        Ok(AuthenticatedUser {
            user_id: data.user_id,
            role,
        })
    }
}
