use async_trait::async_trait;

use crate::domain::entities::UserInfo;
use crate::domain::errors::AuthClientResult;

// Authority that verifies a user's identity from a token or credentials.
// Verification is expected to happen server-side; callers depend on this
// trait, never on a concrete client.
#[async_trait]
pub trait AuthClient: Send + Sync {
    async fn validate_token(&self, token: &str) -> AuthClientResult<UserInfo>;

    async fn auth_with_password(
        &self,
        username: &str,
        password: &str,
    ) -> AuthClientResult<UserInfo>;

    async fn auth_with_google_id_token(&self, id_token: &str) -> AuthClientResult<UserInfo>;

    async fn invalidate_token(&self, token: &str) -> AuthClientResult<()>;

    // Lets callers skip Google sign-in on clients that cannot serve it.
    fn supports_google_sign_in(&self) -> bool {
        true
    }
}

// Port for the caller-side session token.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self) -> Result<Option<String>, String>;
    async fn save(&self, token: String) -> Result<(), String>;
    async fn clear(&self) -> Result<(), String>;
}
