use async_trait::async_trait;

use crate::domain::{AuthClient, AuthClientError, AuthClientResult, UserInfo};

pub const MOCK_USER_TOKEN: &str = "myUserToken";
pub const MOCK_USER_DISPLAY_NAME: &str = "A. N. Other";
pub const MOCK_USER_EMAIL: &str = "user@gmail.com";

// AuthClient that works without a server. Intended for tests and demos only:
// the password is never checked and invalidation always succeeds.
#[derive(Clone, Debug)]
pub struct MockAuthClient {
    user: UserInfo,
    email: String,
}

impl MockAuthClient {
    pub fn new() -> Self {
        Self {
            user: UserInfo::new(MOCK_USER_TOKEN, MOCK_USER_DISPLAY_NAME),
            email: MOCK_USER_EMAIL.to_string(),
        }
    }
}

impl Default for MockAuthClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthClient for MockAuthClient {
    async fn validate_token(&self, token: &str) -> AuthClientResult<UserInfo> {
        if token == self.user.token {
            return Ok(self.user.clone());
        }
        Err(AuthClientError::AuthenticationError)
    }

    async fn auth_with_password(
        &self,
        username: &str,
        _password: &str,
    ) -> AuthClientResult<UserInfo> {
        if username == self.email {
            return Ok(self.user.clone());
        }
        Err(AuthClientError::AuthenticationError)
    }

    async fn auth_with_google_id_token(&self, _id_token: &str) -> AuthClientResult<UserInfo> {
        unimplemented!("google id token sign-in is not available in the mock auth client")
    }

    async fn invalidate_token(&self, _token: &str) -> AuthClientResult<()> {
        Ok(())
    }

    fn supports_google_sign_in(&self) -> bool {
        false
    }
}
