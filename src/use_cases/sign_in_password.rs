use crate::domain::{AuthClient, SignInError, TokenStore, UserInfo};

// Username/password sign-in that retains the issued token on success.
pub struct SignInWithPasswordUseCase<A, S> {
    pub auth: A,
    pub store: S,
}

impl<A, S> SignInWithPasswordUseCase<A, S>
where
    A: AuthClient,
    S: TokenStore,
{
    pub async fn execute(&self, username: &str, password: &str) -> Result<UserInfo, SignInError> {
        let user = self
            .auth
            .auth_with_password(username, password)
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "password sign-in failed");
                SignInError::from(err)
            })?;

        self.store.save(user.token.clone()).await.map_err(|err| {
            tracing::error!(error = %err, "failed to store session token");
            SignInError::Unknown
        })?;

        Ok(user)
    }
}
